pub mod dimensions;
pub mod format;
pub mod image_rs_processor;
pub mod processor;
