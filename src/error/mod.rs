pub mod convert;

pub use convert::ConvertError;
