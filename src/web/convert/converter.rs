use std::sync::Arc;

use uuid::Uuid;

use crate::error::ConvertError;
use crate::image::processor::{ConvertOptions, ImageProcessor};

/// One converted image, ready to be sent back to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedImage {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ConvertService {
    processor: Arc<dyn ImageProcessor>,
}

impl ConvertService {
    pub fn new(processor: Arc<dyn ImageProcessor>) -> Self {
        Self { processor }
    }

    /// Convert one uploaded image.
    ///
    /// The download filename keeps the sanitized stem of the uploaded
    /// filename and swaps the extension for the target format's; an
    /// unusable filename falls back to a generated one.
    pub fn convert(
        &self,
        original_filename: &str,
        img_bytes: &[u8],
        opts: &ConvertOptions,
    ) -> Result<ConvertedImage, ConvertError> {
        if img_bytes.is_empty() {
            return Err(ConvertError::validation("empty image payload"));
        }

        let bytes = self.processor.convert(img_bytes, opts)?;

        let filename = format!(
            "{}.{}",
            output_stem(original_filename),
            opts.format.extension()
        );

        Ok(ConvertedImage {
            filename,
            content_type: opts.format.content_type(),
            bytes,
        })
    }
}

fn output_stem(filename: &str) -> String {
    let safe = filename.trim().replace('/', "_");
    let stem = match safe.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => safe.as_str(),
    };
    if stem.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::dimensions::ResizePlan;
    use crate::image::format::OutputFormat;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubProcessor {
        calls: Mutex<Vec<ConvertOptions>>,
        out: Vec<u8>,
    }

    impl StubProcessor {
        fn with_out(out: &[u8]) -> Self {
            Self {
                calls: Mutex::new(vec![]),
                out: out.to_vec(),
            }
        }
    }

    impl ImageProcessor for StubProcessor {
        fn convert(&self, _img_bytes: &[u8], opts: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
            self.calls.lock().unwrap().push(opts.clone());
            Ok(self.out.clone())
        }
    }

    #[derive(Default)]
    struct FailingProcessor;
    impl ImageProcessor for FailingProcessor {
        fn convert(&self, _img_bytes: &[u8], _opts: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
            Err(ConvertError::Encode("boom".into()))
        }
    }

    fn webp_opts() -> ConvertOptions {
        ConvertOptions {
            format: OutputFormat::Webp { quality: 80 },
            resize: ResizePlan::keep_original(),
        }
    }

    #[test]
    fn filename_stem_is_kept_and_extension_swapped() {
        let stub = Arc::new(StubProcessor::with_out(b"CONVERTED"));
        let svc = ConvertService::new(stub.clone());

        let out = svc.convert("photo.png", b"orig", &webp_opts()).unwrap();

        assert_eq!(out.filename, "photo.webp");
        assert_eq!(out.content_type, "image/webp");
        assert_eq!(out.bytes, b"CONVERTED");

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], webp_opts());
    }

    #[test]
    fn multi_dot_filename_keeps_inner_dots() {
        let svc = ConvertService::new(Arc::new(StubProcessor::with_out(b"X")));
        let out = svc.convert("archive.tar.gz", b"o", &webp_opts()).unwrap();
        assert_eq!(out.filename, "archive.tar.webp");
    }

    #[test]
    fn path_separators_are_sanitized() {
        let svc = ConvertService::new(Arc::new(StubProcessor::with_out(b"X")));
        let out = svc.convert("a/b/c.png", b"o", &webp_opts()).unwrap();
        assert_eq!(out.filename, "a_b_c.webp");
    }

    #[test]
    fn empty_filename_falls_back_to_generated_stem() {
        let svc = ConvertService::new(Arc::new(StubProcessor::with_out(b"X")));

        let out = svc.convert("", b"o", &webp_opts()).unwrap();
        assert!(out.filename.ends_with(".webp"));
        assert!(out.filename.len() > ".webp".len());

        // An extension with no stem gets the same treatment.
        let out = svc.convert(".png", b"o", &webp_opts()).unwrap();
        assert!(out.filename.ends_with(".webp"));
        assert!(out.filename.len() > ".webp".len());
    }

    #[test]
    fn empty_payload_is_rejected_before_processing() {
        let stub = Arc::new(StubProcessor::with_out(b"X"));
        let svc = ConvertService::new(stub.clone());

        let err = svc.convert("a.png", b"", &webp_opts()).unwrap_err();
        assert!(matches!(err, ConvertError::Validation(_)));
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn processor_errors_pass_through() {
        let svc = ConvertService::new(Arc::new(FailingProcessor));
        let err = svc.convert("a.png", b"o", &webp_opts()).unwrap_err();
        assert!(matches!(err, ConvertError::Encode(_)));
    }
}
