use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

/// An encoded still image, ready to be shipped to the classifier.
#[derive(Clone, PartialEq)]
pub struct EncodedFrame {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl EncodedFrame {
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            mime: "image/jpeg".to_string(),
            bytes,
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

impl fmt::Debug for EncodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedFrame")
            .field("mime", &self.mime)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

pub trait DeviceCamera {
    /// `Ok(None)` when no frame is available yet; the cycle is then skipped.
    fn capture_frame(&self) -> Result<Option<EncodedFrame>, Box<dyn std::error::Error + Send + Sync>>;
}
