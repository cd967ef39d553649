//! Encoded surface snapshots (PNG, base64).

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Prefix restored in front of the payload when the snapshot is displayed locally.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Point-in-time PNG encoding of the drawing surface.
///
/// Holds the base64 payload without any data-URI prefix, which is the form sent to
/// the interpretation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    base64: String,
}

impl EncodedImage {
    /// Encodes raw PNG bytes.
    pub fn from_png(png: &[u8]) -> Self {
        Self {
            base64: BASE64.encode(png),
        }
    }

    /// Accepts either a bare base64 payload or a `data:image/png;base64,` URI.
    pub fn from_base64(value: &str) -> Self {
        let payload = value.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(value);
        Self {
            base64: payload.to_string(),
        }
    }

    /// Base64 payload, prefix stripped.
    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// Length of the base64 payload in characters.
    pub fn len(&self) -> usize {
        self.base64.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base64.is_empty()
    }

    /// Data URI suitable for displaying the recap image.
    pub fn data_uri(&self) -> String {
        format!("{PNG_DATA_URI_PREFIX}{}", self.base64)
    }

    /// Decodes the payload back into PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.base64)
    }
}
