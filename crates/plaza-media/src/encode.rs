//! Data-reference encoding for raw bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode raw bytes as a `data:` reference.
///
/// Used for profile pictures and anywhere a caller needs a self-contained
/// URL-like string instead of a stored blob.
pub fn data_reference(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}
