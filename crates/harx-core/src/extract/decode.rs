//! Response body decoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::har::HarContent;

/// Marker the HAR format uses for base64-encoded (binary) bodies.
const BASE64_MARKER: &str = "base64";

/// Recoverable per-entry decode failure. The run continues with the
/// next entry.
#[derive(Debug, Error)]
#[error("invalid base64 response body")]
pub struct DecodeError(#[source] base64::DecodeError);

/// Decodes an entry's captured body to raw bytes.
///
/// `Ok(None)` means the entry has no body text and should be skipped
/// silently (e.g. a 304 with no payload). Bodies tagged `base64` are
/// decoded; anything else is taken as UTF-8 text verbatim.
pub fn decode_body(content: &HarContent) -> Result<Option<Vec<u8>>, DecodeError> {
    let text = match &content.text {
        Some(text) => text,
        None => return Ok(None),
    };

    if content.encoding.as_deref() == Some(BASE64_MARKER) {
        // Capture tooling may wrap or pad long bodies with whitespace;
        // non-alphabet bytes are discarded before decoding, matching
        // how the browsers' own HAR exports are consumed.
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
            .collect();
        let bytes = BASE64.decode(cleaned).map_err(DecodeError)?;
        Ok(Some(bytes))
    } else {
        Ok(Some(text.as_bytes().to_vec()))
    }
}
