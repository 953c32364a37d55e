//! Page token codec
//!
//! A token is the standard base64 encoding of a decimal offset into the
//! filtered sequence. Tokens carry no integrity protection: any well-formed
//! token is accepted and simply maps to whatever slice its offset selects.

use base64::{Engine as _, engine::general_purpose};

use crate::error::PagingError;

/// Encode an offset as an opaque page token.
pub fn encode_token(offset: usize) -> String {
    general_purpose::STANDARD.encode(offset.to_string())
}

/// Decode a page token back into an offset.
///
/// Fails with [`PagingError::InvalidToken`] if the text is not valid
/// base64, or if the payload is not a non-negative decimal integer.
pub fn decode_token(token: &str) -> Result<usize, PagingError> {
    let bytes = general_purpose::STANDARD
        .decode(token)
        .map_err(|e| PagingError::InvalidToken(e.to_string()))?;

    let text = std::str::from_utf8(&bytes)
        .map_err(|_| PagingError::InvalidToken("payload is not UTF-8".to_string()))?;

    // usize parsing accepts a leading '+'; only plain digits are produced here
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PagingError::InvalidToken(format!(
            "payload {:?} is not a non-negative integer",
            text
        )));
    }

    text.parse::<usize>()
        .map_err(|e| PagingError::InvalidToken(e.to_string()))
}
