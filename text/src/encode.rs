use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE};
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Result;

/// Random string of `length` characters drawn from `[A-Za-z0-9_-]`.
///
/// Panics if the operating system's entropy source is unavailable.
pub fn random(length: usize) -> String {
    let mut result = String::with_capacity(length);
    while result.len() < length {
        let missing = length - result.len();
        let mut bytes = vec![0u8; (missing / 3 + 1) * 3];
        OsRng.fill_bytes(&mut bytes);

        let encoded = URL_SAFE.encode(&bytes);
        result.extend(
            encoded
                .chars()
                .filter(|c| !matches!(c, '/' | '+' | '='))
                .take(missing),
        );
    }
    result
}

pub fn to_base64(value: &str) -> String {
    STANDARD.encode(value)
}

/// Decodes standard-alphabet base64. `strict` requires the padding.
pub fn from_base64(value: &str, strict: bool) -> Result<String> {
    let bytes = if strict {
        STANDARD.decode(value)?
    } else {
        STANDARD_NO_PAD.decode(value.trim_end_matches('='))?
    };
    Ok(String::from_utf8(bytes)?)
}
