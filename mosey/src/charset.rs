//! Charset handling for byte inputs.
//!
//! Locale tags carry their charset as a `.suffix` (`cs_CZ.UTF8`), so labels
//! are matched case-insensitively with a leading dot tolerated. UTF-8 input
//! is validated directly; everything else goes through `encoding_rs`.

use encoding_rs::Encoding;
use log::warn;

use crate::error::SlugError;

/// Decode `bytes` according to a caller-declared charset label.
///
/// Unknown labels and malformed content both report
/// [`SlugError::DecodeFailure`] carrying the label as given — a
/// distinguishable failure value, never a panic.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, SlugError> {
    let normalized = label.trim().trim_start_matches('.');
    if normalized.eq_ignore_ascii_case("utf-8") || normalized.eq_ignore_ascii_case("utf8") {
        return match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(err) => {
                warn!("input is not valid UTF-8: {err}");
                Err(SlugError::DecodeFailure { charset: label.to_string() })
            },
        };
    }

    let Some(encoding) = Encoding::for_label(normalized.as_bytes()) else {
        warn!("unknown charset label '{label}'");
        return Err(SlugError::DecodeFailure { charset: label.to_string() });
    };
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!("input could not be decoded as {}", encoding.name());
        return Err(SlugError::DecodeFailure { charset: label.to_string() });
    }
    Ok(text.into_owned())
}
