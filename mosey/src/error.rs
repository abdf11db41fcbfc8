use thiserror::Error;

/// Failures the slug pipeline reports to callers.
///
/// Only two conditions are worth an `Err`: input that has no textual form at
/// all, and byte input whose declared charset cannot be decoded. Everything
/// else (unmapped characters, empty input, input that strips down to nothing)
/// degrades gracefully to `?` substitution or an empty slug.
#[derive(Debug, Error)]
pub enum SlugError {
    /// The input value cannot be rendered as text.
    #[error("cannot convert `{type_name}` to text")]
    InvalidArgument { type_name: String },

    /// The declared input charset could not be decoded to UTF-8, either
    /// because the label is unknown or the bytes are malformed.
    #[error("cannot decode input as `{charset}`")]
    DecodeFailure { charset: String },
}
