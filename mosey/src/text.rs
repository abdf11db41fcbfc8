//! Input coercion for the slug entry points.
//!
//! The generator accepts more than plain strings: sequences are joined with
//! single spaces, scalars are formatted, and paths pass through when they hold
//! valid UTF-8. Anything without a textual form reports
//! [`SlugError::InvalidArgument`] naming the offending type.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::SlugError;

/// Conversion of a caller value into the text the transliterator consumes.
///
/// Implement this for custom types to feed them straight into
/// [`generate`](crate::generate); return [`SlugError::InvalidArgument`] when
/// a value has no sensible string form.
pub trait ToText {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError>;
}

impl ToText for str {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToText for String {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToText for Cow<'_, str> {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToText for char {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        Ok(Cow::Owned(self.to_string()))
    }
}

/// Sequences become a single string joined with single spaces.
impl<S: AsRef<str>> ToText for [S] {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        Ok(Cow::Owned(self.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")))
    }
}

impl<S: AsRef<str>> ToText for Vec<S> {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        self.as_slice().to_text()
    }
}

impl ToText for Path {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        self.to_str().map(Cow::Borrowed).ok_or_else(|| SlugError::InvalidArgument {
            type_name: std::any::type_name::<Path>().to_string(),
        })
    }
}

impl ToText for PathBuf {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        self.as_path().to_text()
    }
}

impl ToText for OsStr {
    fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
        self.to_str().map(Cow::Borrowed).ok_or_else(|| SlugError::InvalidArgument {
            type_name: std::any::type_name::<OsStr>().to_string(),
        })
    }
}

macro_rules! impl_to_text_for_scalars {
    ($($ty:ty),* $(,)?) => {
        $(impl ToText for $ty {
            fn to_text(&self) -> Result<Cow<'_, str>, SlugError> {
                Ok(Cow::Owned(self.to_string()))
            }
        })*
    };
}

impl_to_text_for_scalars!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_passes_through_borrowed() {
        let text = "hello".to_text().unwrap();
        assert!(matches!(text, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_sequence_joins_with_single_spaces() {
        let words = vec!["new", "site", "launch"];
        assert_eq!(words.to_text().unwrap(), "new site launch");

        let owned: Vec<String> = vec!["a".into(), "b".into()];
        assert_eq!(owned.to_text().unwrap(), "a b");
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(42_i32.to_text().unwrap(), "42");
        assert_eq!(3.5_f64.to_text().unwrap(), "3.5");
        assert_eq!('x'.to_text().unwrap(), "x");
    }

    #[test]
    fn test_utf8_path_is_text() {
        let path = Path::new("articles/Hello World.txt");
        assert_eq!(path.to_text().unwrap(), "articles/Hello World.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_invalid_argument() {
        use std::os::unix::ffi::OsStrExt;
        let raw = OsStr::from_bytes(b"bad\xff");
        match raw.to_text() {
            Err(SlugError::InvalidArgument { type_name }) => {
                assert!(type_name.contains("OsStr"));
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
