#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Transliterating slug generator.
//!
//! `mosey` turns arbitrary human-readable text into a normalized, URL-safe
//! slug: lowercase ASCII letters, digits, and a single delimiter. A
//! hand-maintained table transliterates Latin-extended, Greek, Cyrillic, and
//! Georgian text to ASCII, with locale-sensitive overrides layered on top;
//! a fixed normalization sequence then collapses everything else into the
//! delimiter.
//!
//! ```
//! use mosey::{SlugConfig, generate, slugify};
//!
//! assert_eq!(slugify("? What ~\\!# the &&& hell --- is ... it?????"), "what-the-hell-is-it");
//!
//! let config = SlugConfig::default().with_locale("ru");
//! assert_eq!(generate("Привет мир", &config).unwrap(), "privet-mir");
//! ```
//!
//! Slugs are stable identifiers, not unique ones — uniqueness against a
//! datastore is the caller's concern.

pub const MOSEY_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod charset;
pub mod error;
pub mod locale;
pub mod slug;
pub mod table;
pub mod text;
pub mod translit;

// Re-exports for convenience
pub use error::SlugError;
pub use locale::{LocaleProfile, LocaleTag, profile_for};
pub use slug::{SlugConfig, generate, generate_bytes, slugify};
pub use text::ToText;
pub use translit::{translit, translit_bytes, transliterate};
