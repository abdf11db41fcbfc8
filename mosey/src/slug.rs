//! The slug pipeline: transliterate, then normalize.
//!
//! The normalizer runs a fixed eight-step sequence. The order is load-bearing
//! and deliberately not "simplified": which characters survive the
//! intermediate lowercase/trim depends on the separator class being applied
//! twice (step 4 lets `/_|+ -` through, step 7 folds them into the
//! delimiter).

use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::charset;
use crate::error::SlugError;
use crate::locale::LocaleTag;
use crate::text::ToText;
use crate::translit::transliterate;

lazy_static! {
    /// Step 4: runs of characters outside the allowed set.
    static ref DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9/_|+ -]+").expect("disallowed class");
    /// Step 7: runs of the separator characters step 4 let through.
    static ref SEPARATORS: Regex = Regex::new(r"[/_|+ -]+").expect("separator class");
}

/// Per-call slug settings. Built from caller arguments, discarded after use;
/// nothing persists between `generate` invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Literal substrings blanked to a single space before normalization,
    /// applied in list order.
    pub remove: Vec<String>,
    /// Word separator in the finished slug.
    pub delimiter: char,
    /// Locale driving transliteration overrides.
    pub locale: LocaleTag,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self { remove: Vec::new(), delimiter: '-', locale: LocaleTag::default() }
    }
}

impl SlugConfig {
    pub fn with_locale(mut self, tag: &str) -> Self {
        self.locale = LocaleTag::parse(tag);
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_remove<I, S>(mut self, remove: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove = remove.into_iter().map(Into::into).collect();
        self
    }
}

/// Generate a slug from any [`ToText`] value.
///
/// The result contains only lowercase ASCII letters, digits, and the
/// configured delimiter, with no leading, trailing, or doubled delimiters.
/// Empty or all-symbol input yields an empty string, not an error.
pub fn generate<T: ToText + ?Sized>(input: &T, config: &SlugConfig) -> Result<String, SlugError> {
    let text = input.to_text()?;
    Ok(normalize(&text, config))
}

/// Generate a slug from raw bytes, decoding them first.
///
/// The charset comes from the config locale's `.charset` suffix, defaulting
/// to UTF-8; decoding problems surface as [`SlugError::DecodeFailure`].
pub fn generate_bytes(input: &[u8], config: &SlugConfig) -> Result<String, SlugError> {
    let label = config.locale.charset.as_deref().unwrap_or("utf-8");
    let text = charset::decode(input, label)?;
    Ok(normalize(&text, config))
}

/// Default-config convenience wrapper.
pub fn slugify(input: &str) -> String {
    normalize(input, &SlugConfig::default())
}

fn normalize(text: &str, config: &SlugConfig) -> String {
    // 1: transliterate everything, remove list or not
    let mut text = transliterate(text, &config.locale);

    // 2: blank each removal target, in list order
    for target in &config.remove {
        if !target.is_empty() {
            text = text.replace(target.as_str(), " ");
        }
    }

    // 3: second-chance ASCII pass for anything the table missed
    if !text.is_ascii() {
        debug!("transliteration left non-ASCII residue in {text:?}");
        text = deunicode::deunicode_with_tofu(&text, "?");
    }

    // 4: runs outside the allowed class become the delimiter
    let delimiter = config.delimiter.to_string();
    let text = DISALLOWED.replace_all(&text, NoExpand(&delimiter));

    // 5: collapse delimiter runs (the delimiter is dynamic, so a plain scan
    // rather than a runtime-built regex)
    let mut collapsed = String::with_capacity(text.len());
    for c in text.chars() {
        if c == config.delimiter && collapsed.ends_with(config.delimiter) {
            continue;
        }
        collapsed.push(c);
    }

    // 6: lowercase, then trim the delimiter from both ends
    let lowered = collapsed.to_lowercase();
    let trimmed = lowered.trim_matches(config.delimiter);

    // 7: fold the surviving separator characters into the delimiter
    let text = SEPARATORS.replace_all(trimmed, NoExpand(&delimiter));

    // 8: idempotent final guard
    text.trim().trim_matches(config.delimiter).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_symbol_input_is_empty_not_an_error() {
        assert_eq!(slugify("~!@#$%^&*()"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_delimiter_never_doubles_or_wraps() {
        assert_eq!(slugify("--a----b--"), "a-b");
        assert_eq!(slugify("  a  b  "), "a-b");
    }

    #[test]
    fn test_remove_entries_apply_in_order() {
        let config = SlugConfig::default().with_remove(["abc", "b"]);
        // "xabcy" loses "abc" first, so the later "b" finds nothing
        assert_eq!(generate("xabcy", &config).unwrap(), "x-y");
        // empty entries are skipped, not an error
        let config = SlugConfig::default().with_remove(["", "BAD"]);
        assert_eq!(generate("aBADb", &config).unwrap(), "a-b");
    }

    #[test]
    fn test_separators_fold_into_custom_delimiter() {
        let config = SlugConfig::default().with_delimiter('_');
        assert_eq!(generate("a//b__c  d", &config).unwrap(), "a_b_c_d");
        assert_eq!(generate("a|b+c", &config).unwrap(), "a_b_c");
    }

    #[test]
    fn test_unmapped_characters_degrade_to_nothing() {
        // CJK is not in the table; the placeholder strips away like any
        // other disallowed character
        assert_eq!(slugify("北京 2024"), "2024");
        assert_eq!(slugify("漢字"), "");
    }
}
