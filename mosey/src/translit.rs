//! Unicode-to-ASCII transliteration.
//!
//! The core pass walks the input left to right and emits, per character: the
//! locale override if one applies, else the base-table replacement, else the
//! character itself when it is already ASCII, else `?`. Locales with
//! substitution rules (currently the Russian family) get those applied to
//! the whole string first, in order.

use std::borrow::Cow;

use log::debug;

use crate::charset;
use crate::error::SlugError;
use crate::locale::{self, LocaleTag};
use crate::table;
use crate::text::ToText;

/// Transliterate `input` to best-effort ASCII under `locale`.
///
/// Infallible: characters the table cannot map become `?`. Overrides are a
/// call-local overlay over the immutable base table, so concurrent calls
/// with different locales never interfere.
pub fn transliterate(input: &str, locale: &LocaleTag) -> String {
    let profile = locale::profile_for(locale);
    let mut text = Cow::Borrowed(input);
    if let Some(profile) = profile {
        debug!("transliterating '{locale}' with '{}' profile", profile.language);
        for rule in profile.rules {
            text = Cow::Owned(rule.apply(&text));
        }
    }
    let overrides = profile.map_or(&[][..], |p| p.overrides);

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(&(_, replacement)) = overrides.iter().find(|&&(key, _)| key == c) {
            out.push_str(replacement);
        } else if let Some(replacement) = table::lookup(c) {
            out.push_str(replacement);
        } else if c.is_ascii() {
            out.push(c);
        } else {
            out.push('?');
        }
    }
    out
}

/// Coercing entry point: convert any [`ToText`] value to ASCII.
///
/// `locale` is a raw tag (`"fr"`, `"ru_RU.UTF8"`); `None` means the default.
/// The tag is always passed explicitly — the crate never consults
/// process-wide locale state.
pub fn translit<T: ToText + ?Sized>(input: &T, locale: Option<&str>) -> Result<String, SlugError> {
    let text = input.to_text()?;
    let tag = locale.map_or_else(LocaleTag::default, LocaleTag::parse);
    Ok(transliterate(&text, &tag))
}

/// Transliterate raw bytes, decoding them first.
///
/// The effective charset is `charset` if given, else the locale tag's
/// `.charset` suffix, else UTF-8. Decoding problems surface as
/// [`SlugError::DecodeFailure`].
pub fn translit_bytes(
    input: &[u8],
    charset: Option<&str>,
    locale: Option<&str>,
) -> Result<String, SlugError> {
    let tag = locale.map_or_else(LocaleTag::default, LocaleTag::parse);
    let label = charset.or(tag.charset.as_deref()).unwrap_or("utf-8");
    let text = charset::decode(input, label)?;
    Ok(transliterate(&text, &tag))
}
