//! Locale tags and the per-locale transliteration profiles.
//!
//! A profile bundles the table overrides and whole-string substitution rules
//! a language family needs on top of the base table. The registry below is
//! the extensibility point for future locales: add an override slice (and
//! rules, if needed) and a [`LocaleProfile`] entry.

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::table;

lazy_static! {
    static ref TAG_RE: Regex =
        Regex::new(r"(?i)^([a-z]{2})(?:[-_]([a-z]{2}))?(?:\.(.+))?$").expect("locale tag pattern");
}

/// Parsed form of a `language[-region][.charset]` locale tag.
///
/// Language and region are normalized to lowercase; the charset suffix is
/// kept as given. Parsing never fails — an unrecognizable tag falls back to
/// the default (`en`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleTag {
    pub language: String,
    pub region: Option<String>,
    pub charset: Option<String>,
}

impl LocaleTag {
    /// Parse a tag like `en`, `fr-CA`, or `ru_RU.UTF8`.
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = TAG_RE.captures(raw.trim()) {
            Self {
                language: caps[1].to_ascii_lowercase(),
                region: caps.get(2).map(|m| m.as_str().to_ascii_lowercase()),
                charset: caps.get(3).map(|m| m.as_str().to_string()),
            }
        } else {
            debug!("unparsable locale tag '{raw}', falling back to '{}'", Self::default());
            Self::default()
        }
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self { language: "en".to_string(), region: None, charset: None }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        if let Some(charset) = &self.charset {
            write!(f, ".{charset}")?;
        }
        Ok(())
    }
}

/// Lookahead guard of a substitution rule.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FollowGuard {
    /// No constraint on the next character.
    Any,
    /// Skip the match when the next character is lowercase Cyrillic
    /// (`а..=я`, `ё`) or ASCII `y`.
    NotLowerCyrillicOrY,
}

impl FollowGuard {
    fn rejects(self, next: Option<char>) -> bool {
        match self {
            Self::Any => false,
            Self::NotLowerCyrillicOrY => {
                matches!(next, Some(c) if ('а'..='я').contains(&c) || c == 'ё' || c == 'y')
            },
        }
    }
}

/// What a matched character becomes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Replacement {
    Literal(&'static str),
    /// The matched character's base-table entry, uppercased (`Ж` → `ZH`).
    TableUpper,
}

/// One whole-string substitution pass, run before the per-character table
/// lookup. Guards consult the pass's own input string, so sequential rules
/// see each other's output but a rule never sees its own replacements.
#[derive(Debug)]
pub(crate) struct SubstRule {
    pub(crate) targets: &'static str,
    pub(crate) not_preceded_by: &'static str,
    pub(crate) not_followed_by: FollowGuard,
    pub(crate) replacement: Replacement,
}

impl SubstRule {
    pub(crate) fn apply(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len());
        for (i, &c) in chars.iter().enumerate() {
            let preceded = i > 0 && self.not_preceded_by.contains(chars[i - 1]);
            if self.targets.contains(c)
                && !preceded
                && !self.not_followed_by.rejects(chars.get(i + 1).copied())
            {
                match self.replacement {
                    Replacement::Literal(text) => out.push_str(text),
                    Replacement::TableUpper => {
                        out.push_str(&table::lookup(c).unwrap_or_default().to_ascii_uppercase());
                    },
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Table overrides and substitution rules for one language family.
#[derive(Debug)]
pub struct LocaleProfile {
    pub(crate) language: &'static str,
    /// When set, the tag's region must match exactly (`fi-fi` but not `fi`).
    pub(crate) exact_region: Option<&'static str>,
    pub(crate) overrides: &'static [(char, &'static str)],
    pub(crate) rules: &'static [SubstRule],
}

// English prefers bare vowels over the base table's digraphs.
static EN_OVERRIDES: &[(char, &'static str)] =
    &[('Ä', "A"), ('ä', "a"), ('Ö', "O"), ('ö', "o"), ('Ü', "U"), ('ü', "u")];

// Finnish: as English, minus uppercase Ü.
static FI_OVERRIDES: &[(char, &'static str)] =
    &[('ä', "a"), ('ö', "o"), ('ü', "u"), ('Ä', "A"), ('Ö', "O")];

// French keeps the Æ ligature and folds apostrophes into hyphens
// (l'été → l-été before the normalizer collapses it).
static FR_OVERRIDES: &[(char, &'static str)] = &[
    ('Æ', "Ae"),
    ('Ä', "A"),
    ('ä', "a"),
    ('Ö', "O"),
    ('ö', "o"),
    ('Ü', "U"),
    ('ü', "u"),
    ('\'', "-"),
    ('’', "-"),
];

static IS_OVERRIDES: &[(char, &'static str)] = &[('Æ', "Ae")];

static UA_OVERRIDES: &[(char, &'static str)] = &[('и', "y"), ('ѣ', "i")];

static RU_OVERRIDES: &[(char, &'static str)] = &[('Ї', "I"), ('ї', "i")];

const LOWER_AND_UPPER_CONSONANTS: &str = "бвгджзклмнпрстфхцчшщБВГДЖЗКЛМНПРСТФХЦЧШЩ";
const UPPER_CONSONANTS: &str = "БВГДЖЗКЛМНПРСТФХЦЧШЩ";

// Russian е/ё need a leading glide when they start a word or follow a vowel:
// Ель → Yel, but рек → rek. The four rules run in order, each consuming the
// previous rule's output.
static RU_RULES: &[SubstRule] = &[
    SubstRule {
        targets: "её",
        not_preceded_by: LOWER_AND_UPPER_CONSONANTS,
        not_followed_by: FollowGuard::Any,
        replacement: Replacement::Literal("ye"),
    },
    SubstRule {
        targets: "ЕЁ",
        not_preceded_by: UPPER_CONSONANTS,
        not_followed_by: FollowGuard::NotLowerCyrillicOrY,
        replacement: Replacement::Literal("YE"),
    },
    SubstRule {
        targets: "ЕЁ",
        not_preceded_by: UPPER_CONSONANTS,
        not_followed_by: FollowGuard::Any,
        replacement: Replacement::Literal("Ye"),
    },
    // Digraph-mapped consonants keep their case when the rest of the word is
    // uppercase too: ЖУК → ZHUK, Жук → Zhuk.
    SubstRule {
        targets: "ЖХЦЧШЩЮЯ",
        not_preceded_by: "",
        not_followed_by: FollowGuard::NotLowerCyrillicOrY,
        replacement: Replacement::TableUpper,
    },
];

static PROFILES: &[LocaleProfile] = &[
    LocaleProfile { language: "en", exact_region: None, overrides: EN_OVERRIDES, rules: &[] },
    LocaleProfile {
        language: "fi",
        exact_region: Some("fi"),
        overrides: FI_OVERRIDES,
        rules: &[],
    },
    LocaleProfile { language: "fr", exact_region: None, overrides: FR_OVERRIDES, rules: &[] },
    LocaleProfile {
        language: "is",
        exact_region: Some("is"),
        overrides: IS_OVERRIDES,
        rules: &[],
    },
    LocaleProfile { language: "ua", exact_region: None, overrides: UA_OVERRIDES, rules: &[] },
    LocaleProfile { language: "ru", exact_region: None, overrides: RU_OVERRIDES, rules: RU_RULES },
];

/// Find the profile covering a locale tag, if any. Languages without a
/// registered profile use the base table alone.
pub fn profile_for(tag: &LocaleTag) -> Option<&'static LocaleProfile> {
    PROFILES.iter().find(|profile| {
        profile.language == tag.language
            && profile.exact_region.is_none_or(|region| tag.region.as_deref() == Some(region))
    })
}
