use mosey::{SlugConfig, SlugError, generate, generate_bytes, slugify, translit_bytes};

fn config(tag: &str) -> SlugConfig {
    SlugConfig::default().with_locale(tag)
}

#[test]
fn test_umlauts_per_locale() {
    assert_eq!(generate("Ärger", &config("en")).unwrap(), "arger");
    assert_eq!(generate("Ärger", &config("en-US")).unwrap(), "arger");
    // no profile for Czech: base-table digraphs apply
    assert_eq!(generate("Ärger", &config("cs_CZ.UTF8")).unwrap(), "aerger");
    assert_eq!(generate("Ärger", &config("de")).unwrap(), "aerger");
}

#[test]
fn test_finnish_exact_region() {
    assert_eq!(generate("Hämäläinen", &config("fi-fi")).unwrap(), "hamalainen");
    assert_eq!(generate("Hämäläinen", &config("fi")).unwrap(), "haemaelaeinen");
}

#[test]
fn test_french_elisions() {
    assert_eq!(generate("L'été à Paris", &config("fr")).unwrap(), "l-ete-a-paris");
    assert_eq!(generate("l’œuvre d’art", &config("fr-CA")).unwrap(), "l-oeuvre-d-art");
}

#[test]
fn test_icelandic_ligature() {
    assert_eq!(generate("Ægir", &config("is-is")).unwrap(), "aegir");
    assert_eq!(generate("Ægir", &config("is")).unwrap(), "agir");
}

#[test]
fn test_ukrainian_vowels() {
    assert_eq!(generate("мир и свѣт", &config("ua")).unwrap(), "myr-y-svit");
}

#[test]
fn test_russian_glides_and_digraphs() {
    assert_eq!(generate("Привет мир", &config("ru")).unwrap(), "privet-mir");
    assert_eq!(generate("Ёлка и ёж", &config("ru")).unwrap(), "yelka-i-yezh");
    assert_eq!(generate("ЖУК и Жук", &config("ru")).unwrap(), "zhuk-i-zhuk");
    assert_eq!(generate("Екатерина", &config("ru_RU.UTF8")).unwrap(), "yekaterina");
}

#[test]
fn test_unknown_locale_tags_fall_back() {
    // unparsable tag falls back to the default profile (en)
    assert_eq!(generate("Ärger", &config("not a locale")).unwrap(), "arger");
    assert_eq!(slugify("Ärger"), "arger");
}

#[test]
fn test_byte_input_with_locale_charset() {
    // 0x8E 0x61 0x6C is "Žal" in windows-1250
    let config = config("cs_CZ.windows-1250");
    assert_eq!(generate_bytes(&[0x8E, 0x61, 0x6C], &config).unwrap(), "zal");
}

#[test]
fn test_byte_input_defaults_to_utf8() {
    let config = SlugConfig::default();
    assert_eq!(generate_bytes("Héllo Wörld".as_bytes(), &config).unwrap(), "hello-world");
}

#[test]
fn test_byte_input_failures() {
    match generate_bytes(&[0xC3, 0x28], &SlugConfig::default()) {
        Err(SlugError::DecodeFailure { charset }) => assert_eq!(charset, "utf-8"),
        other => panic!("unexpected result: {other:?}"),
    }
    match translit_bytes(b"abc", Some("no-such-charset"), None) {
        Err(SlugError::DecodeFailure { charset }) => assert_eq!(charset, "no-such-charset"),
        other => panic!("unexpected result: {other:?}"),
    }
}
