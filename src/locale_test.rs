use super::*;

#[test]
fn parses_codes_and_names() {
    assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    assert_eq!("KN".parse::<Language>().unwrap(), Language::Kn);
    assert_eq!(" kannada ".parse::<Language>().unwrap(), Language::Kn);
}

#[test]
fn rejects_unknown_language() {
    let err = "fr".parse::<Language>().unwrap_err();
    assert!(err.to_string().contains("fr"));
}

#[test]
fn localized_picks_requested_language() {
    let text = Localized { en: "price", kn: "ಬೆಲೆ" };
    assert_eq!(text.get(Language::En), "price");
    assert_eq!(text.get(Language::Kn), "ಬೆಲೆ");
}

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::default().to_string(), "en");
}
