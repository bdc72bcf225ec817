//! # Locale Resolution Unit Tests / 语言解析单元测试

use harness_runner::resolve_locale;

#[test]
fn test_available_locale_is_kept() {
    assert_eq!(resolve_locale(Some("zh-CN")), "zh-CN");
    assert_eq!(resolve_locale(Some("en")), "en");
}

#[test]
fn test_underscore_tags_are_accepted() {
    assert_eq!(resolve_locale(Some("zh_CN")), "zh-CN");
}

#[test]
fn test_region_falls_back_to_language() {
    assert_eq!(resolve_locale(Some("en-US")), "en");
    assert_eq!(resolve_locale(Some("en_GB")), "en");
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(resolve_locale(Some("fr-FR")), "en");
    assert_eq!(resolve_locale(Some("")), "en");
}

#[test]
fn test_bare_language_maps_to_its_regional_locale() {
    assert_eq!(resolve_locale(Some("zh")), "zh-CN");
}
