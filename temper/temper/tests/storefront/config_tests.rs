use std::fs;
use temper::config::{ConfigError, StorefrontConfig};

#[test]
fn test_default_config() {
    let config = StorefrontConfig::default();
    assert_eq!(config.menu.icon_selector, ".menu_icon");
    assert_eq!(config.modal.modal_id, "empty-cart-modal");
    assert_eq!(
        config.modal.item_rows_selector,
        ".cart-table tbody tr:not(.total)"
    );
    assert_eq!(config.sidebar.show_all_label, "Показать все");
    assert_eq!(config.sidebar.hide_label, "Скрыть");
    assert_eq!(config.price.input_selector, ".price-input");
}

#[test]
fn test_parse_partial_config() {
    let toml_str = r#"
[sidebar]
show_all_label = "Show all"
hide_label = "Hide"

[price]
input_selector = "input[data-price]"
    "#;
    let config: StorefrontConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.sidebar.show_all_label, "Show all");
    assert_eq!(config.sidebar.hide_label, "Hide");
    assert_eq!(config.sidebar.expanded_class, "expanded");
    assert_eq!(config.price.input_selector, "input[data-price]");
    assert_eq!(config.menu, StorefrontConfig::default().menu);
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = StorefrontConfig::from_file(dir.path().join("temper.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_from_file_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("temper.toml");
    fs::write(&path, "[menu\nopen_class = ").unwrap();
    let err = StorefrontConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("temper.toml");
    assert_eq!(
        StorefrontConfig::load_or_default(&path),
        StorefrontConfig::default()
    );

    fs::write(&path, "[menu]\nopen_class = \"is-open\"\n").unwrap();
    assert_eq!(
        StorefrontConfig::load_or_default(&path).menu.open_class,
        "is-open"
    );
}
