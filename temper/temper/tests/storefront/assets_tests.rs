use std::fs;
use temper::config::StorefrontConfig;
use temper::{Region, StorefrontBuilder};

#[test]
fn write_assets_creates_script_and_stylesheet() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = StorefrontBuilder::new().build();
    storefront.write_assets(dir.path()).unwrap();

    let script = fs::read_to_string(dir.path().join("assets/js/storefront.js")).unwrap();
    let css = fs::read_to_string(dir.path().join("assets/css/style.css")).unwrap();
    assert_eq!(script, storefront.script());
    assert!(css.contains("#empty-cart-modal"));
}

#[test]
fn script_registers_regions_in_one_listener() {
    let storefront = StorefrontBuilder::new().build();
    let script = storefront.script();
    assert_eq!(script.matches("DOMContentLoaded").count(), 1);
    assert_eq!(script.matches("function toggleList(").count(), 1);
    assert!(script.contains("function cleanPriceValue(raw)"));
    assert!(script.contains("// menu\n"));
    assert!(script.contains("// cart-modal\n"));
    assert!(script.contains("// order-modal\n"));
    assert!(script.contains("// price-inputs\n"));
    assert_eq!(script.matches("document.getElementById(\"close-modal\")").count(), 1);
}

#[test]
fn script_follows_configured_labels() {
    let mut config = StorefrontConfig::default();
    config.sidebar.show_all_label = "Show all".to_string();
    config.sidebar.hide_label = "Hide".to_string();
    let storefront = StorefrontBuilder::new()
        .config(config)
        .regions(vec![Region::FilterLists])
        .build();

    let script = storefront.script();
    assert!(script.contains("btn.textContent.replace(\"Show all\", \"Hide\")"));
    assert!(!script.contains("// menu\n"));
}

#[test]
fn write_assets_reports_unwritable_target() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("dist");
    fs::write(&blocker, "not a directory").unwrap();

    let err = StorefrontBuilder::new()
        .build()
        .write_assets(&blocker)
        .unwrap_err();
    assert!(err.to_string().contains("failed to create"));
}
