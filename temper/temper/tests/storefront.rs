#[path = "storefront/assets_tests.rs"]
mod assets_tests;
#[path = "storefront/config_tests.rs"]
mod config_tests;
#[path = "storefront/page_tests.rs"]
mod page_tests;
