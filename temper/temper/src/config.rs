use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "temper.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Selectors, classes and labels the generated page script binds to.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub menu: MenuConfig,
    pub modal: ModalConfig,
    pub sidebar: SidebarConfig,
    pub price: PriceConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    pub icon_selector: String,
    pub menu_selector: String,
    pub content_selector: String,
    pub open_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            icon_selector: ".menu_icon".to_string(),
            menu_selector: ".menu".to_string(),
            content_selector: ".menu-content".to_string(),
            open_class: "open".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModalConfig {
    pub modal_id: String,
    pub close_id: String,
    pub overlay_selector: String,
    pub show_class: String,
    pub item_rows_selector: String,
    pub checkout_selector: String,
    pub order_form_selector: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "empty-cart-modal".to_string(),
            close_id: "close-modal".to_string(),
            overlay_selector: ".modal-overlay".to_string(),
            show_class: "show".to_string(),
            item_rows_selector: ".cart-table tbody tr:not(.total)".to_string(),
            checkout_selector: ".checkout".to_string(),
            order_form_selector: ".order-form".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarConfig {
    pub hidden_item_class: String,
    pub expanded_class: String,
    pub item_display: String,
    pub show_all_label: String,
    pub hide_label: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            hidden_item_class: "hidden-item".to_string(),
            expanded_class: "expanded".to_string(),
            item_display: "list-item".to_string(),
            show_all_label: "Показать все".to_string(),
            hide_label: "Скрыть".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PriceConfig {
    pub input_selector: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            input_selector: ".price-input".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config: StorefrontConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!("{path} not found, using default storefront config");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("{err}, using default storefront config");
                Self::default()
            }
        }
    }
}
