use crate::config::StorefrontConfig;
use crate::framework::Region;
use crate::js::storefront_js;
use crate::styles::stylesheet;
use crate::{Element, Link, PageBuilder, Script, div};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

pub const SCRIPT_PATH: &str = "assets/js/storefront.js";
pub const STYLESHEET_PATH: &str = "assets/css/style.css";

#[derive(Clone, Debug)]
pub struct StorefrontBuilder {
    title: String,
    config: StorefrontConfig,
    regions: Vec<Region>,
    links: Vec<Link>,
    header: Option<Element>,
    footer: Option<Element>,
}

impl Default for StorefrontBuilder {
    fn default() -> Self {
        Self {
            title: "Магазин".to_string(),
            config: StorefrontConfig::default(),
            regions: Region::iter().collect(),
            links: Vec::new(),
            header: None,
            footer: None,
        }
    }
}

impl StorefrontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn config(mut self, value: StorefrontConfig) -> Self {
        self.config = value;
        self
    }

    pub fn regions(mut self, value: Vec<Region>) -> Self {
        self.regions = value;
        self
    }

    pub fn links(mut self, value: Vec<Link>) -> Self {
        self.links = value;
        self
    }

    pub fn header(mut self, value: Element) -> Self {
        self.header = Some(value);
        self
    }

    pub fn footer(mut self, value: Element) -> Self {
        self.footer = Some(value);
        self
    }

    pub fn build(self) -> Storefront {
        let mut links = vec![Link::stylesheet(&format!("/{STYLESHEET_PATH}"))];
        links.extend(self.links);

        Storefront {
            title: self.title,
            script: storefront_js(&self.config, &self.regions),
            links,
            header: self.header,
            footer: self.footer,
        }
    }
}

/// Renders pages sharing one stylesheet and one startup script.
#[derive(Clone, Debug)]
pub struct Storefront {
    title: String,
    script: String,
    links: Vec<Link>,
    header: Option<Element>,
    footer: Option<Element>,
}

impl Storefront {
    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn stylesheet(&self) -> String {
        stylesheet()
    }

    pub fn page(&self, content: Element) -> Result<String> {
        let app = div()
            .class("app")
            .child_opt(self.header.clone())
            .child(div().class("content").child(content))
            .child_opt(self.footer.clone());

        PageBuilder::new()
            .title(self.title.clone())
            .links(self.links.clone())
            .scripts(vec![Script::new(&format!("/{SCRIPT_PATH}"))])
            .content(app)
            .build()
    }

    pub fn write_assets(&self, dist: impl AsRef<Path>) -> Result<()> {
        let dist = dist.as_ref();
        write_asset(&dist.join(SCRIPT_PATH), &self.script)?;
        write_asset(&dist.join(STYLESHEET_PATH), &self.stylesheet())?;
        Ok(())
    }
}

fn write_asset(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
