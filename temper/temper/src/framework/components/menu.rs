use crate::{Element, a, button, div, header, li, nav, span, ul};

#[derive(Clone, Debug, Default)]
pub struct MenuBuilder {
    label: String,
    links: Vec<(String, String)>,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self {
            label: "Меню".to_string(),
            ..Self::default()
        }
    }

    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.label = value.into();
        self
    }

    pub fn link(mut self, href: impl Into<String>, text: impl Into<String>) -> Self {
        self.links.push((href.into(), text.into()));
        self
    }

    pub fn build(self) -> Element {
        let icon = button()
            .class("menu_icon")
            .attr("aria-expanded", "false")
            .attr("aria-label", &self.label)
            .children((0..3).map(|_| span().class("menu_icon-bar")));

        let links = self
            .links
            .iter()
            .map(|(href, text)| li().child(a().attr("href", href).text(text)));

        header().class("site-header").child(icon).child(
            nav()
                .class("menu")
                .child(div().class("menu-content").child(ul().children(links))),
        )
    }
}
