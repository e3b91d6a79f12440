use crate::price::filter::{PRICE_FROM, PRICE_TO, PriceRange};
use crate::{Element, div, input, label};

#[derive(Clone, Debug)]
pub struct PriceFilterBuilder {
    title: String,
    from_placeholder: String,
    to_placeholder: String,
    range: PriceRange,
}

impl Default for PriceFilterBuilder {
    fn default() -> Self {
        Self {
            title: "Цена".to_string(),
            from_placeholder: "от".to_string(),
            to_placeholder: "до".to_string(),
            range: PriceRange::default(),
        }
    }
}

impl PriceFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn placeholders(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_placeholder = from.into();
        self.to_placeholder = to.into();
        self
    }

    /// Pre-fills the inputs with the submitted bounds, grouped for display.
    pub fn range(mut self, value: PriceRange) -> Self {
        self.range = value;
        self
    }

    pub fn build(self) -> Element {
        let field = |name: &str, placeholder: &str, value: String| {
            let element = input()
                .class("price-input")
                .attr("type", "text")
                .attr("inputmode", "decimal")
                .attr("autocomplete", "off")
                .attr("name", name)
                .attr("placeholder", placeholder);
            if value.is_empty() {
                element
            } else {
                element.attr("value", &value)
            }
        };

        div()
            .class("price-filter")
            .child(label().text(&self.title))
            .child(
                div()
                    .class("price-range")
                    .child(field(
                        PRICE_FROM,
                        &self.from_placeholder,
                        self.range.display_from(),
                    ))
                    .child(field(PRICE_TO, &self.to_placeholder, self.range.display_to())),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_use_text_type_for_caret_control() {
        let html = PriceFilterBuilder::new().build().render();
        assert_eq!(html.matches("class=\"price-input\"").count(), 2);
        assert!(html.contains("name=\"price_from\""));
        assert!(html.contains("name=\"price_to\""));
        assert!(html.contains("type=\"text\""));
        assert!(!html.contains("value="));
    }

    #[test]
    fn submitted_bounds_are_shown_grouped() {
        let range = PriceRange::from_query([("price_from", "15000"), ("price_to", "1.250.000")]);
        let html = PriceFilterBuilder::new().range(range).build().render();
        assert!(html.contains("value=\"15 000\""));
        assert!(html.contains("value=\"1 250 000\""));
    }
}
