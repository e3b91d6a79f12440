use crate::framework::dom::sidebar::TOGGLE_LIST_ATTR;
use crate::{Element, button, div, h3, input, label, li, span, ul};

/// A checkbox list in the catalog sidebar. Options past the visible count are
/// rendered as hidden items behind a "show all" button.
#[derive(Clone, Debug)]
pub struct FilterListBuilder {
    id: String,
    title: String,
    param: String,
    options: Vec<(String, String)>,
    selected: Vec<String>,
    visible: usize,
    show_all_label: String,
}

impl FilterListBuilder {
    pub fn new(id: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            param: param.into(),
            options: Vec::new(),
            selected: Vec::new(),
            visible: 5,
            show_all_label: "Показать все".to_string(),
        }
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn option(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.push((value.into(), text.into()));
        self
    }

    pub fn selected(mut self, value: Vec<String>) -> Self {
        self.selected = value;
        self
    }

    pub fn visible(mut self, value: usize) -> Self {
        self.visible = value;
        self
    }

    pub fn show_all_label(mut self, value: impl Into<String>) -> Self {
        self.show_all_label = value.into();
        self
    }

    pub fn build(self) -> Element {
        let items = self.options.iter().enumerate().map(|(idx, (value, text))| {
            let mut checkbox = input()
                .attr("type", "checkbox")
                .attr("name", &self.param)
                .attr("value", value);
            if self.selected.contains(value) {
                checkbox = checkbox.attr("checked", "checked");
            }

            let item = li().child(label().child(checkbox).child(span().text(text)));
            if idx >= self.visible {
                item.class("hidden-item")
            } else {
                item
            }
        });

        let toggle = (self.options.len() > self.visible).then(|| {
            button()
                .class("toggle-list-btn")
                .data(TOGGLE_LIST_ATTR, &self.id)
                .text(&self.show_all_label)
        });

        div()
            .class("filter-group")
            .child_opt((!self.title.is_empty()).then(|| h3().text(&self.title)))
            .child(ul().id(&self.id).class("filter-list").children(items))
            .child_opt(toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands(count: usize) -> FilterListBuilder {
        (0..count).fold(
            FilterListBuilder::new("brand-list", "brand").title("Бренды"),
            |builder, idx| builder.option(format!("brand-{idx}"), format!("Бренд {idx}")),
        )
    }

    #[test]
    fn options_past_visible_count_are_hidden() {
        let html = brands(7).visible(5).build().render();
        assert_eq!(html.matches("<li class=\"hidden-item\">").count(), 2);
        assert_eq!(html.matches("<li>").count(), 5);
    }

    #[test]
    fn toggle_button_names_its_list() {
        let html = brands(7).build().render();
        assert!(html.contains(
            "<button class=\"toggle-list-btn\" data-toggle-list=\"brand-list\" type=\"button\">Показать все</button>"
        ));
        assert!(html.contains("<ul class=\"filter-list\" id=\"brand-list\">"));
    }

    #[test]
    fn short_list_has_no_toggle() {
        let html = brands(3).build().render();
        assert!(!html.contains("toggle-list-btn"));
        assert!(!html.contains("hidden-item"));
    }

    #[test]
    fn selected_options_are_checked() {
        let html = brands(2)
            .selected(vec!["brand-1".to_string()])
            .build()
            .render();
        assert_eq!(html.matches("checked=\"checked\"").count(), 1);
        assert!(html.contains(
            "<input checked=\"checked\" name=\"brand\" type=\"checkbox\" value=\"brand-1\">"
        ));
    }
}
