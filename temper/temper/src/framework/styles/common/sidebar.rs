use crate::styling::css::CssRule;

pub fn sidebar() -> Vec<CssRule> {
    vec![
        CssRule::new(".filter-group")
            .property("margin-bottom", "1.5rem")
            .child(
                CssRule::new(".filter-list")
                    .property("list-style", "none")
                    .property("margin", "0")
                    .property("padding", "0"),
            )
            .child(
                CssRule::new(".toggle-list-btn")
                    .property("margin-top", "0.5rem")
                    .property("padding", "0")
                    .property("border", "none")
                    .property("background", "none")
                    .property("color", "#2a6dd9")
                    .property("cursor", "pointer"),
            ),
        CssRule::new(".hidden-item").property("display", "none"),
    ]
}
