use crate::styling::css::CssRule;

pub fn cart() -> Vec<CssRule> {
    vec![
        CssRule::new(".cart-table")
            .property("width", "100%")
            .property("border-collapse", "collapse")
            .child(
                CssRule::new("td")
                    .property("padding", "0.6rem")
                    .property("border-bottom", "1px solid #e5e5e5"),
            )
            .child(
                CssRule::new("td.price")
                    .property("text-align", "right")
                    .property("white-space", "nowrap"),
            )
            .child(CssRule::new("tr.total").property("font-weight", "bold")),
        CssRule::new(".checkout")
            .property("display", "inline-block")
            .property("margin-top", "1rem")
            .property("padding", "0.8rem 2rem")
            .property("border-radius", "0.25rem")
            .property("background-color", "#2a6dd9")
            .property("color", "#fff")
            .property("text-decoration", "none"),
    ]
}
