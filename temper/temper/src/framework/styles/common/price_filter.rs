use crate::styling::css::CssRule;

pub fn price_filter() -> Vec<CssRule> {
    vec![
        CssRule::new(".price-filter")
            .property("display", "flex")
            .property("flex-direction", "column")
            .property("gap", "0.5rem")
            .child(
                CssRule::new(".price-range")
                    .property("display", "flex")
                    .property("gap", "0.5rem"),
            ),
        CssRule::new(".price-input")
            .property("width", "100%")
            .property("min-width", "0")
            .property("padding", "0.4rem 0.6rem")
            .property("font-variant-numeric", "tabular-nums"),
    ]
}
