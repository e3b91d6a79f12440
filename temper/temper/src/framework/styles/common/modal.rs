use crate::styling::css::CssRule;

pub fn modal() -> Vec<CssRule> {
    vec![empty_cart_modal()]
}

fn empty_cart_modal() -> CssRule {
    CssRule::new("#empty-cart-modal")
        .property("position", "fixed")
        .property("inset", "0")
        .property("z-index", "1000")
        .property("display", "none")
        .property("align-items", "center")
        .property("justify-content", "center")
        .child(CssRule::new("&.show").property("display", "flex"))
        .child(
            CssRule::new(".modal-overlay")
                .property("position", "absolute")
                .property("inset", "0")
                .property("background-color", "rgba(0, 0, 0, 0.5)"),
        )
        .child(
            CssRule::new(".modal-content")
                .property("position", "relative")
                .property("width", "min(28rem, calc(100% - 2rem))")
                .property("padding", "2rem")
                .property("border-radius", "0.5rem")
                .property("background-color", "#fff")
                .property("text-align", "center")
                .child(
                    CssRule::new("#close-modal")
                        .property("margin-top", "1rem")
                        .property("padding", "0.6rem 1.6rem")
                        .property("cursor", "pointer"),
                ),
        )
}
