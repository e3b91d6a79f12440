use crate::styling::css::CssRule;

pub fn menu() -> Vec<CssRule> {
    vec![menu_icon(), menu_panel()]
}

fn menu_icon() -> CssRule {
    CssRule::new(".menu_icon")
        .property("display", "flex")
        .property("flex-direction", "column")
        .property("gap", "0.3rem")
        .property("padding", "0.5rem")
        .property("background", "none")
        .property("border", "none")
        .property("cursor", "pointer")
        .child(
            CssRule::new(".menu_icon-bar")
                .property("width", "1.6rem")
                .property("height", "0.15rem")
                .property("background-color", "currentColor")
                .property("transition", "transform 0.25s ease, opacity 0.25s ease"),
        )
        .child(
            CssRule::new("&.open")
                .child(
                    CssRule::new(".menu_icon-bar:nth-child(1)")
                        .property("transform", "translateY(0.45rem) rotate(45deg)"),
                )
                .child(CssRule::new(".menu_icon-bar:nth-child(2)").property("opacity", "0"))
                .child(
                    CssRule::new(".menu_icon-bar:nth-child(3)")
                        .property("transform", "translateY(-0.45rem) rotate(-45deg)"),
                ),
        )
}

fn menu_panel() -> CssRule {
    CssRule::new(".menu")
        .property("position", "fixed")
        .property("inset", "4rem 0 0 0")
        .property("z-index", "900")
        .property("background-color", "rgba(0, 0, 0, 0.4)")
        .property("opacity", "0")
        .property("pointer-events", "none")
        .property("transition", "opacity 0.25s ease")
        .child(
            CssRule::new("&.open")
                .property("opacity", "1")
                .property("pointer-events", "auto"),
        )
        .child(
            CssRule::new(".menu-content")
                .property("width", "min(20rem, 100%)")
                .property("height", "100%")
                .property("padding", "1.5rem")
                .property("background-color", "#fff")
                .child(
                    CssRule::new("ul")
                        .property("list-style", "none")
                        .property("margin", "0")
                        .property("padding", "0"),
                )
                .child(
                    CssRule::new("a")
                        .property("display", "block")
                        .property("padding", "0.6rem 0")
                        .property("color", "inherit")
                        .property("text-decoration", "none"),
                ),
        )
}
