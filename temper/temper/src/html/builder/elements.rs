use crate::Element;

// Helper functions for common elements
pub fn element(tag: &str) -> Element {
    Element::new(tag)
}

pub fn a() -> Element {
    Element::new("a")
}

pub fn button() -> Element {
    Element::new("button").attr("type", "button")
}

pub fn submit() -> Element {
    Element::new("button").attr("type", "submit")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn header() -> Element {
    Element::new("header")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn aside() -> Element {
    Element::new("aside")
}

pub fn h2() -> Element {
    Element::new("h2")
}

pub fn h3() -> Element {
    Element::new("h3")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn form() -> Element {
    Element::new("form")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn table() -> Element {
    Element::new("table")
}

pub fn tbody() -> Element {
    Element::new("tbody")
}

pub fn tr() -> Element {
    Element::new("tr")
}

pub fn td() -> Element {
    Element::new("td")
}

pub fn style(content: String) -> Element {
    Element::new("style").text(&content).raw()
}

pub fn script(content: String) -> Element {
    Element::new("script").text(&content).raw()
}
