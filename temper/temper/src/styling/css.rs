use std::fmt::{Display, Formatter};

#[derive(Clone, Debug)]
pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn render(&self) -> String {
        let mut css = String::new();
        self.render_into(&mut css, 0);
        css
    }

    fn render_into(&self, css: &mut String, indent: usize) {
        let indent_str = "    ".repeat(indent);
        let inner_indent = "    ".repeat(indent + 1);

        css.push_str(&format!("{indent_str}{} {{\n", self.selector));
        for (name, value) in &self.properties {
            css.push_str(&format!("{inner_indent}{name}: {value};\n"));
        }
        for child in &self.children {
            child.render_into(css, indent + 1);
        }
        css.push_str(&format!("{indent_str}}}\n"));
    }
}

impl Display for CssRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

pub fn render_rules(rules: &[CssRule]) -> String {
    rules
        .iter()
        .map(CssRule::render)
        .collect::<Vec<_>>()
        .join("\n")
}
