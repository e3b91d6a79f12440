use crate::framework::dom::{indent, js_string};

/// An element looked up once at startup and kept in a `const`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    var: String,
    lookup: String,
}

impl Query {
    pub fn selector(var: &str, selector: &str) -> Self {
        Self {
            var: var.to_string(),
            lookup: format!("document.querySelector({})", js_string(selector)),
        }
    }

    pub fn id(var: &str, id: &str) -> Self {
        Self {
            var: var.to_string(),
            lookup: format!("document.getElementById({})", js_string(id)),
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn declaration(&self) -> String {
        format!("const {} = {};", self.var, self.lookup)
    }
}

pub fn on_dom_ready(blocks: &[String]) -> String {
    let body = blocks
        .iter()
        .map(|block| indent(block, 4))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("document.addEventListener(\"DOMContentLoaded\", () => {{\n{body}\n}});")
}

/// Runs `body` only when every queried element exists on the page.
///
/// The block is wrapped in braces so each region keeps its `const`s to itself.
pub fn when_present(queries: &[Query], body: &str) -> String {
    if queries.is_empty() {
        return format!("{{\n{}\n}}", indent(body, 4));
    }

    let declarations = queries
        .iter()
        .map(Query::declaration)
        .collect::<Vec<_>>()
        .join("\n");
    let condition = queries
        .iter()
        .map(Query::var)
        .collect::<Vec<_>>()
        .join(" && ");

    format!(
        "{{\n{}\n    if ({condition}) {{\n{}\n    }}\n}}",
        indent(&declarations, 4),
        indent(body, 8)
    )
}
