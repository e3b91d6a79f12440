pub mod events;
pub mod menu;
pub mod modal;
pub mod price_input;
pub mod region;
pub mod sidebar;

pub use events::*;
pub use region::*;

/// Quotes `value` as a JavaScript string literal.
pub fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

pub(crate) fn indent(code: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    code.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
