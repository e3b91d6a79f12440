use crate::price::{clean_price_value, format_price};

/// Field value and caret offset after a keystroke was reformatted.
///
/// Offsets count `char`s. The browser counts UTF-16 units, which agree for
/// every formatted value since formatting only ever yields ASCII.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub value: String,
    pub cursor: usize,
}

pub fn format_edit(value: &str, cursor: usize) -> Edit {
    let formatted = format_price(value);
    let before = value.chars().count();
    let after = formatted.chars().count();

    let cursor = if after >= before {
        cursor + (after - before)
    } else {
        cursor.saturating_sub(before - after)
    };

    Edit {
        cursor: cursor.min(after),
        value: formatted,
    }
}

pub fn submit_value(value: &str) -> String {
    clean_price_value(value)
}
