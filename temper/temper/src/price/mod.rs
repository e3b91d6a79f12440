//! Price input normalization.
//!
//! Two entry points turn whatever the user typed into a price field into
//! either the plain decimal submitted with the form ([`clean_price_value`]) or
//! the grouped value shown while editing ([`format_price`]).
//!
//! A `.` or `,` followed by exactly three digits (and no fourth digit) is a
//! thousands separator and is dropped. Any other separator is a decimal point.
//! Only the first decimal point survives; the digits after later ones are
//! appended to the fraction.

pub mod cursor;
pub mod filter;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("not a price: {0:?}")]
    Invalid(String),
}

/// Reduces `input` to ASCII digits with at most one `.`.
///
/// Total over every input. The cleaning pass is repeated until it no longer
/// changes the value, so a fraction assembled from merged decimal points is
/// judged by the same three-digit rule as typed input and the result is
/// always stable under another call.
pub fn clean_price_value(input: &str) -> String {
    let mut current = clean_pass(input);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Cleans `input` and groups the integer part in threes with spaces.
///
/// A trailing `.` is kept so the caret can sit after it while typing cents.
pub fn format_price(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let cleaned = clean_price_value(input);
    match cleaned.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_thousands(integer)),
        None => group_thousands(&cleaned),
    }
}

pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

fn clean_pass(input: &str) -> String {
    let kept = input
        .chars()
        .filter(|c| c.is_ascii_digit() || is_separator(*c))
        .collect::<Vec<_>>();

    let mut normalized = String::with_capacity(kept.len());
    for (idx, c) in kept.iter().copied().enumerate() {
        if is_separator(c) && groups_thousands(&kept[idx + 1..]) {
            continue;
        }
        normalized.push(if c == ',' { '.' } else { c });
    }

    match normalized.split_once('.') {
        Some((integer, fraction)) => format!("{integer}.{}", fraction.replace('.', "")),
        None => normalized,
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == ','
}

// `rest` is everything after a separator.
fn groups_thousands(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(char::is_ascii_digit)
        && !rest.get(3).is_some_and(char::is_ascii_digit)
}

/// A price as it moves from the input field to the submitted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceToken {
    raw: String,
    cleaned: String,
    display: String,
}

impl PriceToken {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let cleaned = clean_price_value(&raw);
        let display = format_price(&raw);
        Self {
            raw,
            cleaned,
            display,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    pub fn amount(&self) -> Result<f64, PriceError> {
        if self.cleaned.is_empty() {
            return Err(PriceError::Empty);
        }
        match self.cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(PriceError::Invalid(self.cleaned.clone())),
        }
    }
}

impl From<&str> for PriceToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_empty_is_empty() {
        assert_eq!(clean_price_value(""), "");
        assert_eq!(clean_price_value("руб"), "");
        assert_eq!(clean_price_value("abc"), "");
    }

    #[test]
    fn clean_drops_thousands_separators() {
        assert_eq!(clean_price_value("40.000"), "40000");
        assert_eq!(clean_price_value("35,000"), "35000");
        assert_eq!(clean_price_value("1.234.567"), "1234567");
        assert_eq!(clean_price_value("1,234,567"), "1234567");
    }

    #[test]
    fn clean_keeps_decimal_point() {
        assert_eq!(clean_price_value("40.00"), "40.00");
        assert_eq!(clean_price_value("40.5"), "40.5");
        assert_eq!(clean_price_value("40,5"), "40.5");
        assert_eq!(clean_price_value("1.2345"), "1.2345");
    }

    #[test]
    fn clean_mixed_separators() {
        assert_eq!(clean_price_value("35 000,50"), "35000.50");
        assert_eq!(clean_price_value("1.234,56"), "1234.56");
        assert_eq!(clean_price_value("1,234.56"), "1234.56");
    }

    #[test]
    fn clean_strips_currency_and_spaces() {
        assert_eq!(clean_price_value("₽ 12 500"), "12500");
        assert_eq!(clean_price_value("$1,999.99"), "1999.99");
        assert_eq!(clean_price_value("  7 руб"), "7");
    }

    #[test]
    fn clean_three_digit_fraction_is_thousands() {
        assert_eq!(clean_price_value("19.999"), "19999");
        assert_eq!(clean_price_value("1.200"), "1200");
    }

    #[test]
    fn clean_merges_extra_decimal_points() {
        assert_eq!(clean_price_value("1.2.3"), "1.23");
        assert_eq!(clean_price_value("1,5,7"), "1.57");
        assert_eq!(clean_price_value("10.50.25"), "10.5025");
    }

    #[test]
    fn clean_merged_three_digit_fraction_settles() {
        // "1.23.4" merges to "1.234", which itself reads as a thousands group
        assert_eq!(clean_price_value("1.23.4"), "1234");
        assert_eq!(clean_price_value("1.,345"), "1345");
    }

    #[test]
    fn clean_keeps_lonely_separators() {
        assert_eq!(clean_price_value("."), ".");
        assert_eq!(clean_price_value("5,"), "5.");
        assert_eq!(clean_price_value(",5"), ".5");
    }

    #[test]
    fn clean_ignores_non_ascii_digits() {
        assert_eq!(clean_price_value("١٢٣"), "");
        assert_eq!(clean_price_value("１2"), "2");
    }

    #[test]
    fn format_empty_is_empty() {
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("xyz"), "");
    }

    #[test]
    fn format_groups_integer_part() {
        assert_eq!(format_price("1"), "1");
        assert_eq!(format_price("123"), "123");
        assert_eq!(format_price("1234"), "1 234");
        assert_eq!(format_price("1234567"), "1 234 567");
        assert_eq!(format_price("1234567.5"), "1 234 567.5");
    }

    #[test]
    fn format_keeps_fraction_verbatim() {
        assert_eq!(format_price("12345.6789"), "12 345.6789");
        assert_eq!(format_price("1234."), "1 234.");
        assert_eq!(format_price(".5"), ".5");
    }

    #[test]
    fn format_reformats_grouped_value() {
        assert_eq!(format_price("1 234 5678"), "12 345 678");
        assert_eq!(format_price("40.000"), "40 000");
    }

    #[test]
    fn group_thousands_handles_short_input() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("1000000"), "1 000 000");
    }

    #[test]
    fn token_tracks_every_stage() {
        let token = PriceToken::new("35 000,50 ₽");
        assert_eq!(token.raw(), "35 000,50 ₽");
        assert_eq!(token.cleaned(), "35000.50");
        assert_eq!(token.display(), "35 000.50");
        assert_eq!(token.amount(), Ok(35000.5));
    }

    #[test]
    fn token_amount_errors() {
        assert_eq!(PriceToken::from("").amount(), Err(PriceError::Empty));
        assert_eq!(PriceToken::from("руб").amount(), Err(PriceError::Empty));
        assert_eq!(
            PriceToken::from(".").amount(),
            Err(PriceError::Invalid(".".to_string()))
        );
        assert_eq!(PriceToken::from("5.").amount(), Ok(5.0));
    }
}
