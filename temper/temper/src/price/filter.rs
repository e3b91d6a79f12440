use crate::price::{PriceError, PriceToken, format_price};

pub const PRICE_FROM: &str = "price_from";
pub const PRICE_TO: &str = "price_to";

pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    PriceToken::new(raw).amount()
}

/// Inclusive catalog price bounds read from the filter form's query string.
///
/// A bound that is missing or does not parse leaves that side open; the
/// submitted text is kept so the form can be re-rendered as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    from_raw: String,
    to_raw: String,
}

impl PriceRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut range = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                PRICE_FROM => range.from_raw = value.as_ref().to_string(),
                PRICE_TO => range.to_raw = value.as_ref().to_string(),
                _ => {}
            }
        }
        range.from = bound(PRICE_FROM, &range.from_raw);
        range.to = bound(PRICE_TO, &range.to_raw);
        range
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.from.is_none_or(|from| price >= from) && self.to.is_none_or(|to| price <= to)
    }

    pub fn display_from(&self) -> String {
        format_price(&self.from_raw)
    }

    pub fn display_to(&self) -> String {
        format_price(&self.to_raw)
    }
}

fn bound(param: &str, raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    match parse_price(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("ignoring {param}={raw:?}: {err}");
            None
        }
    }
}
