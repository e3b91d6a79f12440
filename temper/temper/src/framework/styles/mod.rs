pub mod common;

use crate::styling::css::render_rules;
use common::{cart, menu, modal, price_filter, sidebar};

pub fn stylesheet() -> String {
    let rules = [menu(), cart(), modal(), sidebar(), price_filter()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    render_rules(&rules)
}
