pub use crate::config::StorefrontConfig;
pub use crate::framework::{
    CartItem, CartTableBuilder, EmptyCartModalBuilder, FilterListBuilder, MenuBuilder,
    OrderFormBuilder, PriceFilterBuilder, Region, Storefront, StorefrontBuilder, checkout_button,
};
pub use crate::html::{
    Element, Link, a, aside, button, div, element, form, h2, h3, header, input, label, li, nav, p,
    span, submit, table, tbody, td, tr, ul,
};
pub use crate::price::filter::PriceRange;
pub use crate::price::{PriceToken, clean_price_value, format_price};
