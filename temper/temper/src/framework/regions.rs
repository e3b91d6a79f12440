use crate::config::StorefrontConfig;
use crate::framework::dom::menu::menu_toggle;
use crate::framework::dom::modal::{ModalTrigger, empty_cart_modal};
use crate::framework::dom::price_input::price_inputs;
use crate::framework::dom::sidebar::bind_toggle_buttons;
use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

/// Optional parts of a storefront page the startup script can wire up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Region {
    Menu,
    CartModal,
    OrderModal,
    FilterLists,
    PriceInputs,
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Menu => write!(f, "menu"),
            Region::CartModal => write!(f, "cart-modal"),
            Region::OrderModal => write!(f, "order-modal"),
            Region::FilterLists => write!(f, "filter-lists"),
            Region::PriceInputs => write!(f, "price-inputs"),
        }
    }
}

impl Region {
    /// Startup block registering this region's handlers if it is on the page.
    pub fn binding(self, config: &StorefrontConfig) -> String {
        let block = match self {
            Region::Menu => menu_toggle(&config.menu),
            Region::CartModal => empty_cart_modal(&config.modal, ModalTrigger::CheckoutClick),
            Region::OrderModal => empty_cart_modal(&config.modal, ModalTrigger::OrderSubmit),
            Region::FilterLists => bind_toggle_buttons(),
            Region::PriceInputs => price_inputs(&config.price),
        };
        format!("// {self}\n{block}")
    }
}
