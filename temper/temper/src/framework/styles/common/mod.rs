mod cart;
mod menu;
mod modal;
mod price_filter;
mod sidebar;

pub use cart::cart;
pub use menu::menu;
pub use modal::modal;
pub use price_filter::price_filter;
pub use sidebar::sidebar;
