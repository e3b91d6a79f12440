pub mod cart;
pub mod menu;
pub mod modal;
pub mod price_filter;
pub mod sidebar;

pub use cart::*;
pub use menu::*;
pub use modal::*;
pub use price_filter::*;
pub use sidebar::*;
