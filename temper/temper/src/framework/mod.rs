pub mod app;
pub mod regions;

pub mod components;
pub mod dom;
pub mod js;
pub mod styles;

pub use app::*;
pub use components::*;
pub use regions::*;
