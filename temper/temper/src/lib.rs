pub mod config;
pub mod framework;
pub mod html;
pub mod prelude;
pub mod price;
pub mod styling;

pub use framework::*;
pub use html::*;
