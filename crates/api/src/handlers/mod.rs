pub mod analyze;
pub mod autocomplete;
pub mod common;
pub mod health;

pub use analyze::analyze;
pub use autocomplete::autocomplete;
pub use health::{health, ready};
