pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
