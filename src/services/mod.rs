pub mod console;
pub mod order_service;

pub use console::*;
pub use order_service::*;
