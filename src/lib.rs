pub mod core;
pub mod gui;

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
