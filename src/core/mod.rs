pub mod bookmark;
pub mod clipboard;
pub mod settings;
