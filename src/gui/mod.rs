pub mod bookmark;
pub mod state;
pub mod toasts;
pub mod window;
