pub mod app;
pub mod config;
pub mod host;
pub mod input;
pub mod keybinds;
pub mod toast;
pub mod ui;

pub use config::Config;
