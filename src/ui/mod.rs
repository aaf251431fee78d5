//! Terminal UI built with ratatui
//!
//! Not part of the stable library API.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
