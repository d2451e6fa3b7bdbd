//! UI layer for the game window: app shell and button palette.

pub mod app;
pub mod theme;

pub use app::SimonApp;
