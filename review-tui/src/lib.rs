//! Terminal front end for browsing reviewed chess games.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod input;
pub mod loader;
pub mod ui;
pub mod view;

pub use app::{Action, App, Effect, Focus, Status, StatusKind};
pub use config::{Args, Settings};
pub use loader::{LoadEvent, Loader};
