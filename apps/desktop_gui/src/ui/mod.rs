//! UI layer: the page model, presentation helpers, themes and the egui shell.

pub mod app;
pub mod dom;
pub mod presentation;
pub mod theme;

pub use app::{AppPaths, StartupConfig, TextToolsApp};
