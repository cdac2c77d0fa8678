//! MilliSketch Application
//!
//! Command-line shell over the scene: load, edit, render and paginate, with
//! the scene saved after every change.

mod app;
mod cli;
mod config;
mod output;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{AppConfig, DEFAULT_DPI};
pub use output::{PageListing, TextRenderer};
