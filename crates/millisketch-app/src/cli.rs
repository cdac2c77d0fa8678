//! Command-line interface.

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MilliSketch - millimetre-scale sketches of rectangles and circles
#[derive(Debug, Parser)]
#[command(name = "millisketch")]
#[command(about = "Edit, render and paginate a millimetre-scale vector scene")]
pub struct Cli {
    /// Scene file (default: platform data directory)
    #[arg(short, long, global = true)]
    pub scene: Option<PathBuf>,

    /// Viewport width in device units
    #[arg(long, global = true)]
    pub width: Option<i32>,

    /// Viewport height in device units
    #[arg(long, global = true)]
    pub height: Option<i32>,

    /// Printer resolution in dots per inch
    #[arg(long, global = true)]
    pub dpi: Option<f64>,

    /// Print on portrait pages instead of landscape
    #[arg(long, global = true)]
    pub portrait: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List the shapes in the scene
    Show,

    /// Add a rectangle from its bottom-left and top-right corners
    AddRect {
        #[arg(allow_negative_numbers = true)]
        bl_x: i32,
        #[arg(allow_negative_numbers = true)]
        bl_y: i32,
        #[arg(allow_negative_numbers = true)]
        tr_x: i32,
        #[arg(allow_negative_numbers = true)]
        tr_y: i32,
    },

    /// Add a circle from its center and radius
    AddCircle {
        #[arg(allow_negative_numbers = true)]
        cx: i32,
        #[arg(allow_negative_numbers = true)]
        cy: i32,
        #[arg(allow_negative_numbers = true)]
        r: i32,
    },

    /// Delete the topmost shape under a device point, as a click would
    DeleteAt {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Treat the point as world coordinates instead of device coordinates
        #[arg(long)]
        world: bool,
    },

    /// Print the draw commands for the current viewport
    Render,

    /// Show how the scene would be split across printed pages
    Pages,
}

impl Cli {
    /// Apply the command-line overrides to a configuration.
    pub fn config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.scene {
            config = config.with_scene_path(path);
        }
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(config.viewport.width);
            let height = self.height.unwrap_or(config.viewport.height);
            config = config.with_viewport(width, height);
        }
        if let Some(dpi) = self.dpi {
            config = config.with_dpi(dpi);
        }
        if self.portrait {
            config = config.portrait();
        }
        config
    }
}
