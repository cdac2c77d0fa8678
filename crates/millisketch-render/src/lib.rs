//! MilliSketch Render Library
//!
//! Turns a canvas into a flat list of device-space draw commands and replays
//! it onto a [`Renderer`]. Printing tiles the same list across pages through
//! a [`PageWriter`].

mod axes;
mod color;
mod print;
mod renderer;

pub use axes::{AXIS_COLOR, axis_commands};
pub use color::Rgba8;
pub use print::{PageWriter, PrintError, PrintSummary, print_canvas};
pub use renderer::{
    BACKGROUND, CIRCLE_FILL, DrawCommand, RECTANGLE_FILL, RecordingRenderer, RenderContext, Renderer, SELECTION,
    SHAPE_STROKE, build_commands,
};
