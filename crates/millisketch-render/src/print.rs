//! Multi-page printing: tile the rendered canvas across fixed-size pages.

use crate::color::Rgba8;
use crate::renderer::{build_commands, RenderContext, Renderer};
use millisketch_core::canvas::Canvas;
use millisketch_core::tiler::{PageGrid, PageSetup, TilingError};
use thiserror::Error;

/// Errors that can occur while printing.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Page layout failed: {0}")]
    Tiling(#[from] TilingError),
    #[error("Page writer failed: {0}")]
    Writer(String),
}

/// A paginated output device such as a printer or PDF writer.
///
/// Commands arrive through [`Renderer::draw`] with the page transform already
/// set up. `new_page` is called between pages, never after the last one.
pub trait PageWriter: Renderer {
    /// Finish the current page and start a fresh one.
    fn new_page(&mut self) -> Result<(), PrintError>;
}

/// Outcome of a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSummary {
    pub columns: usize,
    pub rows: usize,
    pub pages: usize,
}

/// Print a canvas across as many pages as it needs.
///
/// The canvas is laid out at its print extent on a white background without
/// a selection highlight. The page grid is computed before anything reaches
/// the writer, so a layout error leaves the writer untouched.
pub fn print_canvas(
    canvas: &Canvas,
    setup: &PageSetup,
    writer: &mut dyn PageWriter,
) -> Result<PrintSummary, PrintError> {
    let extent = canvas.print_extent();
    let grid = PageGrid::compute(extent.to_kurbo(), setup.page_rect(), setup.scale())?;

    let ctx = RenderContext::new(canvas)
        .with_viewport(extent)
        .with_background(Some(Rgba8::WHITE))
        .with_selection_color(None);
    let commands = build_commands(&ctx);

    log::info!(
        "Printing {}x{} canvas on {} pages ({} columns x {} rows)",
        extent.width,
        extent.height,
        grid.page_count(),
        grid.columns(),
        grid.rows()
    );

    for (i, tile) in grid.tiles().enumerate() {
        if i > 0 {
            writer.new_page()?;
        }
        log::debug!(
            "Page {} at row {} column {} shows canvas {:?}",
            i + 1,
            tile.row,
            tile.column,
            tile.content_window(grid.page_rect().size())
        );
        writer.render(&commands, tile.transform());
    }

    Ok(PrintSummary {
        columns: grid.columns(),
        rows: grid.rows(),
        pages: grid.page_count(),
    })
}
