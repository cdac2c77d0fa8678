//! Page tiling for printing at a fixed physical scale.
//!
//! The rendered canvas is measured in device units where one unit is one
//! world unit, i.e. one millimetre. Printing scales it by the printer's
//! device units per millimetre and cuts the result into page-sized windows.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use thiserror::Error;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Upper bound on the number of pages a single job may produce.
pub const MAX_PAGES: usize = 10_000;

/// Ratios closer than this to a whole page count do not spill onto another page.
const PAGE_EPSILON: f64 = 1e-9;

/// Tiling errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TilingError {
    #[error("Degenerate page geometry: page {page_width}x{page_height}, scale {scale}")]
    DegenerateGeometry {
        page_width: f64,
        page_height: f64,
        scale: f64,
    },
    #[error("Invalid print region: {width}x{height}")]
    InvalidRegion { width: f64, height: f64 },
    #[error("Print job needs {columns}x{rows} pages, more than the limit of {max}", max = MAX_PAGES)]
    TooManyPages { columns: f64, rows: f64 },
}

/// Device units per millimetre for a printer resolution.
pub fn scale_for_dpi(dpi: f64) -> f64 {
    dpi / MM_PER_INCH
}

/// Physical page description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Page width in millimetres.
    pub width_mm: f64,
    /// Page height in millimetres.
    pub height_mm: f64,
    /// Printer resolution in dots per inch.
    pub dpi: f64,
    /// Top-left of the printable area in printer device units.
    pub origin: Point,
}

impl PageSetup {
    pub const A4_LONG_EDGE_MM: f64 = 297.0;
    pub const A4_SHORT_EDGE_MM: f64 = 210.0;

    /// Borderless A4 in landscape orientation.
    pub fn a4_landscape(dpi: f64) -> Self {
        Self {
            width_mm: Self::A4_LONG_EDGE_MM,
            height_mm: Self::A4_SHORT_EDGE_MM,
            dpi,
            origin: Point::ZERO,
        }
    }

    /// Borderless A4 in portrait orientation.
    pub fn a4_portrait(dpi: f64) -> Self {
        Self {
            width_mm: Self::A4_SHORT_EDGE_MM,
            height_mm: Self::A4_LONG_EDGE_MM,
            dpi,
            origin: Point::ZERO,
        }
    }

    /// Device units per world unit.
    pub fn scale(&self) -> f64 {
        scale_for_dpi(self.dpi)
    }

    /// Printable page rectangle in printer device units.
    pub fn page_rect(&self) -> Rect {
        let scale = self.scale();
        Rect::from_origin_size(self.origin, Size::new(self.width_mm * scale, self.height_mm * scale))
    }
}

/// One page of a print job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub row: usize,
    pub column: usize,
    /// Translation applied before scaling, in printer device units.
    pub translation: Vec2,
    /// Device units per canvas unit.
    pub scale: f64,
}

impl Tile {
    /// Canvas-to-page transform: translate, then scale.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// The part of the canvas, in canvas device units, that lands on this page.
    pub fn content_window(&self, page: Size) -> Rect {
        let w = page.width / self.scale;
        let h = page.height / self.scale;
        let x0 = self.column as f64 * w;
        let y0 = self.row as f64 * h;
        Rect::new(x0, y0, x0 + w, y0 + h)
    }
}

/// Grid of pages covering a rendered region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGrid {
    columns: usize,
    rows: usize,
    page: Rect,
    scale: f64,
}

impl PageGrid {
    /// Compute the smallest grid covering `region` (canvas device units)
    /// with pages of `page` (printer device units) at `scale`.
    pub fn compute(region: Size, page: Rect, scale: f64) -> Result<Self, TilingError> {
        let degenerate = || TilingError::DegenerateGeometry {
            page_width: page.width(),
            page_height: page.height(),
            scale,
        };
        if !(scale.is_finite() && scale > 0.0) {
            return Err(degenerate());
        }
        if !(page.width().is_finite() && page.height().is_finite())
            || !(page.x0.is_finite() && page.y0.is_finite())
            || page.width() <= 0.0
            || page.height() <= 0.0
        {
            return Err(degenerate());
        }
        if !(region.width.is_finite() && region.height.is_finite()) || region.width < 0.0 || region.height < 0.0 {
            return Err(TilingError::InvalidRegion {
                width: region.width,
                height: region.height,
            });
        }

        let columns = page_count(region.width * scale, page.width());
        let rows = page_count(region.height * scale, page.height());
        if !(columns * rows <= MAX_PAGES as f64) {
            return Err(TilingError::TooManyPages { columns, rows });
        }

        let grid = Self {
            columns: columns as usize,
            rows: rows as usize,
            page,
            scale,
        };
        log::debug!(
            "Tiled {}x{} region into {} columns x {} rows",
            region.width,
            region.height,
            grid.columns,
            grid.rows
        );
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn page_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn page_rect(&self) -> Rect {
        self.page
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The page at (row, column). Indices are not range checked.
    pub fn tile(&self, row: usize, column: usize) -> Tile {
        let tx = self.page.x0 - column as f64 * self.page.width();
        let ty = self.page.y0 - row as f64 * self.page.height();
        Tile {
            row,
            column,
            translation: Vec2::new(tx, ty),
            scale: self.scale,
        }
    }

    /// All pages in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |column| self.tile(row, column)))
    }
}

/// Whole pages needed to cover `extent`, at least one.
fn page_count(extent: f64, page: f64) -> f64 {
    ((extent / page) - PAGE_EPSILON).ceil().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: f64, h: f64, page_w: f64, page_h: f64, scale: f64) -> Result<PageGrid, TilingError> {
        PageGrid::compute(Size::new(w, h), Rect::new(0.0, 0.0, page_w, page_h), scale)
    }

    #[test]
    fn test_grid_dimensions() {
        let g = grid(500.0, 300.0, 297.0, 210.0, 1.0).unwrap();
        assert_eq!(g.columns(), 2);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.page_count(), 4);
    }

    #[test]
    fn test_small_region_uses_one_page() {
        let g = grid(10.0, 10.0, 297.0, 210.0, 1.0).unwrap();
        assert_eq!((g.columns(), g.rows()), (1, 1));

        let g = grid(0.0, 0.0, 297.0, 210.0, 1.0).unwrap();
        assert_eq!((g.columns(), g.rows()), (1, 1));
    }

    #[test]
    fn test_exact_fit_does_not_spill() {
        let g = grid(594.0, 210.0, 297.0, 210.0, 1.0).unwrap();
        assert_eq!((g.columns(), g.rows()), (2, 1));

        // 0.1 * 3 is not exactly 0.3 in f64.
        let g = grid(3.0, 1.0, 0.1, 1.0, 0.1).unwrap();
        assert_eq!(g.columns(), 3);
    }

    #[test]
    fn test_scale_multiplies_pages() {
        let dpi = 300.0;
        let setup = PageSetup::a4_landscape(dpi);
        let g = PageGrid::compute(Size::new(800.0, 600.0), setup.page_rect(), setup.scale()).unwrap();
        // 800 mm / 297 mm and 600 mm / 210 mm.
        assert_eq!((g.columns(), g.rows()), (3, 3));
    }

    #[test]
    fn test_tile_translation() {
        let page = Rect::new(10.0, 20.0, 307.0, 230.0);
        let g = PageGrid::compute(Size::new(500.0, 300.0), page, 1.0).unwrap();
        let tile = g.tile(1, 1);
        assert!((tile.translation.x - (10.0 - 297.0)).abs() < f64::EPSILON);
        assert!((tile.translation.y - (20.0 - 210.0)).abs() < f64::EPSILON);

        // The top-left of the (1, 1) window lands on the page origin.
        let mapped = tile.transform() * Point::new(297.0, 210.0);
        assert!((mapped.x - 10.0).abs() < 1e-9);
        assert!((mapped.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_scales_after_translation() {
        let g = grid(100.0, 100.0, 50.0, 50.0, 2.0).unwrap();
        assert_eq!((g.columns(), g.rows()), (4, 4));
        let tile = g.tile(0, 1);
        let mapped = tile.transform() * Point::new(25.0, 10.0);
        assert!((mapped.x - 0.0).abs() < 1e-9);
        assert!((mapped.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiles_row_major() {
        let g = grid(500.0, 300.0, 297.0, 210.0, 1.0).unwrap();
        let order: Vec<(usize, usize)> = g.tiles().map(|t| (t.row, t.column)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_tiles_cover_region() {
        let region = Rect::new(0.0, 0.0, 500.0, 300.0);
        let page = Size::new(297.0, 210.0);
        let g = grid(500.0, 300.0, page.width, page.height, 1.0).unwrap();
        let windows: Vec<Rect> = g.tiles().map(|t| t.content_window(page)).collect();

        let union = windows.iter().skip(1).fold(windows[0], |acc, w| acc.union(*w));
        assert!(union.x0 <= region.x0 && union.y0 <= region.y0);
        assert!(union.x1 >= region.x1 && union.y1 >= region.y1);

        for (i, a) in windows.iter().enumerate() {
            for b in windows.iter().skip(i + 1) {
                assert!(a.intersect(*b).area() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_degenerate_page_rejected() {
        assert!(matches!(grid(100.0, 100.0, 0.0, 210.0, 1.0), Err(TilingError::DegenerateGeometry { .. })));
        assert!(matches!(grid(100.0, 100.0, 297.0, 0.0, 1.0), Err(TilingError::DegenerateGeometry { .. })));
        assert!(matches!(grid(100.0, 100.0, 297.0, 210.0, 0.0), Err(TilingError::DegenerateGeometry { .. })));
        assert!(matches!(grid(100.0, 100.0, 297.0, 210.0, -1.0), Err(TilingError::DegenerateGeometry { .. })));
        assert!(matches!(grid(100.0, 100.0, 297.0, 210.0, f64::NAN), Err(TilingError::DegenerateGeometry { .. })));
        assert!(matches!(
            PageGrid::compute(Size::new(100.0, 100.0), PageSetup::a4_landscape(0.0).page_rect(), 0.0),
            Err(TilingError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_invalid_region_rejected() {
        assert!(matches!(grid(-1.0, 100.0, 297.0, 210.0, 1.0), Err(TilingError::InvalidRegion { .. })));
        assert!(matches!(grid(f64::INFINITY, 100.0, 297.0, 210.0, 1.0), Err(TilingError::InvalidRegion { .. })));
    }

    #[test]
    fn test_too_many_pages_rejected() {
        assert!(matches!(grid(1e12, 1e12, 1.0, 1.0, 1.0), Err(TilingError::TooManyPages { .. })));
    }

    #[test]
    fn test_page_setup() {
        let setup = PageSetup::a4_landscape(25.4);
        assert!((setup.scale() - 1.0).abs() < f64::EPSILON);
        let rect = setup.page_rect();
        assert!((rect.width() - 297.0).abs() < 1e-9);
        assert!((rect.height() - 210.0).abs() < 1e-9);

        let portrait = PageSetup::a4_portrait(25.4).page_rect();
        assert!((portrait.width() - 210.0).abs() < 1e-9);
    }
}
