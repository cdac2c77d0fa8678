//! Application configuration.

use millisketch_core::geometry::Viewport;
use millisketch_core::storage::FileStorage;
use millisketch_core::tiler::PageSetup;
use std::path::PathBuf;

/// Default printer resolution.
pub const DEFAULT_DPI: f64 = 300.0;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the scene is loaded from and saved to.
    pub scene_path: PathBuf,
    /// Size of the drawing area in device units.
    pub viewport: Viewport,
    /// Page used for printing.
    pub page: PageSetup,
}

impl Default for AppConfig {
    fn default() -> Self {
        let scene_path = match FileStorage::default_location() {
            Ok(storage) => storage.path().to_path_buf(),
            Err(e) => {
                log::warn!("{}, using the working directory", e);
                PathBuf::from(millisketch_core::storage::SCENE_FILE_NAME)
            }
        };
        Self {
            scene_path,
            viewport: Viewport::new(800, 600),
            page: PageSetup::a4_landscape(DEFAULT_DPI),
        }
    }
}

impl AppConfig {
    pub fn with_scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = path.into();
        self
    }

    /// Set the viewport, never smaller than [`Viewport::MINIMUM`].
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Viewport::new(
            width.max(Viewport::MINIMUM.width),
            height.max(Viewport::MINIMUM.height),
        );
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.page.dpi = dpi;
        self
    }

    /// Print on A4 portrait pages at the configured resolution.
    pub fn portrait(mut self) -> Self {
        self.page = PageSetup::a4_portrait(self.page.dpi);
        self
    }
}
