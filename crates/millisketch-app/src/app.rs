//! Application state: one canvas bound to one storage backend.

use crate::cli::Command;
use crate::config::AppConfig;
use crate::output::{PageListing, TextRenderer};
use anyhow::{Context, Result, bail};
use kurbo::Affine;
use millisketch_core::canvas::Canvas;
use millisketch_core::geometry::{DevicePoint, WorldPoint};
use millisketch_core::shapes::ShapeKind;
use millisketch_core::storage::{FileStorage, Storage, load_or_default};
use millisketch_render::{RenderContext, Renderer, build_commands, print_canvas};
use std::fmt::Write;

/// The application.
pub struct App {
    config: AppConfig,
    storage: Box<dyn Storage>,
    canvas: Canvas,
}

impl App {
    /// Open the scene file named in the configuration.
    pub fn new(config: AppConfig) -> Self {
        let storage = Box::new(FileStorage::new(config.scene_path.clone()));
        Self::with_storage(config, storage)
    }

    /// Open the scene held by an arbitrary storage backend.
    pub fn with_storage(config: AppConfig, storage: Box<dyn Storage>) -> Self {
        let mut canvas = Canvas::with_scene(load_or_default(storage.as_ref()));
        canvas.set_viewport(config.viewport);
        log::debug!("Loaded scene with {} shapes", canvas.scene.len());
        Self {
            config,
            storage,
            canvas,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run one command and return what it prints.
    ///
    /// Commands that change the scene save it before returning.
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        match *command {
            Command::Show => Ok(self.describe_scene()),
            Command::AddRect { bl_x, bl_y, tr_x, tr_y } => {
                let index = self
                    .canvas
                    .scene
                    .add_rectangle(WorldPoint::new(bl_x, bl_y), WorldPoint::new(tr_x, tr_y));
                self.save()?;
                Ok(format!("Added rectangle {}", index))
            }
            Command::AddCircle { cx, cy, r } => {
                if r <= 0 {
                    bail!("Circle radius must be positive, got {}", r);
                }
                let index = self.canvas.scene.add_circle(WorldPoint::new(cx, cy), r)?;
                self.save()?;
                Ok(format!("Added circle {}", index))
            }
            Command::DeleteAt { x, y, world } => {
                let selection = if world {
                    self.canvas.scene.select_at(WorldPoint::new(x, y))
                } else {
                    self.canvas.select_at_device(DevicePoint::new(x, y))
                };
                let (Some(kind), Some(index), Some(_)) =
                    (selection.kind(), selection.index(), self.canvas.delete_selected())
                else {
                    return Ok(format!("No shape at ({}, {})", x, y));
                };
                let message = match kind {
                    ShapeKind::Rectangle => format!("Deleted rectangle {}", index),
                    ShapeKind::Circle => format!("Deleted circle {}", index),
                };
                self.save()?;
                Ok(message)
            }
            Command::Render => {
                let ctx = RenderContext::new(&self.canvas);
                let mut renderer = TextRenderer::new();
                renderer.render(&build_commands(&ctx), Affine::IDENTITY);
                Ok(renderer.into_string())
            }
            Command::Pages => {
                let mut listing = PageListing::new();
                let summary = print_canvas(&self.canvas, &self.config.page, &mut listing)?;
                Ok(format!(
                    "{} columns x {} rows ({} pages)\n{}",
                    summary.columns,
                    summary.rows,
                    summary.pages,
                    listing.into_string()
                ))
            }
        }
    }

    /// Save the scene to storage.
    pub fn save(&self) -> Result<()> {
        self.storage
            .save(&self.canvas.scene)
            .with_context(|| format!("Failed to save scene to {}", self.config.scene_path.display()))?;
        log::info!("Saved {} shapes", self.canvas.scene.len());
        Ok(())
    }

    fn describe_scene(&self) -> String {
        let scene = &self.canvas.scene;
        if scene.is_empty() {
            return "Scene is empty".to_string();
        }
        let mut output = String::new();
        for (i, rect) in scene.rectangles().iter().enumerate() {
            let _ = writeln!(
                output,
                "rectangle {}: ({}, {}) to ({}, {})",
                i,
                rect.min().x,
                rect.min().y,
                rect.max().x,
                rect.max().y
            );
        }
        for (i, circle) in scene.circles().iter().enumerate() {
            let _ = writeln!(
                output,
                "circle {}: center ({}, {}) radius {}",
                i,
                circle.center().x,
                circle.center().y,
                circle.radius()
            );
        }
        if let Some(bounds) = scene.bounds() {
            let _ = write!(
                output,
                "bounds: ({}, {}) to ({}, {})",
                bounds.min().x,
                bounds.min().y,
                bounds.max().x,
                bounds.max().y
            );
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millisketch_core::storage::MemoryStorage;
    use tempfile::tempdir;

    fn memory_app() -> App {
        App::with_storage(AppConfig::default(), Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_add_and_show() {
        let mut app = memory_app();
        assert_eq!(app.execute(&Command::Show).unwrap(), "Scene is empty");

        app.execute(&Command::AddRect {
            bl_x: 10,
            bl_y: 10,
            tr_x: 50,
            tr_y: 40,
        })
        .unwrap();
        app.execute(&Command::AddCircle { cx: 100, cy: 100, r: 20 }).unwrap();

        let shown = app.execute(&Command::Show).unwrap();
        assert!(shown.contains("rectangle 0: (10, 10) to (50, 40)"));
        assert!(shown.contains("circle 0: center (100, 100) radius 20"));
        assert!(shown.contains("bounds: (10, 10) to (120, 120)"));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut app = memory_app();
        assert!(app.execute(&Command::AddCircle { cx: 0, cy: 0, r: 0 }).is_err());
        assert!(app.canvas().scene.is_empty());
    }

    #[test]
    fn test_delete_at_world_and_device() {
        let mut app = memory_app();
        app.execute(&Command::AddCircle { cx: 100, cy: 100, r: 20 }).unwrap();
        app.execute(&Command::AddRect {
            bl_x: 0,
            bl_y: 0,
            tr_x: 10,
            tr_y: 10,
        })
        .unwrap();

        let missed = app.execute(&Command::DeleteAt { x: 500, y: 500, world: true }).unwrap();
        assert_eq!(missed, "No shape at (500, 500)");

        // World (5, 5) is device (45, 555) in an 800x600 viewport.
        let deleted = app.execute(&Command::DeleteAt { x: 45, y: 555, world: false }).unwrap();
        assert_eq!(deleted, "Deleted rectangle 0");

        let deleted = app.execute(&Command::DeleteAt { x: 110, y: 110, world: true }).unwrap();
        assert_eq!(deleted, "Deleted circle 0");
        assert!(app.canvas().scene.is_empty());
    }

    #[test]
    fn test_changes_persist_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("scene.json");
        let config = AppConfig::default().with_scene_path(&path);

        let mut app = App::new(config.clone());
        app.execute(&Command::AddCircle { cx: 5, cy: 5, r: 3 }).unwrap();
        assert!(path.exists());

        let reopened = App::new(config);
        assert_eq!(reopened.canvas().scene.circles().len(), 1);
        assert_eq!(reopened.canvas().scene.circles()[0].radius(), 3);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut app = App::new(AppConfig::default().with_scene_path(&path));
        assert!(app.canvas().scene.is_empty());

        app.execute(&Command::AddCircle { cx: 1, cy: 1, r: 1 }).unwrap();
        let backup = dir.path().join("scene.json.bak");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
    }

    #[test]
    fn test_render_lists_commands() {
        let mut app = memory_app();
        app.execute(&Command::AddRect {
            bl_x: 10,
            bl_y: 10,
            tr_x: 50,
            tr_y: 40,
        })
        .unwrap();
        let output = app.execute(&Command::Render).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("clear 800x600 #f5f5f5ff"));
        assert_eq!(lines.next(), Some("rect (50, 520)-(90, 550)"));
        assert!(output.contains("text (128, 552) \"100\""));
    }

    #[test]
    fn test_pages() {
        let config = AppConfig::default().with_viewport(400, 300).with_dpi(25.4);
        let mut app = App::with_storage(config, Box::new(MemoryStorage::new()));
        let output = app.execute(&Command::Pages).unwrap();
        assert!(output.starts_with("2 columns x 2 rows (4 pages)"));
        assert!(output.contains("page 4: offset (-297.0, -210.0)"));
    }

    #[test]
    fn test_pages_degenerate_dpi() {
        let config = AppConfig::default().with_dpi(0.0);
        let mut app = App::with_storage(config, Box::new(MemoryStorage::new()));
        assert!(app.execute(&Command::Pages).is_err());
    }
}
