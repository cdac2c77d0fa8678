//! MilliSketch Core Library
//!
//! Scene model, world/device coordinate mapping and print tiling for a small
//! 2D drawing of rectangles and circles measured in millimetres.

pub mod canvas;
pub mod geometry;
pub mod scene;
pub mod selection;
pub mod shapes;
pub mod storage;
pub mod tiler;
pub mod transform;

pub use canvas::Canvas;
pub use geometry::{DevicePoint, Viewport, WorldPoint};
pub use scene::{Scene, SceneFormatError};
pub use selection::Selection;
pub use shapes::{Circle, Rectangle, Shape, ShapeError, ShapeKind, ShapeTrait};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, load_or_default};
pub use tiler::{PageGrid, PageSetup, Tile, TilingError, scale_for_dpi};
pub use transform::{AxisLayout, Tick, ViewTransform, axis_layout};
