//! Draw-command list and the renderer trait that consumes it.

use crate::axes::axis_commands;
use crate::color::Rgba8;
use kurbo::{Affine, Circle, Line, Point, Rect};
use millisketch_core::canvas::Canvas;
use millisketch_core::geometry::Viewport;
use millisketch_core::shapes::ShapeTrait;

/// Fill for rectangles.
pub const RECTANGLE_FILL: Rgba8 = Rgba8::new(160, 200, 140, 180);
/// Fill for circles.
pub const CIRCLE_FILL: Rgba8 = Rgba8::new(120, 180, 220, 160);
/// Outline for both shape kinds.
pub const SHAPE_STROKE: Rgba8 = Rgba8::new(0, 0, 0, 255);
/// Screen background.
pub const BACKGROUND: Rgba8 = Rgba8::new(245, 245, 245, 255);
/// Selection highlight.
pub const SELECTION: Rgba8 = Rgba8::new(59, 130, 246, 255);

/// One drawing operation in device space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole area with a color.
    Clear { rect: Rect, color: Rgba8 },
    /// Filled and outlined rectangle.
    FillRect {
        rect: Rect,
        fill: Rgba8,
        stroke: Rgba8,
        selected: bool,
    },
    /// Filled and outlined circle.
    FillCircle {
        circle: Circle,
        fill: Rgba8,
        stroke: Rgba8,
        selected: bool,
    },
    /// Straight line segment.
    Line { line: Line, color: Rgba8, width: f64 },
    /// Text with its baseline starting at `origin`.
    Text { origin: Point, text: String, color: Rgba8 },
}

/// Context for building one frame of draw commands.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Size to lay the frame out for.
    pub viewport: Viewport,
    /// Background color, `None` leaves the target untouched.
    pub background_color: Option<Rgba8>,
    /// Selection highlight color, `None` disables highlighting.
    pub selection_color: Option<Rgba8>,
    /// Draw the axes with ticks and labels.
    pub show_axes: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context for the canvas's own viewport.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            viewport: canvas.viewport(),
            background_color: Some(BACKGROUND),
            selection_color: Some(SELECTION),
            show_axes: true,
        }
    }

    /// Lay out for a different size than the canvas viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Option<Rgba8>) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Option<Rgba8>) -> Self {
        self.selection_color = color;
        self
    }

    /// Show or hide the axes.
    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }
}

/// Build the draw commands for a frame.
///
/// Order is background, circles, rectangles, axes. Within a kind shapes are
/// emitted in insertion order so later ones end up on top.
pub fn build_commands(ctx: &RenderContext) -> Vec<DrawCommand> {
    let scene = &ctx.canvas.scene;
    let transform = millisketch_core::ViewTransform::for_viewport(ctx.viewport);
    let selection = scene.selection();
    let highlight = ctx.selection_color.is_some();
    let mut commands = Vec::with_capacity(scene.len() + 32);

    if let Some(color) = ctx.background_color {
        commands.push(DrawCommand::Clear {
            rect: ctx.viewport.rect(),
            color,
        });
    }

    for (i, circle) in scene.circles().iter().enumerate() {
        let center = transform.to_device(circle.center());
        commands.push(DrawCommand::FillCircle {
            circle: Circle::new(Point::from(center), f64::from(circle.radius())),
            fill: CIRCLE_FILL,
            stroke: SHAPE_STROKE,
            selected: highlight && selection.is_circle(i),
        });
    }

    for (i, rect) in scene.rectangles().iter().enumerate() {
        let bounds = rect.bounds();
        let a = transform.to_device(bounds.min());
        let b = transform.to_device(bounds.max());
        commands.push(DrawCommand::FillRect {
            rect: Rect::from_points(Point::from(a), Point::from(b)),
            fill: RECTANGLE_FILL,
            stroke: SHAPE_STROKE,
            selected: highlight && selection.is_rectangle(i),
        });
    }

    if ctx.show_axes {
        commands.extend(axis_commands(ctx.viewport));
    }

    commands
}

/// Trait for rendering backends.
///
/// Implementations rasterize, export or record the commands. `transform`
/// maps command coordinates onto the target and is the identity for screen
/// rendering.
pub trait Renderer {
    /// Draw a single command.
    fn draw(&mut self, command: &DrawCommand, transform: Affine);

    /// Draw a list of commands in order.
    fn render(&mut self, commands: &[DrawCommand], transform: Affine) {
        for command in commands {
            self.draw(command, transform);
        }
    }
}

/// Renderer that keeps every command it is given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<(DrawCommand, Affine)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, command: &DrawCommand, transform: Affine) {
        self.commands.push((command.clone(), transform));
    }
}
