//! Axis overlay: lines from the anchor, ticks with distance labels, arrowheads.

use crate::color::Rgba8;
use crate::renderer::DrawCommand;
use kurbo::{Line, Point, Vec2};
use millisketch_core::geometry::{DevicePoint, Viewport};
use millisketch_core::transform::axis_layout;

/// Axis line and label color.
pub const AXIS_COLOR: Rgba8 = Rgba8::new(128, 128, 128, 255);

const AXIS_WIDTH: f64 = 2.0;
const TICK_HALF_LENGTH: f64 = 6.0;
const ARROW_LENGTH: f64 = 8.0;
const ARROW_HALF_WIDTH: f64 = 5.0;

fn line(a: Point, b: Point) -> DrawCommand {
    DrawCommand::Line {
        line: Line::new(a, b),
        color: AXIS_COLOR,
        width: AXIS_WIDTH,
    }
}

fn text(origin: Point, text: String) -> DrawCommand {
    DrawCommand::Text {
        origin,
        text,
        color: AXIS_COLOR,
    }
}

fn point(p: DevicePoint) -> Point {
    p.into()
}

/// Draw commands for the axes of a viewport.
pub fn axis_commands(viewport: Viewport) -> Vec<DrawCommand> {
    let layout = axis_layout(viewport);
    let origin = point(layout.origin);
    let mut commands = Vec::new();

    if layout.has_x_axis() {
        let x_end = point(layout.x_end);
        commands.push(line(origin, x_end));
        for tick in &layout.x_ticks {
            let p = point(tick.position);
            commands.push(line(p - Vec2::new(0.0, TICK_HALF_LENGTH), p + Vec2::new(0.0, TICK_HALF_LENGTH)));
            commands.push(text(p + Vec2::new(-12.0, -8.0), tick.value.to_string()));
        }
        commands.push(line(x_end, x_end + Vec2::new(-ARROW_LENGTH, -ARROW_HALF_WIDTH)));
        commands.push(line(x_end, x_end + Vec2::new(-ARROW_LENGTH, ARROW_HALF_WIDTH)));
        commands.push(text(x_end + Vec2::new(-15.0, -8.0), "X".to_string()));
    }

    if layout.has_y_axis() {
        let y_end = point(layout.y_end);
        commands.push(line(origin, y_end));
        for tick in &layout.y_ticks {
            let p = point(tick.position);
            commands.push(line(p - Vec2::new(TICK_HALF_LENGTH, 0.0), p + Vec2::new(TICK_HALF_LENGTH, 0.0)));
            commands.push(text(p + Vec2::new(8.0, 4.0), tick.value.to_string()));
        }
        // Barbs trail below the tip since the y axis points up.
        commands.push(line(y_end, y_end + Vec2::new(-ARROW_HALF_WIDTH, ARROW_LENGTH)));
        commands.push(line(y_end, y_end + Vec2::new(ARROW_HALF_WIDTH, ARROW_LENGTH)));
        commands.push(text(y_end + Vec2::new(8.0, -12.0), "Y".to_string()));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_axis_labels() {
        let commands = axis_commands(Viewport::new(400, 300));
        // x axis: 40..380 gives ticks 100, 200, 300; y axis: 260..20 gives 100, 200.
        assert_eq!(labels(&commands), vec!["100", "200", "300", "X", "100", "200", "Y"]);
    }

    #[test]
    fn test_axis_lines_start_at_anchor() {
        let commands = axis_commands(Viewport::new(400, 300));
        let DrawCommand::Line { line, .. } = &commands[0] else {
            panic!("expected x axis line first");
        };
        assert_eq!(line.p0, Point::new(40.0, 260.0));
        assert_eq!(line.p1, Point::new(380.0, 260.0));
    }

    #[test]
    fn test_tick_label_position() {
        let commands = axis_commands(Viewport::new(400, 300));
        let first_label = commands.iter().find_map(|c| match c {
            DrawCommand::Text { origin, text, .. } if text == "100" => Some(*origin),
            _ => None,
        });
        assert_eq!(first_label, Some(Point::new(128.0, 252.0)));
    }

    #[test]
    fn test_no_axes_in_tiny_viewport() {
        assert!(axis_commands(Viewport::new(30, 30)).is_empty());
    }

    #[test]
    fn test_labels_follow_resize() {
        let small = labels(&axis_commands(Viewport::new(400, 300)));
        let large = labels(&axis_commands(Viewport::new(1000, 800)));
        assert!(large.len() > small.len());
        assert!(large.contains(&"900".to_string()));
        assert!(large.contains(&"700".to_string()));
    }
}
