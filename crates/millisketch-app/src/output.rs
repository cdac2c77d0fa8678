//! Plain-text renderers for terminal output.

use kurbo::Affine;
use millisketch_render::{DrawCommand, PageWriter, PrintError, Renderer};
use std::fmt::Write;

/// Renders draw commands as one line of text each.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, command: &DrawCommand, transform: Affine) {
        // Writing to a String cannot fail.
        let _ = writeln!(self.output, "{}", describe(command, transform));
    }
}

/// Page writer that lists each page and how many commands landed on it.
#[derive(Debug, Default)]
pub struct PageListing {
    pages: Vec<PageEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct PageEntry {
    transform: Option<Affine>,
    commands: usize,
}

impl PageListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn into_string(self) -> String {
        let mut output = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            let offset = page.transform.map(|t| t.translation()).unwrap_or_default();
            let _ = writeln!(
                output,
                "page {}: offset ({:.1}, {:.1}), {} commands",
                i + 1,
                offset.x,
                offset.y,
                page.commands
            );
        }
        output
    }
}

impl Renderer for PageListing {
    fn draw(&mut self, _command: &DrawCommand, transform: Affine) {
        if self.pages.is_empty() {
            self.pages.push(PageEntry {
                transform: None,
                commands: 0,
            });
        }
        if let Some(page) = self.pages.last_mut() {
            page.transform = Some(transform);
            page.commands += 1;
        }
    }
}

impl PageWriter for PageListing {
    fn new_page(&mut self) -> Result<(), PrintError> {
        self.pages.push(PageEntry {
            transform: None,
            commands: 0,
        });
        Ok(())
    }
}

fn describe(command: &DrawCommand, transform: Affine) -> String {
    match command {
        DrawCommand::Clear { rect, color } => {
            let rect = transform.transform_rect_bbox(*rect);
            format!("clear {:.0}x{:.0} {}", rect.width(), rect.height(), color.to_hex())
        }
        DrawCommand::FillRect { rect, selected, .. } => {
            let rect = transform.transform_rect_bbox(*rect);
            format!(
                "rect ({:.0}, {:.0})-({:.0}, {:.0}){}",
                rect.x0,
                rect.y0,
                rect.x1,
                rect.y1,
                if *selected { " selected" } else { "" }
            )
        }
        DrawCommand::FillCircle { circle, selected, .. } => {
            let center = transform * circle.center;
            format!(
                "circle ({:.0}, {:.0}) r={:.0}{}",
                center.x,
                center.y,
                circle.radius * transform.as_coeffs()[0].abs(),
                if *selected { " selected" } else { "" }
            )
        }
        DrawCommand::Line { line, .. } => {
            let (a, b) = (transform * line.p0, transform * line.p1);
            format!("line ({:.0}, {:.0})-({:.0}, {:.0})", a.x, a.y, b.x, b.y)
        }
        DrawCommand::Text { origin, text, .. } => {
            let origin = transform * *origin;
            format!("text ({:.0}, {:.0}) {:?}", origin.x, origin.y, text)
        }
    }
}
