//! The 2D drawing contract the field renders through.
//!
//! Browser hosts implement [`Surface`] over a canvas context; tests and other
//! hosts can use [`RecordingSurface`] to capture a frame as a command list.

use glam::DVec2;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Erase the whole drawing area.
    fn clear(&mut self);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    /// Opacity applied to subsequent fills and strokes, in `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillColor(String),
    StrokeColor(String),
    GlobalAlpha(f64),
    Circle { center: DVec2, radius: f64 },
    Line { from: DVec2, to: DVec2 },
}

/// A stroked segment together with the opacity that was in force for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedLine {
    pub from: DVec2,
    pub to: DVec2,
    pub alpha: f64,
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }

    pub fn circles(&self) -> Vec<DVec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        let mut alpha = 1.0;
        let mut out = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::GlobalAlpha(a) => alpha = *a,
                DrawCommand::Line { from, to } => out.push(RecordedLine {
                    from: *from,
                    to: *to,
                    alpha,
                }),
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_owned()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor(color.to_owned()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }
}
