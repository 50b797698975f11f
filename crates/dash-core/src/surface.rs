// File: crates/dash-core/src/surface.rs
// Summary: Rendering-surface abstraction (canvas-style stateful API), scoped
//          save/restore guard, and a recording surface for tests and benches.

use std::ops::{Deref, DerefMut};

/// Straight-alpha color; `a` is in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::rgb(64, 160, 255)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Canvas-style drawing target. Stroke state (width, color, join, dash and
/// transform) is sticky until changed or restored.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

/// Saves the surface state on creation and restores it on drop, so state set
/// inside the scope never leaks to the next series, even on unwind.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;
    fn deref(&self) -> &S { self.surface }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S { self.surface }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Stroke state captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeState {
    pub line_width: f64,
    pub color: Rgba,
    pub line_join: LineJoin,
    pub dash: Vec<f64>,
    pub translate: (f64, f64),
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Rgba::BLACK,
            line_join: LineJoin::Miter,
            dash: Vec::new(),
            translate: (0.0, 0.0),
        }
    }
}

/// One recorded surface call. `Stroke` carries the state in effect when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    LineJoin(LineJoin),
    LineWidth(f64),
    StrokeColor(Rgba),
    LineDash(Vec<f64>),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke(StrokeState),
}

/// In-memory surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    state: StrokeState,
    stack: Vec<StrokeState>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Current (un-stroked) state.
    pub fn state(&self) -> &StrokeState { &self.state }

    /// Number of outstanding `save` calls.
    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn strokes(&self) -> Vec<&StrokeState> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn count_moves(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::MoveTo { .. })).count()
    }

    pub fn count_lines(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::LineTo { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, as on a canvas.
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translate.0 += dx;
        self.state.translate.1 += dy;
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
        self.commands.push(DrawCommand::LineJoin(join));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.state.color = color;
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.state.dash = pattern.to_vec();
        self.commands.push(DrawCommand::LineDash(pattern.to_vec()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke(self.state.clone()));
    }
}
