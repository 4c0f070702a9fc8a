//! Replaying recorded commands onto a drawing surface.

use crate::geom::ScreenPoint;

use super::{Color, Graphics, LineStyle, RenderCommand};

/// A drawing surface that consumes device-space commands.
///
/// Implement this trait to render layers to a target (window, image, SVG,
/// test recorder). Commands arrive in the order they were recorded; layers
/// arrive bottom to top, each bracketed by `begin_layer`/`end_layer`.
pub trait PathSink {
    /// Called before the commands of a layer.
    fn begin_layer(&mut self, _name: &str) {}

    /// Called after the commands of a layer.
    fn end_layer(&mut self) {}

    /// Set the stroke for following path commands.
    fn set_line_style(&mut self, style: LineStyle);

    /// Start a new sub-path.
    fn move_to(&mut self, point: ScreenPoint);

    /// Extend the current sub-path.
    fn line_to(&mut self, point: ScreenPoint);

    /// Begin filling shapes.
    fn begin_fill(&mut self, color: Color);

    /// Add a circle with a pixel radius.
    fn circle(&mut self, center: ScreenPoint, radius: f32);

    /// End the current fill.
    fn end_fill(&mut self);
}

/// Dispatch `commands` to `sink` in order.
pub fn replay<S: PathSink + ?Sized>(commands: &[RenderCommand], sink: &mut S) {
    for command in commands {
        match command {
            RenderCommand::LineStyle(style) => sink.set_line_style(*style),
            RenderCommand::MoveTo(point) => sink.move_to(*point),
            RenderCommand::LineTo(point) => sink.line_to(*point),
            RenderCommand::BeginFill(color) => sink.begin_fill(*color),
            RenderCommand::Circle { center, radius } => sink.circle(*center, *radius),
            RenderCommand::EndFill => sink.end_fill(),
        }
    }
}

/// Copying into another handle.
impl PathSink for Graphics {
    fn set_line_style(&mut self, style: LineStyle) {
        self.line_style(style.width, style.color);
    }

    fn move_to(&mut self, point: ScreenPoint) {
        Graphics::move_to(self, point);
    }

    fn line_to(&mut self, point: ScreenPoint) {
        Graphics::line_to(self, point);
    }

    fn begin_fill(&mut self, color: Color) {
        Graphics::begin_fill(self, color);
    }

    fn circle(&mut self, center: ScreenPoint, radius: f32) {
        self.draw_circle(center, radius);
    }

    fn end_fill(&mut self) {
        Graphics::end_fill(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_into_graphics_copies_commands() {
        let mut source = Graphics::new();
        source
            .begin_fill(Color::WHITE)
            .draw_circle(ScreenPoint::new(1.0, 2.0), 3.0)
            .end_fill();
        let mut copy = Graphics::new();
        source.replay(&mut copy);
        assert_eq!(copy.commands(), source.commands());
    }
}
