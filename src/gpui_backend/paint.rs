use gpui::{
    BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, Window, point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{Color, LineStyle, PathSink};

/// Paints replayed layer commands into a GPUI window.
///
/// Consecutive path commands under one line style are batched into a single
/// stroked path, flushed when the style changes, a fill starts, or the layer
/// ends. Circles inside a fill paint as round quads; outside a fill they paint
/// as outlines with the current line style.
pub(crate) struct GpuiPainter<'a> {
    window: &'a mut Window,
    origin: Point<Pixels>,
    style: LineStyle,
    fill: Option<Color>,
    stroke: Option<PathBuilder>,
    pen_down: bool,
}

impl<'a> GpuiPainter<'a> {
    pub(crate) fn new(window: &'a mut Window, origin: Point<Pixels>) -> Self {
        Self {
            window,
            origin,
            style: LineStyle::default(),
            fill: None,
            stroke: None,
            pen_down: false,
        }
    }

    fn to_pixels(&self, pt: ScreenPoint) -> Point<Pixels> {
        point(self.origin.x + px(pt.x), self.origin.y + px(pt.y))
    }

    fn flush(&mut self) {
        self.pen_down = false;
        let Some(builder) = self.stroke.take() else {
            return;
        };
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(self.style.color));
        }
    }

    fn stroke_builder(&mut self) -> Option<&mut PathBuilder> {
        if self.style.width <= 0.0 {
            return None;
        }
        let width = self.style.width;
        Some(
            self.stroke
                .get_or_insert_with(|| PathBuilder::stroke(px(width))),
        )
    }
}

impl PathSink for GpuiPainter<'_> {
    fn end_layer(&mut self) {
        self.flush();
        self.fill = None;
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.flush();
        self.style = style;
    }

    fn move_to(&mut self, pt: ScreenPoint) {
        if !is_finite(pt) {
            self.pen_down = false;
            return;
        }
        let to = self.to_pixels(pt);
        if let Some(builder) = self.stroke_builder() {
            builder.move_to(to);
        }
        self.pen_down = true;
    }

    fn line_to(&mut self, pt: ScreenPoint) {
        if !self.pen_down {
            self.move_to(pt);
            return;
        }
        if !is_finite(pt) {
            self.pen_down = false;
            return;
        }
        let to = self.to_pixels(pt);
        if let Some(builder) = self.stroke_builder() {
            builder.line_to(to);
        }
    }

    fn begin_fill(&mut self, color: Color) {
        self.flush();
        self.fill = Some(color);
    }

    fn circle(&mut self, center: ScreenPoint, radius: f32) {
        if !is_finite(center) || radius <= 0.0 {
            return;
        }
        let bounds = Bounds::from_corners(
            self.to_pixels(ScreenPoint::new(center.x - radius, center.y - radius)),
            self.to_pixels(ScreenPoint::new(center.x + radius, center.y + radius)),
        );
        let (background, border_width) = match self.fill {
            Some(fill) => (fill, 0.0),
            None if self.style.width > 0.0 => (Color::new(0.0, 0.0, 0.0, 0.0), self.style.width),
            None => return,
        };
        self.window.paint_quad(quad(
            bounds,
            Corners::all(px(radius)),
            to_rgba(background),
            Edges::all(px(border_width)),
            to_rgba(self.style.color),
            BorderStyle::default(),
        ));
    }

    fn end_fill(&mut self) {
        self.fill = None;
    }
}

fn is_finite(pt: ScreenPoint) -> bool {
    pt.x.is_finite() && pt.y.is_finite()
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
