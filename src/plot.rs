//! Plot entry points and builders.

use tracing::debug;

use crate::error::BoundsError;
use crate::geom::{Point, ScreenPoint};
use crate::layer::Stage;
use crate::render::{Color, Graphics};
use crate::sampling::sample_function;
use crate::style::PlotOptions;
use crate::transform::{Scale, Transform};
use crate::view::{Bounds, BoundsUpdate, Viewport};

/// Layered plot: a user-to-device transform plus named drawing layers.
///
/// Drawing helpers map user coordinates through the current bounds and
/// append device-space commands to a layer. They are no-ops when the layer
/// does not exist or when no valid bounds have been accepted yet. Commands
/// already recorded are never re-mapped when the bounds change.
#[derive(Debug, Clone)]
pub struct QuickPlot {
    options: PlotOptions,
    transform: Transform,
    stage: Stage,
}

impl QuickPlot {
    /// Create a plot for a fixed viewport with default options.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            options: PlotOptions::default(),
            transform: Transform::new(viewport),
            stage: Stage::new(),
        }
    }

    /// Start building a plot with custom configuration.
    pub fn builder(viewport: Viewport) -> QuickPlotBuilder {
        QuickPlotBuilder::new(viewport)
    }

    /// Access the surface options.
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Access the coordinate transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.transform.viewport()
    }

    /// Access the bounds in effect.
    pub fn bounds(&self) -> Option<Bounds> {
        self.transform.bounds()
    }

    /// Access the scale in effect.
    pub fn scale(&self) -> Option<Scale> {
        self.transform.scale()
    }

    /// Access the root container.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Apply a possibly partial bounds update.
    ///
    /// See [`Transform::set_bounds`]. On error the previous bounds and scale
    /// stay in effect.
    pub fn set_bounds(&mut self, update: impl Into<BoundsUpdate>) -> Result<Bounds, BoundsError> {
        let result = self.transform.set_bounds(update);
        match &result {
            Ok(bounds) => debug!(%bounds, scale = ?self.transform.scale(), "bounds updated"),
            Err(err) => debug!(%err, "bounds update rejected"),
        }
        result
    }

    /// Map a user point into device space.
    pub fn to_device(&self, point: impl Into<Point>) -> Option<ScreenPoint> {
        self.transform.to_device(point.into())
    }

    /// Map a device point into user space.
    pub fn to_user(&self, point: ScreenPoint) -> Option<Point> {
        self.transform.to_user(point)
    }

    /// Create a layer on top of the existing ones.
    ///
    /// Returns the layer handle for custom device-space drawing, or `None`
    /// for an empty name. Re-adding a name replaces the old layer.
    pub fn add_layer(&mut self, name: &str) -> Option<&mut Graphics> {
        self.stage.add_layer(name)
    }

    /// Erase everything drawn on a layer. Unknown names are ignored.
    pub fn clear_layer(&mut self, name: &str) {
        self.stage.clear_layer(name);
    }

    /// Look up a layer handle.
    pub fn layer(&self, name: &str) -> Option<&Graphics> {
        self.stage.layer(name)
    }

    /// Look up a layer handle for custom drawing.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Graphics> {
        self.stage.layer_mut(name)
    }

    /// Draw a filled circle at a user point.
    ///
    /// `radius` is in device pixels and does not follow the bounds.
    pub fn add_point(&mut self, layer: &str, point: impl Into<Point>, radius: f32, color: Color) {
        let Some((transform, graphics)) = self.target(layer) else {
            return;
        };
        let Some(center) = transform.to_device(point.into()) else {
            return;
        };
        graphics
            .begin_fill(color)
            .draw_circle(center, radius)
            .end_fill();
    }

    /// Stroke a single segment between two user points.
    pub fn add_line(
        &mut self,
        layer: &str,
        width: f32,
        color: Color,
        start: impl Into<Point>,
        end: impl Into<Point>,
    ) {
        let Some((transform, graphics)) = self.target(layer) else {
            return;
        };
        let (Some(start), Some(end)) = (
            transform.to_device(start.into()),
            transform.to_device(end.into()),
        ) else {
            return;
        };
        graphics
            .line_style(width, color)
            .move_to(start)
            .line_to(end);
    }

    /// Stroke one continuous polyline through `points`.
    ///
    /// Nothing is drawn for fewer than two points. Disconnected strokes take
    /// one call each.
    pub fn add_segments(&mut self, layer: &str, width: f32, color: Color, points: &[Point]) {
        if points.len() < 2 {
            debug!(layer, points = points.len(), "segments need at least two points");
            return;
        }
        let Some((transform, graphics)) = self.target(layer) else {
            return;
        };
        let Some(device) = points
            .iter()
            .map(|point| transform.to_device(*point))
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };
        graphics.line_style(width, color).move_to(device[0]);
        for point in &device[1..] {
            graphics.line_to(*point);
        }
    }

    /// Stroke `y = function(x)` across the current horizontal bounds.
    ///
    /// The function is sampled about every three device pixels with a final
    /// sample exactly on the right edge. Non-finite samples lift the pen; the
    /// next finite sample starts a new sub-path.
    pub fn graph_function(
        &mut self,
        layer: &str,
        width: f32,
        color: Color,
        function: impl Fn(f64) -> f64,
    ) {
        let viewport_width = self.viewport().width;
        let Some((transform, graphics)) = self.target(layer) else {
            return;
        };
        let Some(bounds) = transform.bounds() else {
            return;
        };
        let samples = sample_function(bounds, viewport_width, function);
        if samples.is_empty() {
            return;
        }

        graphics.line_style(width, color);
        let mut pen_down = false;
        for sample in samples {
            let device = if sample.is_finite() {
                transform.to_device(sample)
            } else {
                None
            };
            match device {
                Some(point) if pen_down => {
                    graphics.line_to(point);
                }
                Some(point) => {
                    graphics.move_to(point);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
    }

    fn target(&mut self, layer: &str) -> Option<(&Transform, &mut Graphics)> {
        if !self.transform.is_ready() {
            debug!(layer, "draw skipped: no valid bounds yet");
            return None;
        }
        let Some(graphics) = self.stage.layer_mut(layer) else {
            debug!(layer, "draw skipped: unknown layer");
            return None;
        };
        Some((&self.transform, graphics))
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug)]
pub struct QuickPlotBuilder {
    viewport: Viewport,
    options: PlotOptions,
    bounds: Option<Bounds>,
    layers: Vec<String>,
}

impl QuickPlotBuilder {
    /// Start a builder for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            options: PlotOptions::default(),
            bounds: None,
            layers: Vec::new(),
        }
    }

    /// Set the surface options.
    pub fn options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the initial bounds. Invalid bounds leave the plot uninitialized.
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Create a layer, in order, when the plot is built.
    pub fn layer(mut self, name: impl Into<String>) -> Self {
        self.layers.push(name.into());
        self
    }

    /// Build the plot.
    pub fn build(self) -> QuickPlot {
        let mut plot = QuickPlot {
            options: self.options,
            transform: Transform::new(self.viewport),
            stage: Stage::new(),
        };
        if let Some(bounds) = self.bounds {
            let _ = plot.set_bounds(bounds);
        }
        for name in &self.layers {
            plot.add_layer(name);
        }
        plot
    }
}
