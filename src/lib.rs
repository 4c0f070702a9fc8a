//! quickplot maps a rectangular user-space domain onto a fixed-size device
//! viewport and draws points, lines, polylines and sampled functions into
//! named, independently clearable layers.
//!
//! Layers record device-space commands. Any backend can consume them through
//! [`PathSink`]; the [`gpui_backend`] paints them into a GPUI window.

#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod gpui_backend;
pub mod layer;
pub mod plot;
pub mod render;
pub mod sampling;
pub mod style;
pub mod transform;
pub mod view;

pub use error::{BoundsError, ColorParseError, ConfigError};
pub use geom::{Point, ScreenPoint};
pub use gpui_backend::{QuickPlotHandle, QuickPlotView};
pub use layer::Stage;
pub use plot::{QuickPlot, QuickPlotBuilder};
pub use render::{Color, Graphics, LineStyle, PathSink, RenderCommand, replay};
pub use style::PlotOptions;
pub use transform::{Scale, Transform};
pub use view::{Bounds, BoundsUpdate, Viewport};
