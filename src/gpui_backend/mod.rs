//! GPUI integration for quickplot.
//!
//! This module provides a GPUI view that paints the layers of a
//! [`QuickPlot`](crate::plot::QuickPlot) onto a window.

mod paint;
mod view;

pub use view::{QuickPlotHandle, QuickPlotView};
