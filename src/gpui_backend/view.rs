use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{Window, canvas, div};

use crate::plot::QuickPlot;

use super::paint::{GpuiPainter, to_hsla};

/// A GPUI view that paints the layers of a [`QuickPlot`].
///
/// The background comes from the plot options; layers paint bottom to top in
/// creation order. Layer commands are relative to the top-left corner of the
/// view. GPUI always antialiases, so the `antialias` option is not consulted.
#[derive(Clone)]
pub struct QuickPlotView {
    plot: Arc<RwLock<QuickPlot>>,
}

impl QuickPlotView {
    /// Create a view for the given plot.
    pub fn new(plot: QuickPlot) -> Self {
        Self {
            plot: Arc::new(RwLock::new(plot)),
        }
    }

    /// Get a handle for drawing on the plot after the view is created.
    pub fn plot_handle(&self) -> QuickPlotHandle {
        QuickPlotHandle {
            plot: Arc::clone(&self.plot),
        }
    }
}

impl Render for QuickPlotView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let background = self.plot.read().expect("plot lock").options().background;

        div().size_full().bg(to_hsla(background)).child(
            canvas(
                |_, _, _| {},
                move |bounds, _, window, _| {
                    let plot = plot.read().expect("plot lock");
                    let mut painter = GpuiPainter::new(window, bounds.origin);
                    plot.stage().replay(&mut painter);
                },
            )
            .size_full(),
        )
    }
}

/// Shared access to the plot behind a [`QuickPlotView`].
#[derive(Clone)]
pub struct QuickPlotHandle {
    plot: Arc<RwLock<QuickPlot>>,
}

impl QuickPlotHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&QuickPlot) -> R) -> R {
        let plot = self.plot.read().expect("plot lock");
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback. Call
    /// `cx.notify()` on the view afterwards to repaint.
    pub fn write<R>(&self, f: impl FnOnce(&mut QuickPlot) -> R) -> R {
        let mut plot = self.plot.write().expect("plot lock");
        f(&mut plot)
    }
}
