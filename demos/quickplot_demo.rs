use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quickplot::{Bounds as PlotBounds, Color, Point, QuickPlot, QuickPlotView, Viewport};

const WIDTH: u32 = 300;
const HEIGHT: u32 = 300;

const LINE: &str = "line";
const FUNCTION: &str = "function";
const POINTS: &str = "points";
const LINE_SEGMENTS: &str = "line_segments";

fn build_plot() -> QuickPlot {
    let mut plot = QuickPlot::builder(Viewport::new(WIDTH, HEIGHT))
        .bounds(PlotBounds::new(-5.0, 5.0, 5.0, -5.0))
        .layer(LINE)
        .layer(FUNCTION)
        .layer(POINTS)
        .layer(LINE_SEGMENTS)
        .build();

    plot.add_line(LINE, 2.0, Color::from_rgb_hex(0x0000ff), (0.0, 0.0), (3.0, 5.0));

    let segments = [
        Point::new(-5.0, -5.0),
        Point::new(-1.0, 2.0),
        Point::new(1.0, -2.0),
        Point::new(5.0, 5.0),
    ];
    plot.add_segments(LINE_SEGMENTS, 2.0, Color::from_rgb_hex(0x00ff00), &segments);

    let red = Color::from_rgb_hex(0xff0000);
    for (x, y) in [
        (-2.0, 0.0),
        (-4.0, 1.0),
        (-1.0, 4.0),
        (2.0, 0.0),
        (3.0, -4.0),
        (4.0, 1.0),
        (4.5, 2.0),
        (2.5, -4.0),
    ] {
        plot.add_point(POINTS, (x, y), 3.0, red);
    }

    plot.graph_function(FUNCTION, 2.0, Color::from_rgb_hex(0xffff00), |x| {
        0.1 * x * x + 1.0
    });
    plot
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "quickplot=debug".into()))
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(WIDTH as f32), px(HEIGHT as f32)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let view = QuickPlotView::new(build_plot());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
