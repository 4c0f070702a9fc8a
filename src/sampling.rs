//! Uniform-step sampling of `y = f(x)` across the plot bounds.

use tracing::trace;

use crate::geom::Point;
use crate::view::Bounds;

/// Device pixels between consecutive samples.
pub const PIXELS_PER_SAMPLE: f64 = 3.0;

/// Sample `function` across `[bounds.left, bounds.right]`.
///
/// The step is `(right - left) / (width / 3)`, roughly one sample every three
/// device pixels. Starting at `left`, the step is added repeatedly while `x`
/// is below `right`, so the last stepped sample may overshoot. A final sample
/// at exactly `right` is always appended.
///
/// The stepped walk is capped at `ceil(width / 3) + 1` samples, which also
/// ends walks whose step is too small to advance `x`. Samples are returned as
/// computed, including non-finite `y` values.
pub fn sample_function(bounds: Bounds, width: u32, function: impl Fn(f64) -> f64) -> Vec<Point> {
    let steps = width as f64 / PIXELS_PER_SAMPLE;
    let step = bounds.width() / steps;
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }

    let max_steps = steps.ceil() as usize + 1;
    let mut samples = Vec::with_capacity(max_steps + 2);
    let mut x = bounds.left;
    samples.push(Point::new(x, function(x)));
    let mut taken = 0;
    while x < bounds.right && taken < max_steps {
        x += step;
        samples.push(Point::new(x, function(x)));
        taken += 1;
    }
    samples.push(Point::new(bounds.right, function(bounds.right)));

    trace!(step, samples = samples.len(), "sampled function");
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Bounds {
        Bounds::new(-5.0, 5.0, 5.0, -5.0)
    }

    #[test]
    fn samples_every_three_pixels_and_ends_on_the_right_edge() {
        let samples = sample_function(domain(), 300, |x| 0.1 * x * x + 1.0);
        assert!((102..=103).contains(&samples.len()), "got {}", samples.len());
        assert_eq!(samples[0], Point::new(-5.0, 3.5));
        let step = samples[1].x - samples[0].x;
        assert!((step - 0.1).abs() < 1e-12);
        let last = samples[samples.len() - 1];
        assert_eq!(last.x, 5.0);
        assert!((last.y - 3.5).abs() < 1e-12);
    }

    #[test]
    fn stepped_walk_reaches_or_passes_the_right_edge() {
        let samples = sample_function(domain(), 300, |x| x);
        let before_final = samples[samples.len() - 2];
        assert!(before_final.x >= 5.0 - 1e-9);
    }

    #[test]
    fn zero_width_viewport_samples_nothing() {
        assert!(sample_function(domain(), 0, |x| x).is_empty());
    }

    #[test]
    fn non_advancing_step_is_capped() {
        let left = 1e300_f64;
        let right = f64::from_bits(left.to_bits() + 1);
        let samples = sample_function(Bounds::new(left, 1.0, right, 0.0), 30, |x| x);
        assert_eq!(samples.len(), 13);
        assert_eq!(samples[samples.len() - 1].x, right);
    }

    #[test]
    fn non_finite_values_are_kept() {
        let samples = sample_function(domain(), 30, |x| 1.0 / x);
        assert!(samples.iter().all(|p| p.x.is_finite()));
        assert_eq!(samples.len(), 12);
    }
}
