//! Bézier easing curves.
//!
//! A [`BezierCurve`] turns a two-control-point easing definition into a
//! time→progress function. The curve is sampled once, at construction, into a
//! piecewise-linear approximation whose samples are strictly increasing in
//! `x`; lookups then interpolate linearly between the two samples that
//! bracket the requested time.
//!
//! # Example
//!
//! ```
//! use horizon_carousel::widget::animation::BezierCurve;
//!
//! // CSS `ease-in-out-sine`
//! let curve = BezierCurve::new(0.445, 0.05, 0.55, 0.95).unwrap();
//!
//! assert_eq!(curve.progress_at(0.0).unwrap(), 0.0);
//! assert_eq!(curve.progress_at(1.0).unwrap(), 1.0);
//! assert!((curve.progress_at(0.5).unwrap() - 0.5).abs() < 0.02);
//! ```

use horizon_carousel_core::logging::{PerfSpan, span_names, targets};

use crate::error::{CarouselError, Result};

use super::easing::EasingPreset;

/// A point on (or controlling) a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The curve start, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// The curve end, `(1, 1)`.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Produces piecewise-linear approximations of quadratic and cubic curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSampler {
    smoothness: f64,
}

impl CurveSampler {
    /// Smallest accepted parameter step. Caps a curve at about a million samples.
    pub const MIN_SMOOTHNESS: f64 = 1e-6;

    /// Create a sampler stepping the curve parameter by `smoothness`.
    ///
    /// Fails unless `0 < smoothness < 1`, and also below
    /// [`MIN_SMOOTHNESS`](Self::MIN_SMOOTHNESS).
    pub fn new(smoothness: f64) -> Result<Self> {
        if !(smoothness > 0.0 && smoothness < 1.0) {
            return Err(CarouselError::invalid_argument(format!(
                "smoothness must be between 0 and 1 (both exclusive), got {smoothness}"
            )));
        }
        if smoothness < Self::MIN_SMOOTHNESS {
            return Err(CarouselError::invalid_argument(format!(
                "smoothness {smoothness} is below the minimum step {}",
                Self::MIN_SMOOTHNESS
            )));
        }
        Ok(Self { smoothness })
    }

    /// The parameter step.
    #[inline]
    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Sample the curve defined by three (quadratic) or four (cubic) points.
    ///
    /// The curve is evaluated at `t = 0, s, 2s, ...` while `t < 1`, and the
    /// terminal point `(1, 1)` is appended. Evaluated points that do not move
    /// strictly right of the previous sample, or that reach `x = 1` before the
    /// terminal point, are dropped, so the result is strictly increasing in `x`.
    #[tracing::instrument(skip(self), target = "horizon_carousel::bezier", level = "trace")]
    pub fn sample(&self, control_points: &[Point2D]) -> Result<Vec<Point2D>> {
        let evaluate: fn(&[Point2D], f64) -> Point2D = match control_points.len() {
            3 => quadratic_point,
            4 => cubic_point,
            n => {
                return Err(CarouselError::invalid_argument(format!(
                    "a curve needs 3 or 4 control points, got {n}"
                )));
            }
        };
        if let Some(bad) = control_points.iter().find(|p| !p.is_finite()) {
            return Err(CarouselError::invalid_argument(format!(
                "control point ({}, {}) is not finite",
                bad.x, bad.y
            )));
        }

        let samples = self.trace(evaluate, control_points);
        tracing::trace!(
            target: targets::BEZIER,
            sample_count = samples.len(),
            "curve sampled"
        );
        Ok(samples)
    }

    /// Sampling loop over already validated control points.
    fn trace(
        &self,
        evaluate: fn(&[Point2D], f64) -> Point2D,
        control_points: &[Point2D],
    ) -> Vec<Point2D> {
        let capacity = (1.0 / self.smoothness).ceil() as usize + 1;
        let mut samples: Vec<Point2D> = Vec::with_capacity(capacity);
        let mut step: u64 = 0;
        loop {
            let t = step as f64 * self.smoothness;
            if t >= 1.0 {
                break;
            }
            let point = evaluate(control_points, t);
            if samples.last().is_none_or(|last| point.x > last.x) {
                samples.push(point);
            }
            step += 1;
        }

        while samples.last().is_some_and(|last| last.x >= Point2D::UNIT.x) {
            samples.pop();
        }
        samples.push(Point2D::UNIT);
        samples
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self {
            smoothness: BezierCurve::DEFAULT_SMOOTHNESS,
        }
    }
}

/// `B(t) = P0(1-t)² + 2·P1·t(1-t) + P2·t²`
fn quadratic_point(points: &[Point2D], t: f64) -> Point2D {
    let (p0, p1, p2) = (points[0], points[1], points[2]);
    let inverse = 1.0 - t;
    let a = inverse * inverse;
    let b = 2.0 * t * inverse;
    let c = t * t;
    Point2D::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// `B(t) = P0(1-t)³ + 3·P1·t(1-t)² + 3·P2·t²(1-t) + P3·t³`
fn cubic_point(points: &[Point2D], t: f64) -> Point2D {
    let (p0, p1, p2, p3) = (points[0], points[1], points[2], points[3]);
    let inverse = 1.0 - t;
    let inverse_sq = inverse * inverse;
    let a = inverse_sq * inverse;
    let b = 3.0 * t * inverse_sq;
    let c = 3.0 * t * t * inverse;
    let d = t * t * t;
    Point2D::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// A cubic easing curve from `(0, 0)` to `(1, 1)`, like CSS `cubic-bezier()`.
///
/// Immutable once built. To change the easing, build a new curve.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    smoothness: f64,
    samples: Vec<Point2D>,
}

impl BezierCurve {
    /// Parameter step used by [`new`](Self::new).
    pub const DEFAULT_SMOOTHNESS: f64 = 0.07;

    /// Build a curve with control points `(x1, y1)` and `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        Self::with_smoothness(x1, y1, x2, y2, Self::DEFAULT_SMOOTHNESS)
    }

    /// Build a curve with an explicit sampling step.
    pub fn with_smoothness(x1: f64, y1: f64, x2: f64, y2: f64, smoothness: f64) -> Result<Self> {
        let _span = PerfSpan::new(span_names::CURVE_SAMPLING);
        let sampler = CurveSampler::new(smoothness)?;
        let samples = sampler.sample(&[
            Point2D::ORIGIN,
            Point2D::new(x1, y1),
            Point2D::new(x2, y2),
            Point2D::UNIT,
        ])?;

        tracing::debug!(
            target: targets::BEZIER,
            x1, y1, x2, y2, smoothness,
            sample_count = samples.len(),
            "built easing curve"
        );
        Ok(Self {
            smoothness,
            samples,
        })
    }

    /// Build the curve for an easing preset with the default smoothness.
    pub fn from_preset(preset: EasingPreset) -> Result<Self> {
        Self::new(preset.x1, preset.y1, preset.x2, preset.y2)
    }

    /// The sampling step this curve was built with.
    #[inline]
    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// The piecewise-linear approximation, strictly increasing in `x`.
    #[inline]
    pub fn samples(&self) -> &[Point2D] {
        &self.samples
    }

    /// Map a time fraction in `[0, 1]` to animation progress.
    ///
    /// Progress may leave `[0, 1]` for overshooting curves such as
    /// `easeInOutBack`. Fails for times outside `[0, 1]`.
    pub fn progress_at(&self, time: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&time) {
            return Err(CarouselError::invalid_argument(format!(
                "time must be between 0 and 1, got {time}"
            )));
        }

        let (c1, c2) = self
            .samples
            .windows(2)
            .find(|pair| time >= pair[0].x && time <= pair[1].x)
            .or_else(|| self.samples.windows(2).last())
            .map(|pair| (pair[0], pair[1]))
            .ok_or_else(|| CarouselError::invalid_argument("curve has fewer than two samples"))?;

        let span = c2.x - c1.x;
        if span <= 0.0 {
            return Err(CarouselError::invalid_argument(format!(
                "degenerate curve segment at x = {}",
                c1.x
            )));
        }

        Ok((c2.y * (time - c1.x) + c1.y * (c2.x - time)) / span)
    }
}

impl Default for BezierCurve {
    /// The default easing (`easeInOutBack`) at the default smoothness.
    fn default() -> Self {
        let preset = EasingPreset::default();
        let sampler = CurveSampler::default();
        let samples = sampler.trace(
            cubic_point,
            &[
                Point2D::ORIGIN,
                Point2D::new(preset.x1, preset.y1),
                Point2D::new(preset.x2, preset.y2),
                Point2D::UNIT,
            ],
        );
        Self {
            smoothness: sampler.smoothness,
            samples,
        }
    }
}

static_assertions::assert_impl_all!(BezierCurve: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::Easing;

    #[test]
    fn test_minimum_smoothness() {
        let err = BezierCurve::with_smoothness(0.25, 0.1, 0.25, 1.0, 1e-300).unwrap_err();
        assert!(err.is_invalid_argument());

        let sampler = CurveSampler::new(CurveSampler::MIN_SMOOTHNESS).unwrap();
        assert_eq!(sampler.smoothness(), CurveSampler::MIN_SMOOTHNESS);
    }

    #[test]
    fn test_invalid_smoothness() {
        for smoothness in [0.0, 1.0, 1.5, -0.2, f64::NAN, 1e-300, 5e-7] {
            let err = CurveSampler::new(smoothness).unwrap_err();
            assert!(err.is_invalid_argument(), "{smoothness} should be rejected");
            assert!(BezierCurve::with_smoothness(0.25, 0.1, 0.25, 1.0, smoothness).is_err());
        }
    }

    #[test]
    fn test_sample_requires_three_or_four_points() {
        let sampler = CurveSampler::default();
        assert!(sampler.sample(&[]).is_err());
        assert!(sampler.sample(&[Point2D::ORIGIN, Point2D::UNIT]).is_err());
        assert!(sampler.sample(&[Point2D::ORIGIN; 5]).is_err());
    }

    #[test]
    fn test_sample_rejects_non_finite_points() {
        let sampler = CurveSampler::default();
        let points = [Point2D::ORIGIN, Point2D::new(f64::NAN, 0.5), Point2D::UNIT];
        assert!(sampler.sample(&points).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_samples_span_unit_interval() {
        for smoothness in [0.01, 0.07, 0.25, 0.5, 0.99] {
            let curve = BezierCurve::with_smoothness(0.25, 0.1, 0.25, 1.0, smoothness).unwrap();
            let samples = curve.samples();
            assert_eq!(samples.first().unwrap().x, 0.0);
            assert_eq!(*samples.last().unwrap(), Point2D::UNIT);
            assert!(samples.windows(2).all(|pair| pair[0].x < pair[1].x));
        }
    }

    #[test]
    fn test_quadratic_sampling() {
        // Control point on the diagonal: the quadratic is the line y = x
        let sampler = CurveSampler::new(0.1).unwrap();
        let samples = sampler
            .sample(&[Point2D::ORIGIN, Point2D::new(0.5, 0.5), Point2D::UNIT])
            .unwrap();

        assert_eq!(samples.len(), 11);
        for sample in &samples {
            assert!((sample.x - sample.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_quadratic_midpoint() {
        let sampler = CurveSampler::new(0.5).unwrap();
        let samples = sampler
            .sample(&[Point2D::ORIGIN, Point2D::new(1.0, 0.0), Point2D::UNIT])
            .unwrap();

        // t = 0.5: x = 2·0.5·0.5·1 + 0.25 = 0.75, y = 0.25
        assert_eq!(samples, vec![Point2D::ORIGIN, Point2D::new(0.75, 0.25), Point2D::UNIT]);
    }

    #[test]
    fn test_endpoints_for_every_preset() {
        for easing in Easing::ALL {
            let curve = BezierCurve::from_preset(easing.preset()).unwrap();
            assert_eq!(curve.progress_at(0.0).unwrap(), 0.0, "{easing}");
            assert_eq!(curve.progress_at(1.0).unwrap(), 1.0, "{easing}");
        }
    }

    #[test]
    fn test_diagonal_control_points_are_near_identity() {
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let curve = BezierCurve::new(t, t, t, t).unwrap();
            for time in [0.0, 0.1, 0.33, 0.5, 0.77, 0.95, 1.0] {
                let progress = curve.progress_at(time).unwrap();
                assert!((progress - time).abs() < 1e-9, "t={t} time={time} got {progress}");
            }
        }
    }

    #[test]
    fn test_ease_in_out_sine_crosses_midpoint() {
        let curve = BezierCurve::from_preset(Easing::EaseInOutSine.preset()).unwrap();
        let progress = curve.progress_at(0.5).unwrap();
        assert!((progress - 0.5).abs() < 0.02, "got {progress}");
    }

    #[test]
    fn test_ease_in_is_slow_at_start() {
        let curve = BezierCurve::from_preset(Easing::EaseInCubic.preset()).unwrap();
        assert!(curve.progress_at(0.3).unwrap() < 0.3);

        let curve = BezierCurve::from_preset(Easing::EaseOutCubic.preset()).unwrap();
        assert!(curve.progress_at(0.3).unwrap() > 0.3);
    }

    #[test]
    fn test_back_easing_overshoots() {
        let curve = BezierCurve::from_preset(Easing::EaseInOutBack.preset()).unwrap();
        let samples = curve.samples();
        assert!(samples.iter().any(|p| p.y < 0.0));
        assert!(samples.iter().any(|p| p.y > 1.0));
    }

    #[test]
    fn test_default_curve_matches_default_preset() {
        let built = BezierCurve::from_preset(EasingPreset::default()).unwrap();
        assert_eq!(BezierCurve::default(), built);
    }

    #[test]
    fn test_progress_rejects_out_of_range_time() {
        let curve = BezierCurve::from_preset(EasingPreset::default()).unwrap();
        assert!(curve.progress_at(-0.1).unwrap_err().is_invalid_argument());
        assert!(curve.progress_at(1.1).unwrap_err().is_invalid_argument());
        assert!(curve.progress_at(f64::NAN).is_err());
    }

    #[test]
    fn test_progress_interpolates_between_samples() {
        let curve = BezierCurve::from_preset(Easing::EaseOutQuad.preset()).unwrap();
        let samples = curve.samples();
        let (a, b) = (samples[2], samples[3]);
        let mid = (a.x + b.x) / 2.0;
        let expected = (a.y + b.y) / 2.0;
        assert!((curve.progress_at(mid).unwrap() - expected).abs() < 1e-12);
        assert!((curve.progress_at(a.x).unwrap() - a.y).abs() < 1e-12);
    }
}
