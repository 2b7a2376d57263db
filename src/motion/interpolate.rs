use thiserror::Error;

/// Values that can be blended linearly between two endpoints.
/// `t = 0.0` returns `from`, `t = 1.0` returns `to`.
pub trait Animatable: Clone + PartialEq {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self;
}

impl Animatable for f64 {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round().clamp(0.0, 255.0),
            self.g.round().clamp(0.0, 255.0),
            self.b.round().clamp(0.0, 255.0),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

impl Animatable for Rgba {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Rgba {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

/// `inset(top right bottom left)` clip region, each side in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Inset {
    pub const NONE: Self = Self::right(0.0);

    pub const fn right(percent: f64) -> Self {
        Self {
            top: 0.0,
            right: percent,
            bottom: 0.0,
            left: 0.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "inset({}% {}% {}% {}%)",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Animatable for Inset {
    fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Inset {
            top: from.top + (to.top - from.top) * t,
            right: from.right + (to.right - from.right) * t,
            bottom: from.bottom + (to.bottom - from.bottom) * t,
            left: from.left + (to.left - from.left) * t,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("a curve needs at least one control point")]
    Empty,
    #[error("control point {index} has a non-finite input")]
    NonFinite { index: usize },
    #[error("control point {index} input {input} is below the previous input {previous}")]
    Decreasing {
        index: usize,
        input: f64,
        previous: f64,
    },
    #[error("{inputs} inputs paired with {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
}

/// Piecewise-linear curve through `(input, output)` control points.
///
/// Inputs are non-decreasing. Sampling below the first input or above the
/// last returns that boundary's output, and sampling exactly at a control
/// point's input returns its output unchanged. When several points share an
/// input, sampling at it returns the last of them, like framer-motion's
/// `interpolate`.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoints<T> {
    points: Vec<(f64, T)>,
}

impl<T: Animatable> ControlPoints<T> {
    pub fn new(points: Vec<(f64, T)>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, (input, _)) in points.iter().enumerate() {
            if !input.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 {
                let previous = points[index - 1].0;
                if *input < previous {
                    return Err(CurveError::Decreasing {
                        index,
                        input: *input,
                        previous,
                    });
                }
            }
        }
        Ok(Self { points })
    }

    /// Pairs `inputs` with `outputs` position by position.
    pub fn from_slices(inputs: &[f64], outputs: &[T]) -> Result<Self, CurveError> {
        if inputs.len() != outputs.len() {
            return Err(CurveError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        Self::new(inputs.iter().copied().zip(outputs.iter().cloned()).collect())
    }

    pub fn first(&self) -> &T {
        &self.points[0].1
    }

    pub fn sample(&self, progress: f64) -> T {
        let (first_input, first_output) = &self.points[0];
        if progress.is_nan() || progress < *first_input {
            return first_output.clone();
        }
        let (last_input, last_output) = &self.points[self.points.len() - 1];
        if progress >= *last_input {
            return last_output.clone();
        }

        // First segment that ends past `progress`. A hit on a control point
        // lands on the segment it starts, so its output comes back unblended.
        for pair in self.points.windows(2) {
            let (a_in, a_out) = &pair[0];
            let (b_in, b_out) = &pair[1];
            if progress < *b_in {
                if progress == *a_in {
                    return a_out.clone();
                }
                return T::lerp(a_out, b_out, (progress - a_in) / (b_in - a_in));
            }
        }
        last_output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity_curve() -> ControlPoints<f64> {
        ControlPoints::from_slices(&[0.0, 0.2, 0.9, 1.0], &[0.0, 1.0, 1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_exact_at_break_points() {
        let curve =
            ControlPoints::from_slices(&[0.0, 0.3, 0.3, 0.7, 1.0], &[5.0, -2.0, 8.0, 3.5, 0.25])
                .unwrap();
        assert_eq!(curve.sample(0.0), 5.0);
        assert_eq!(curve.sample(0.7), 3.5);
        assert_eq!(curve.sample(1.0), 0.25);
        // Duplicate input resolves to the last point carrying it.
        assert_eq!(curve.sample(0.3), 8.0);
    }

    #[test]
    fn test_clamps_outside_range() {
        let curve = opacity_curve();
        assert_eq!(curve.sample(-3.0), 0.0);
        assert_eq!(curve.sample(1.5), 1.0);
        assert_eq!(curve.sample(f64::NAN), 0.0);
    }

    #[test]
    fn test_opacity_example() {
        let curve = opacity_curve();
        let mid = curve.sample(0.1);
        assert!(mid > 0.0 && mid < 1.0, "got {}", mid);
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(curve.sample(0.95), 1.0);
    }

    #[test]
    fn test_after_duplicate_input_uses_later_segment() {
        let curve = ControlPoints::from_slices(&[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 10.0, 20.0])
            .unwrap();
        assert!((curve.sample(0.75) - 15.0).abs() < 1e-9);
        assert!((curve.sample(0.25) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_first_input_starts_on_later_point() {
        let curve = ControlPoints::from_slices(&[0.0, 0.0, 1.0], &[3.0, 5.0, 9.0]).unwrap();
        assert_eq!(curve.sample(-1.0), 3.0);
        assert_eq!(curve.sample(0.0), 5.0);
        assert!((curve.sample(0.5) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_mismatched_slices() {
        assert_eq!(
            ControlPoints::from_slices(&[0.0, 0.5, 1.0], &[0.0, 1.0]),
            Err(CurveError::LengthMismatch { inputs: 3, outputs: 2 })
        );
        assert_eq!(
            ControlPoints::<f64>::from_slices(&[0.0], &[0.0, 1.0]),
            Err(CurveError::LengthMismatch { inputs: 1, outputs: 2 })
        );
    }

    #[test]
    fn test_single_point_is_constant() {
        let curve = ControlPoints::new(vec![(0.4, 7.0)]).unwrap();
        assert_eq!(curve.sample(0.0), 7.0);
        assert_eq!(curve.sample(0.4), 7.0);
        assert_eq!(curve.sample(9.0), 7.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert_eq!(ControlPoints::<f64>::new(vec![]), Err(CurveError::Empty));
        assert_eq!(
            ControlPoints::new(vec![(0.0, 0.0), (f64::INFINITY, 1.0)]),
            Err(CurveError::NonFinite { index: 1 })
        );
        assert_eq!(
            ControlPoints::new(vec![(0.5, 0.0), (0.2, 1.0)]),
            Err(CurveError::Decreasing {
                index: 1,
                input: 0.2,
                previous: 0.5
            })
        );
    }

    #[test]
    fn test_color_interpolates_per_channel() {
        let curve = ControlPoints::from_slices(
            &[0.0, 100.0],
            &[Rgba::new(17.0, 24.0, 39.0, 0.0), Rgba::new(17.0, 24.0, 39.0, 0.7)],
        )
        .unwrap();
        let mid = curve.sample(50.0);
        assert_eq!(mid.r, 17.0);
        assert_eq!(mid.g, 24.0);
        assert_eq!(mid.b, 39.0);
        assert!((mid.a - 0.35).abs() < 1e-9);
        assert_eq!(curve.sample(50.0).to_css(), "rgba(17, 24, 39, 0.35)");
    }

    #[test]
    fn test_inset_css() {
        let curve = ControlPoints::from_slices(&[0.0, 0.2], &[Inset::right(100.0), Inset::NONE])
            .unwrap();
        assert_eq!(curve.sample(0.0).to_css(), "inset(0% 100% 0% 0%)");
        assert_eq!(curve.sample(0.1).to_css(), "inset(0% 50% 0% 0%)");
        assert_eq!(curve.sample(1.0).to_css(), "inset(0% 0% 0% 0%)");
    }
}
