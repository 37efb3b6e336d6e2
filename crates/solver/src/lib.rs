//! `optiviz-solver` — 1-D root-finding and optimization kernels.
//!
//! Each kernel returns its full step trace (the records the visualizer
//! animates), not just a final value. The kernels are generic over
//! `F: Fn(f64) -> f64`, so the caller decides whether `f` comes from a
//! parsed expression or from an interpolated dataset. None of them error:
//! a trace that has not converged after `max_iterations` steps is still a
//! valid trace.

pub mod bisection;
pub mod golden;
pub mod interp;
pub mod newton;
pub mod secant;

pub use bisection::{bisection, BisectionStep};
pub use golden::{golden_section, GoldenStep};
pub use interp::{nearest_y, CubicSpline, DataPoint, DatasetError};
pub use newton::{newton_raphson, NewtonStep};
pub use secant::{secant, SecantStep};

/// Threshold below which a denominator counts as zero. Independent of
/// [`SolveOptions::tolerance`].
pub(crate) const DERIVATIVE_EPS: f64 = 1e-15;

/// Stopping criteria shared by all kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Convergence tolerance on the bracket width or step size.
    pub tolerance: f64,
    /// Hard cap on the number of recorded steps.
    pub max_iterations: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

/// Central-difference approximation of `f'`, for data-mode Newton runs
/// where no symbolic derivative exists.
pub fn central_difference<F>(f: F, h: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |x| (f(x + h) - f(x - h)) / (2.0 * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_the_documented_values() {
        let opts = SolveOptions::default();
        assert_eq!(opts.tolerance, 1e-5);
        assert_eq!(opts.max_iterations, 100);
    }

    #[test]
    fn central_difference_approximates_the_derivative() {
        let df = central_difference(|x| x * x, 1e-5);
        assert!((df(3.0) - 6.0).abs() < 1e-6);
    }
}
