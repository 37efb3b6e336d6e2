//! Secant method.

use serde::Serialize;

use crate::{SolveOptions, DERIVATIVE_EPS};

/// One secant iteration: the two window points and the new estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecantStep {
    pub x0: f64,
    pub x1: f64,
    pub x2: f64,
}

/// Run the secant method from the window `(x0, x1)`, recording every
/// iteration. Function values are cached across the window shift, so each
/// iteration costs one evaluation of `f`.
///
/// When `|f(x1) - f(x0)|` drops below the zero threshold (a flat secant)
/// the trace records a final `{x0, x1, x2: x1}` step and stops.
pub fn secant<F>(f: F, mut x0: f64, mut x1: f64, opts: SolveOptions) -> Vec<SecantStep>
where
    F: Fn(f64) -> f64,
{
    let mut steps = Vec::new();
    let mut f_x0 = f(x0);
    let mut f_x1 = f(x1);

    for _ in 0..opts.max_iterations {
        if (f_x1 - f_x0).abs() < DERIVATIVE_EPS {
            steps.push(SecantStep { x0, x1, x2: x1 });
            return steps;
        }

        let x2 = x1 - f_x1 * (x1 - x0) / (f_x1 - f_x0);
        steps.push(SecantStep { x0, x1, x2 });

        if (x2 - x1).abs() < opts.tolerance {
            return steps;
        }

        x0 = x1;
        f_x0 = f_x1;
        x1 = x2;
        f_x1 = f(x1);
    }
    steps
}
