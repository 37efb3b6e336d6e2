//! Newton-Raphson method.

use serde::Serialize;

use crate::{SolveOptions, DERIVATIVE_EPS};

/// One Newton iteration: the current point and its update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewtonStep {
    pub x0: f64,
    pub x1: f64,
}

/// Run Newton-Raphson from `x0`, recording every iteration.
///
/// The derivative is supplied by the caller: symbolic in function mode,
/// [`crate::central_difference`] in data mode. When `|df(x0)|` drops below
/// the zero threshold the trace records a final `{x0, x1: x0}` step and
/// stops rather than dividing by zero.
pub fn newton_raphson<F, D>(f: F, df: D, mut x0: f64, opts: SolveOptions) -> Vec<NewtonStep>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut steps = Vec::new();
    for _ in 0..opts.max_iterations {
        let f_x0 = f(x0);
        let df_x0 = df(x0);

        if df_x0.abs() < DERIVATIVE_EPS {
            steps.push(NewtonStep { x0, x1: x0 });
            return steps;
        }

        let x1 = x0 - f_x0 / df_x0;
        steps.push(NewtonStep { x0, x1 });

        if (x1 - x0).abs() < opts.tolerance {
            return steps;
        }
        x0 = x1;
    }
    steps
}
