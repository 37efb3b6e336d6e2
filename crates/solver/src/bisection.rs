//! Bisection method.

use serde::Serialize;

use crate::SolveOptions;

/// One bisection iteration: the bracket `[a, b]` and its midpoint `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BisectionStep {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Run bisection on `[a, b]`, recording every iteration.
///
/// Convergence is the signed width check `b - a < tolerance`, so callers
/// are expected to pass `a < b`; a reversed bracket terminates after one
/// recorded step. No sign-change precondition is enforced: without a
/// bracketed root the trace simply walks toward one end, which is exactly
/// what the visualizer shows.
pub fn bisection<F>(f: F, mut a: f64, mut b: f64, opts: SolveOptions) -> Vec<BisectionStep>
where
    F: Fn(f64) -> f64,
{
    let mut steps = Vec::new();
    for _ in 0..opts.max_iterations {
        let c = (a + b) / 2.0;
        steps.push(BisectionStep { a, b, c });
        if b - a < opts.tolerance {
            return steps;
        }
        if f(a) * f(c) < 0.0 {
            b = c;
        } else {
            a = c;
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn finds_the_root_of_a_quadratic() {
        let steps = bisection(|x| x * x - 4.0, 0.0, 5.0, SolveOptions::default());
        let last = steps.last().unwrap();
        assert!((last.c - 2.0).abs() < 1e-4);
        assert!(last.b - last.a < SolveOptions::default().tolerance);
    }

    #[test]
    fn every_recorded_c_is_the_bracket_midpoint() {
        let steps = bisection(|x| x - 1.0, 0.0, 5.0, SolveOptions::default());
        for step in &steps {
            assert_eq!(step.c, (step.a + step.b) / 2.0);
        }
    }

    #[test]
    fn iteration_cap_bounds_the_trace() {
        let opts = SolveOptions {
            tolerance: 0.0,
            max_iterations: 7,
        };
        let steps = bisection(|x| x - 1.0, 0.0, 5.0, opts);
        assert_eq!(steps.len(), 7);
    }

    #[test]
    fn reversed_bracket_terminates_after_one_step() {
        // The width check is signed, so b - a < tol holds immediately.
        let steps = bisection(|x| x - 1.0, 5.0, 0.0, SolveOptions::default());
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].c, 2.5);
    }

    #[test]
    fn step_serializes_with_the_wire_field_names() {
        let step = BisectionStep {
            a: 0.0,
            b: 1.0,
            c: 0.5,
        };
        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json, serde_json::json!({ "a": 0.0, "b": 1.0, "c": 0.5 }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for a line with its root strictly inside the bracket,
        /// the trace converges to the root within the tolerance.
        #[test]
        fn converges_on_bracketed_linear_roots(root in -9.0f64..9.0) {
            let opts = SolveOptions::default();
            let steps = bisection(|x| x - root, -10.0, 10.0, opts);
            let last = steps.last().unwrap();
            prop_assert!((last.c - root).abs() <= opts.tolerance);
        }

        /// Property: the bracket never widens from one step to the next.
        #[test]
        fn bracket_width_is_monotonically_nonincreasing(root in -9.0f64..9.0) {
            let steps = bisection(|x| x - root, -10.0, 10.0, SolveOptions::default());
            for pair in steps.windows(2) {
                prop_assert!(pair[1].b - pair[1].a <= pair[0].b - pair[0].a);
            }
        }
    }
}
