//! Golden-section search (minimization).

use serde::Serialize;

use crate::SolveOptions;

/// One golden-section iteration, in the visualizer's wire layout: `b` and
/// `d` are the interior probes and `[a, c]` is the current bracket.
///
/// The field mapping is a frontend contract (the animation reads
/// `step.b`/`step.d` as probe positions), so it is preserved exactly even
/// though `c` is the *right end*, not a midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoldenStep {
    pub a: f64,
    pub b: f64,
    pub d: f64,
    pub c: f64,
}

/// Minimize `f` on `[a, b]` by golden-section search, recording every
/// iteration. The step is recorded before the width check, so even an
/// already-converged bracket yields one step.
pub fn golden_section<F>(f: F, mut a: f64, mut b: f64, opts: SolveOptions) -> Vec<GoldenStep>
where
    F: Fn(f64) -> f64,
{
    let gr = (5.0f64.sqrt() + 1.0) / 2.0;
    let mut probe_lo = b - (b - a) / gr;
    let mut probe_hi = a + (b - a) / gr;

    let mut steps = Vec::new();
    for _ in 0..opts.max_iterations {
        steps.push(GoldenStep {
            a,
            b: probe_lo,
            d: probe_hi,
            c: b,
        });
        if (b - a).abs() < opts.tolerance {
            return steps;
        }
        if f(probe_lo) < f(probe_hi) {
            b = probe_hi;
        } else {
            a = probe_lo;
        }
        probe_lo = b - (b - a) / gr;
        probe_hi = a + (b - a) / gr;
    }
    steps
}
