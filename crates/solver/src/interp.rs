//! Dataset interpolation.
//!
//! Two deliberately different interpolators, mirroring the two data paths
//! the visualizer exposes: the optimize routes run their kernels over a
//! natural cubic spline through the posted points, while the standalone
//! evaluate endpoint answers with the nearest uploaded point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One `(x, y)` sample of the function being studied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// Rejection reasons for a dataset that cannot back a spline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("data must contain at least two points")]
    TooFewPoints,

    #[error("data contains a non-finite coordinate")]
    NonFinite,

    #[error("data contains duplicate x values (x = {0})")]
    DuplicateX(f64),
}

/// Natural cubic spline through a set of knots.
///
/// Natural end conditions (second derivative zero at both ends), evaluated
/// in cubic-Hermite form from knot slopes. Outside the data range the
/// boundary segment's cubic extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // First derivative at each knot, from the natural-spline tridiagonal
    // system.
    ks: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline through `points`. The input need not be sorted; it is
    /// ordered by `x` internally.
    pub fn new(points: &[DataPoint]) -> Result<Self, DatasetError> {
        if points.len() < 2 {
            return Err(DatasetError::TooFewPoints);
        }
        if points
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(DatasetError::NonFinite);
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|p, q| p.x.total_cmp(&q.x));
        for pair in sorted.windows(2) {
            if pair[0].x == pair[1].x {
                return Err(DatasetError::DuplicateX(pair[0].x));
            }
        }

        let xs: Vec<f64> = sorted.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = sorted.iter().map(|p| p.y).collect();
        let ks = natural_slopes(&xs, &ys);

        Ok(Self { xs, ys, ks })
    }

    /// Interpolated (or boundary-extrapolated) value at `x`.
    pub fn at(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let dx = self.xs[i + 1] - self.xs[i];
        let dy = self.ys[i + 1] - self.ys[i];
        let t = (x - self.xs[i]) / dx;

        let a = self.ks[i] * dx - dy;
        let b = -self.ks[i + 1] * dx + dy;

        (1.0 - t) * self.ys[i] + t * self.ys[i + 1] + t * (1.0 - t) * (a * (1.0 - t) + b * t)
    }

    /// Index of the segment whose cubic evaluates `x`: the last knot at or
    /// below `x`, clamped so out-of-range queries use a boundary segment.
    fn segment(&self, x: f64) -> usize {
        let upper = self.xs.len() - 2;
        match self.xs.binary_search_by(|probe| probe.total_cmp(&x)) {
            Ok(i) => i.min(upper),
            Err(0) => 0,
            Err(i) => (i - 1).min(upper),
        }
    }
}

/// Knot slopes of the natural cubic spline through `(xs, ys)`, by solving
/// the tridiagonal system with the Thomas algorithm.
fn natural_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut sub = vec![0.0; n]; // below the diagonal
    let mut diag = vec![0.0; n];
    let mut sup = vec![0.0; n]; // above the diagonal
    let mut rhs = vec![0.0; n];

    let h0 = xs[1] - xs[0];
    diag[0] = 2.0 / h0;
    sup[0] = 1.0 / h0;
    rhs[0] = 3.0 * (ys[1] - ys[0]) / (h0 * h0);

    for i in 1..n - 1 {
        let h_prev = xs[i] - xs[i - 1];
        let h_next = xs[i + 1] - xs[i];
        sub[i] = 1.0 / h_prev;
        diag[i] = 2.0 * (1.0 / h_prev + 1.0 / h_next);
        sup[i] = 1.0 / h_next;
        rhs[i] = 3.0
            * ((ys[i] - ys[i - 1]) / (h_prev * h_prev)
                + (ys[i + 1] - ys[i]) / (h_next * h_next));
    }

    let h_last = xs[n - 1] - xs[n - 2];
    sub[n - 1] = 1.0 / h_last;
    diag[n - 1] = 2.0 / h_last;
    rhs[n - 1] = 3.0 * (ys[n - 1] - ys[n - 2]) / (h_last * h_last);

    // Thomas algorithm: forward elimination, then back substitution.
    for i in 1..n {
        let m = sub[i] / diag[i - 1];
        diag[i] -= m * sup[i - 1];
        rhs[i] -= m * rhs[i - 1];
    }

    let mut ks = vec![0.0; n];
    ks[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        ks[i] = (rhs[i] - sup[i] * ks[i + 1]) / diag[i];
    }
    ks
}

/// `y` of the point whose `x` is closest to the query. Ties keep the
/// earliest point; an empty dataset has no answer.
pub fn nearest_y(points: &[DataPoint], x: f64) -> Option<f64> {
    let mut best: Option<&DataPoint> = None;
    for point in points {
        match best {
            Some(b) if (point.x - x).abs() < (b.x - x).abs() => best = Some(point),
            None => best = Some(point),
            _ => {}
        }
    }
    best.map(|p| p.y)
}
