use serde::Deserialize;

use optiviz_solver::{DataPoint, SolveOptions};

// -------------------------
// Request DTOs
// -------------------------

/// Body of the `/api/optimize/*` routes, in the camelCase layout the
/// frontend sends. `initialGuess` stays untyped here because its shape
/// differs per route: `{a, b}` for the bracketing methods, `{x0, x1}` for
/// secant, a bare number for Newton-Raphson.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub optimization_type: Option<String>,
    pub expression: Option<String>,
    pub initial_guess: Option<serde_json::Value>,
    pub data: Option<Vec<DataPoint>>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl OptimizeRequest {
    /// The expression, with an empty string counting as absent.
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref().filter(|s| !s.is_empty())
    }

    /// Stopping criteria, with per-field fallback to the solver defaults.
    pub fn options(&self) -> SolveOptions {
        let defaults = SolveOptions::default();
        SolveOptions {
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
        }
    }

    /// `initialGuess` read as a bracket `{a, b}`.
    pub fn bracket_guess(&self) -> Option<(f64, f64)> {
        let guess = self.initial_guess.as_ref()?;
        Some((field_f64(guess, "a")?, field_f64(guess, "b")?))
    }

    /// `initialGuess` read as a secant window `{x0, x1}`.
    pub fn window_guess(&self) -> Option<(f64, f64)> {
        let guess = self.initial_guess.as_ref()?;
        Some((field_f64(guess, "x0")?, field_f64(guess, "x1")?))
    }

    /// `initialGuess` read as a bare number.
    pub fn scalar_guess(&self) -> Option<f64> {
        self.initial_guess.as_ref()?.as_f64()
    }
}

fn field_f64(value: &serde_json::Value, key: &str) -> Option<f64> {
    value.get(key)?.as_f64()
}

/// Body of `POST /evaluate`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub x: f64,
}

// -------------------------
// Mapping helpers
// -------------------------

/// Parse uploaded CSV rows `x,y` into data points. Blank lines are
/// skipped and columns past the second are ignored; a non-numeric cell
/// fails the whole upload.
pub fn parse_csv(csv: &str) -> Result<Vec<DataPoint>, String> {
    let mut points = Vec::new();
    for (i, line) in csv.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut cells = line.split(',');
        let (Some(x_cell), Some(y_cell)) = (cells.next(), cells.next()) else {
            return Err(format!("Row {} must contain x and y columns.", i + 1));
        };
        let (Ok(x), Ok(y)) = (
            x_cell.trim().parse::<f64>(),
            y_cell.trim().parse::<f64>(),
        ) else {
            return Err(format!("Row {} is not numeric x,y data.", i + 1));
        };

        points.push(DataPoint { x, y });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> OptimizeRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let req = request(json!({
            "optimizationType": "function",
            "expression": "x*x - 4",
            "initialGuess": { "a": 0.0, "b": 5.0 },
            "tolerance": 1e-3,
            "maxIterations": 10,
        }));
        assert_eq!(req.optimization_type.as_deref(), Some("function"));
        assert_eq!(req.expression(), Some("x*x - 4"));
        assert_eq!(req.bracket_guess(), Some((0.0, 5.0)));
        assert_eq!(req.options().tolerance, 1e-3);
        assert_eq!(req.options().max_iterations, 10);
    }

    #[test]
    fn omitted_criteria_fall_back_to_defaults() {
        let req = request(json!({ "optimizationType": "function" }));
        assert_eq!(req.options(), SolveOptions::default());
    }

    #[test]
    fn empty_expression_counts_as_absent() {
        let req = request(json!({ "expression": "" }));
        assert_eq!(req.expression(), None);
    }

    #[test]
    fn guess_shapes_are_independent() {
        let req = request(json!({ "initialGuess": 3.0 }));
        assert_eq!(req.scalar_guess(), Some(3.0));
        assert_eq!(req.bracket_guess(), None);
        assert_eq!(req.window_guess(), None);

        let req = request(json!({ "initialGuess": { "x0": 1.0, "x1": 3.0 } }));
        assert_eq!(req.window_guess(), Some((1.0, 3.0)));
        assert_eq!(req.scalar_guess(), None);
    }

    #[test]
    fn incomplete_bracket_is_rejected() {
        let req = request(json!({ "initialGuess": { "a": 0.0 } }));
        assert_eq!(req.bracket_guess(), None);
    }

    #[test]
    fn csv_parses_rows_and_skips_blanks() {
        let points = parse_csv("0,1\n\n1,2\r\n2,4\n").unwrap();
        assert_eq!(
            points,
            vec![
                DataPoint { x: 0.0, y: 1.0 },
                DataPoint { x: 1.0, y: 2.0 },
                DataPoint { x: 2.0, y: 4.0 },
            ]
        );
    }

    #[test]
    fn csv_ignores_extra_columns() {
        let points = parse_csv("0,1,ignored\n1,2,also ignored").unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn csv_rejects_non_numeric_cells() {
        let err = parse_csv("x,y\n0,1").unwrap_err();
        assert_eq!(err, "Row 1 is not numeric x,y data.");
    }

    #[test]
    fn csv_rejects_single_column_rows() {
        let err = parse_csv("0,1\n42").unwrap_err();
        assert_eq!(err, "Row 2 must contain x and y columns.");
    }
}
