//! Shared application state.

use std::sync::Mutex;

use optiviz_solver::DataPoint;

/// The one piece of mutable state in the service: the most recently
/// uploaded dataset. Everything else is computed per request.
#[derive(Debug, Default)]
pub struct AppState {
    dataset: Mutex<Option<Vec<DataPoint>>>,
}

impl AppState {
    /// Replace the dataset wholesale, returning the stored row count.
    pub fn replace_dataset(&self, points: Vec<DataPoint>) -> usize {
        let rows = points.len();
        *self.dataset.lock().unwrap() = Some(points);
        rows
    }

    /// Snapshot of the current dataset, if one has been uploaded.
    pub fn dataset(&self) -> Option<Vec<DataPoint>> {
        self.dataset.lock().unwrap().clone()
    }
}
