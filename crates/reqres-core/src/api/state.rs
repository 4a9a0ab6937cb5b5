use serde_json::Value;

use super::ApiError;

/// Observable state of the most recent API call.
///
/// Each call runs `begin` before the request goes out and `settle` once
/// it resolves, so `pending` is never left set after a call finishes.
/// Settling overwrites both fields; only the latest outcome is kept.
#[derive(Debug, Clone, Default)]
pub struct CallState {
    /// Parsed response body of the last successful call
    pub result: Option<Value>,
    /// Error message of the last failed call
    pub failure: Option<String>,
    /// True while a call is outstanding
    pub pending: bool,
}

impl CallState {
    /// Mark a call as in flight.
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Record a settled call. Clears `pending` on both paths.
    pub fn settle(&mut self, outcome: &Result<Value, ApiError>) {
        match outcome {
            Ok(value) => {
                self.result = Some(value.clone());
                self.failure = None;
            }
            Err(err) => {
                self.failure = Some(err.to_string());
                self.result = None;
            }
        }
        self.pending = false;
    }
}
