// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler {handler} failed on {kind}: {cause}")]
    HandlerFailed {
        kind: String,
        handler: &'static str,
        cause: anyhow::Error,
    },

    #[error("{} handler(s) failed on {kind}", .failures.len())]
    Multiple {
        kind: String,
        failures: Vec<DispatchError>,
    },
}

impl DispatchError {
    /// Number of handler failures represented by this error.
    pub fn failure_count(&self) -> usize {
        match self {
            DispatchError::HandlerFailed { .. } => 1,
            DispatchError::Multiple { failures, .. } => failures.len(),
        }
    }
}
