//! Partial-failure reporting for bulk operations.

/// Error raised when a bulk message delete fails partway.
///
/// Carries both the ids that were deleted before the failure and the ids
/// that were not, so callers can reconcile instead of guessing.
#[derive(Debug, Clone, derive_more::Display)]
#[display(
    "Bulk delete failed after removing {} of {} messages",
    deleted.len(),
    deleted.len() + failed.len()
)]
pub struct BulkDeleteError {
    /// Raw snowflake ids of messages confirmed deleted
    pub deleted: Vec<u64>,
    /// Raw snowflake ids of messages not deleted
    pub failed: Vec<u64>,
    /// The underlying REST error that interrupted the operation
    pub source: crate::RestError,
}

impl BulkDeleteError {
    /// Create a new bulk delete error.
    pub fn new(deleted: Vec<u64>, failed: Vec<u64>, source: crate::RestError) -> Self {
        Self {
            deleted,
            failed,
            source,
        }
    }
}

impl std::error::Error for BulkDeleteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
