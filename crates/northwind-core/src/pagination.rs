//! Offset/limit pagination for list operations.

use crate::{NorthwindError, NorthwindResult};
use serde::{Deserialize, Serialize};

/// A window over an ordered result set.
///
/// `offset` counts rows to skip, `limit` the maximum rows to return.
/// A window is only usable once [`Pagination::new`] has accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Rows to skip (>= 0).
    pub offset: i64,
    /// Maximum rows to return (>= 1).
    pub limit: i64,
}

impl Pagination {
    /// The default window size.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Creates a window, rejecting negative offsets and limits below 1.
    ///
    /// # Errors
    ///
    /// Returns [`NorthwindError::InvalidArgument`] when the window is
    /// out of range.
    pub fn new(offset: i64, limit: i64) -> NorthwindResult<Self> {
        if offset < 0 {
            return Err(NorthwindError::invalid_argument(format!(
                "offset must be non-negative, got {offset}"
            )));
        }
        if limit < 1 {
            return Err(NorthwindError::invalid_argument(format!(
                "limit must be at least 1, got {limit}"
            )));
        }
        Ok(Self { offset, limit })
    }
}

/// Rejects identifiers that can never belong to a persisted row.
///
/// # Errors
///
/// Returns [`NorthwindError::InvalidArgument`] when `id` is not positive.
pub fn ensure_positive_id(id: i32) -> NorthwindResult<()> {
    if id <= 0 {
        return Err(NorthwindError::invalid_argument(format!(
            "id must be positive, got {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_accepts_valid_window() {
        let page = Pagination::new(10, 5).unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn test_pagination_rejects_negative_offset() {
        let err = Pagination::new(-1, 5).unwrap_err();
        assert!(matches!(err, NorthwindError::InvalidArgument(_)));
    }

    #[test]
    fn test_pagination_rejects_zero_limit() {
        assert!(Pagination::new(0, 0).is_err());
        assert!(Pagination::new(0, -3).is_err());
    }

    #[test]
    fn test_ensure_positive_id() {
        assert!(ensure_positive_id(1).is_ok());
        assert!(ensure_positive_id(0).is_err());
        assert!(ensure_positive_id(-42).is_err());
    }
}
