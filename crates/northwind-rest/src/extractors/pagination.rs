//! Pagination and lookup query parameters.

use northwind_core::{NorthwindResult, Pagination};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for a paged listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Rows to skip (default 0).
    #[serde(default)]
    pub offset: Option<i64>,
    /// Maximum rows to return (default 20).
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationQuery {
    /// Applies defaults and checks the window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative offset or a limit below 1.
    pub fn pagination(&self) -> NorthwindResult<Pagination> {
        Pagination::new(
            self.offset.unwrap_or(0),
            self.limit.unwrap_or(Pagination::DEFAULT_LIMIT),
        )
    }
}

/// Query parameter naming the row to update.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: Option<i32>,
}

/// Repeated `names` query parameter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NamesQuery {
    #[serde(default)]
    pub names: Vec<String>,
}

/// Repeated `categories` query parameter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoriesQuery {
    #[serde(default)]
    pub categories: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let page = PaginationQuery::default().pagination().unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, Pagination::DEFAULT_LIMIT);
    }

    #[test]
    fn test_pagination_rejects_bad_window() {
        let query = PaginationQuery {
            offset: Some(-1),
            limit: None,
        };
        assert!(query.pagination().is_err());

        let query = PaginationQuery {
            offset: None,
            limit: Some(0),
        };
        assert!(query.pagination().is_err());
    }
}
