//! SQLite DAO implementations.
//!
//! Queries alias every column to the transfer object's field name so rows
//! decode through `sqlx::FromRow` directly.

mod employee_dao_impl;
mod product_category_dao_impl;
mod product_dao_impl;

pub use employee_dao_impl::SqliteEmployeeDao;
pub use product_category_dao_impl::SqliteProductCategoryDao;
pub use product_dao_impl::SqliteProductDao;

use async_stream::stream;
use futures::StreamExt;
use northwind_core::{NorthwindError, NorthwindResult, NorthwindStream};
use sqlx::sqlite::SqliteRow;
use sqlx::{Encode, FromRow, QueryBuilder, Sqlite, SqlitePool, Type};

/// Streams the rows of `sql`, a query ending in `LIMIT ? OFFSET ?`.
///
/// The pool is moved into the stream; a connection is checked out on the
/// first poll and returned when the stream finishes or is dropped.
fn stream_window<T>(pool: SqlitePool, sql: &'static str, offset: i64, limit: i64) -> NorthwindStream<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static,
{
    Box::pin(stream! {
        let mut rows = sqlx::query_as::<_, T>(sql)
            .bind(limit)
            .bind(offset)
            .fetch(&pool);
        while let Some(row) = rows.next().await {
            yield row.map_err(NorthwindError::from);
        }
    })
}

/// Streams the rows of `select` whose `column` matches any of `values`.
fn stream_matching<T, V>(
    pool: SqlitePool,
    select: &'static str,
    column: &'static str,
    order_by: &'static str,
    values: Vec<V>,
) -> NorthwindStream<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static,
    V: for<'q> Encode<'q, Sqlite> + Type<Sqlite> + Send + 'static,
{
    Box::pin(stream! {
        let mut builder = QueryBuilder::<Sqlite>::new(select);
        builder.push(" WHERE ").push(column).push(" IN (");
        let mut separated = builder.separated(", ");
        for value in values {
            separated.push_bind(value);
        }
        separated.push_unseparated(") ORDER BY ");
        builder.push(order_by);

        let mut rows = builder.build_query_as::<T>().fetch(&pool);
        while let Some(row) = rows.next().await {
            yield row.map_err(NorthwindError::from);
        }
    })
}

/// Rejects an empty lookup set before any query is built.
fn ensure_not_empty<V>(values: &[V], name: &str) -> NorthwindResult<()> {
    if values.is_empty() {
        return Err(NorthwindError::invalid_argument(format!(
            "{name} must contain at least one element"
        )));
    }
    Ok(())
}

/// Narrows a SQLite rowid to the 32-bit ids used by the API.
fn to_id(rowid: i64) -> NorthwindResult<i32> {
    i32::try_from(rowid)
        .map_err(|_| NorthwindError::internal(format!("generated id {rowid} exceeds i32 range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_empty() {
        assert!(ensure_not_empty::<i32>(&[], "categories").is_err());
        assert!(ensure_not_empty(&[1], "categories").is_ok());
    }

    #[test]
    fn test_to_id() {
        assert_eq!(to_id(42).unwrap(), 42);
        assert!(to_id(i64::from(i32::MAX) + 1).is_err());
    }
}
