//! Result and stream type aliases for the Northwind API.

use crate::NorthwindError;
use futures::stream::BoxStream;

/// A specialized `Result` type for Northwind operations.
pub type NorthwindResult<T> = Result<T, NorthwindError>;

/// A lazily evaluated, forward-only stream of fallible items.
///
/// Collection reads return these instead of materialized vectors, so rows
/// are pulled from the store only as the consumer polls. Dropping the
/// stream releases whatever connection backs it.
pub type NorthwindStream<T> = BoxStream<'static, NorthwindResult<T>>;
