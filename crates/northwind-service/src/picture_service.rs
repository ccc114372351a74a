//! Picture sub-resource service.
//!
//! Pictures are stored in a BLOB column whose first [`RESERVED_HEADER_LEN`]
//! bytes are an opaque header. Callers only ever see the bytes after it.

use async_trait::async_trait;
use northwind_core::NorthwindResult;
use tokio::io::AsyncRead;

/// Length of the header that precedes the image bytes in a stored blob.
pub const RESERVED_HEADER_LEN: usize = 78;

/// Picture access for an entity that carries an image blob.
#[async_trait]
pub trait PictureService: Send + Sync {
    /// Returns the image bytes, or `None` when the row is missing, has no
    /// picture, or holds nothing past the header.
    async fn try_get_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Replaces the image with everything read from `reader`, keeping the
    /// stored header. Returns `false` if the row does not exist.
    async fn update_picture(
        &self,
        id: i32,
        reader: &mut (dyn AsyncRead + Unpin + Send),
    ) -> NorthwindResult<bool>;

    /// Clears the picture column. Returns `false` if the row does not exist.
    async fn delete_picture(&self, id: i32) -> NorthwindResult<bool>;
}

/// Strips the reserved header from a stored blob.
///
/// A blob holding only the header yields an empty image. A blob shorter
/// than the header has no image at all.
#[must_use]
pub fn image_bytes(blob: Option<&[u8]>) -> Option<Vec<u8>> {
    blob.and_then(|blob| blob.get(RESERVED_HEADER_LEN..)).map(<[u8]>::to_vec)
}

/// Builds the blob to store for `image`, reusing the header of `existing`.
///
/// A missing or truncated header is padded with zero bytes.
#[must_use]
pub fn with_reserved_header(existing: Option<&[u8]>, image: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(RESERVED_HEADER_LEN + image.len());
    if let Some(existing) = existing {
        blob.extend_from_slice(&existing[..existing.len().min(RESERVED_HEADER_LEN)]);
    }
    blob.resize(RESERVED_HEADER_LEN, 0);
    blob.extend_from_slice(image);
    blob
}
