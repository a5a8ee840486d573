//! Blob storage trait for thumbnail files.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream used for writing file contents.
///
/// Borrowing streams are allowed so a request body can be copied straight
/// to storage without first collecting it.
pub type ByteStream<'a> = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send + 'a>>;

/// Writes named files under a content root and addresses them by URL.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// URL under which a file stored as `name` is retrievable.
    fn url_for(&self, name: &str) -> String;

    /// Stream `stream` into a newly created file called `name`.
    ///
    /// Fails if a file with that name already exists. Returns the number of
    /// bytes written.
    async fn write_stream(&self, name: &str, stream: ByteStream<'_>) -> AppResult<u64>;

    /// Check whether the store's root is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
