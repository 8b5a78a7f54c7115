//! Trait abstraction for the application store to enable mocking in tests

use super::record::{DocumentId, NewApplication};
use anyhow::Result;
use async_trait::async_trait;

/// Durable sink for submitted applications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Store a new application. The store assigns the id and creation time.
    async fn create(&self, record: &NewApplication) -> Result<DocumentId>;
}
