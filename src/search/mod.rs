//! Search index interface.
//!
//! Free-text matching is delegated to an external search service. The
//! index stores a projection of each record at creation time and answers
//! queries with record ids scoped to the owning user; fetching the full
//! records back is the store's job.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{EmailId, EmailRecord, UserId};

/// Secondary index enabling free-text lookup of email records.
///
/// The index owns relevance ranking: the id sequence returned by
/// [`find_email`](SearchIndex::find_email) is ordered best match first.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Submits a newly stored record for indexing.
    async fn save_email(&self, email: &EmailRecord) -> Result<()>;

    /// Returns ids of records owned by `user_id` matching `query_text`,
    /// best match first, windowed by `offset` and `limit`.
    async fn find_email(
        &self,
        user_id: &UserId,
        query_text: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EmailId>>;

    /// Removes a deleted record from the index.
    async fn delete_email(&self, email: &EmailRecord) -> Result<()>;
}
