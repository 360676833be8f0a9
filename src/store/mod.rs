//! Email record store interface.
//!
//! The document store holding [`EmailRecord`]s is an external dependency.
//! This module defines the narrow surface the service consumes: a
//! structured query type, find options, and the [`EmailStore`] trait
//! itself.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{EmailId, EmailKind, EmailRecord, NewEmail, UserId};

/// Default number of records per page when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// A structured predicate over email record fields.
///
/// Every populated field must match. `kinds` is an alternation: a record
/// matches if its kind equals any listed kind; an empty list leaves the
/// kind unconstrained. `ids`, when present, restricts the result to that
/// id set; an empty set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailQuery {
    /// Owning user. Every query is scoped to one user.
    pub user_id: UserId,
    /// Kind alternation. Empty means any kind.
    pub kinds: Vec<EmailKind>,
    /// Id restriction, when present.
    pub ids: Option<Vec<EmailId>>,
    /// Spam flag filter.
    pub is_spam: Option<bool>,
    /// Importance flag filter.
    pub is_important: Option<bool>,
}

impl EmailQuery {
    /// Creates a query matching all records owned by `user_id`.
    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            kinds: Vec::new(),
            ids: None,
            is_spam: None,
            is_important: None,
        }
    }

    /// Adds a kind to the alternation.
    pub fn kind(mut self, kind: EmailKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Restricts the query to the given id set.
    pub fn ids(mut self, ids: Vec<EmailId>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Filters on the spam flag.
    pub fn spam(mut self, is_spam: bool) -> Self {
        self.is_spam = Some(is_spam);
        self
    }

    /// Filters on the importance flag.
    pub fn important(mut self, is_important: bool) -> Self {
        self.is_important = Some(is_important);
        self
    }

    /// Returns whether `email` satisfies this query.
    pub fn matches(&self, email: &EmailRecord) -> bool {
        if email.user_id != self.user_id {
            return false;
        }
        if !self.kinds.is_empty() && !self.kinds.contains(&email.kind) {
            return false;
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(&email.id) {
                return false;
            }
        }
        if let Some(is_spam) = self.is_spam {
            if email.is_spam != is_spam {
                return false;
            }
        }
        if let Some(is_important) = self.is_important {
            if email.is_important != is_important {
                return false;
            }
        }
        true
    }
}

/// Result ordering for a find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Newest first by creation timestamp.
    TimestampDesc,
}

/// Options applied to a store find.
///
/// `limit` is handed to the store untranslated; stores that treat zero as
/// "no cap" keep that meaning. `sort` of `None` leaves records in the
/// store's native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindOptions {
    /// Matching records to discard from the front of the sorted result.
    pub skip: u64,
    /// Maximum records to return.
    pub limit: u64,
    /// Result ordering.
    pub sort: Option<Sort>,
}

impl FindOptions {
    /// Options for a newest-first page.
    pub fn newest_first(page: Page) -> Self {
        Self {
            skip: page.skip,
            limit: page.limit,
            sort: Some(Sort::TimestampDesc),
        }
    }
}

/// Pagination parameters for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip.
    pub skip: u64,
    /// Maximum number of records to return.
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    /// Creates a first page with the given limit.
    pub fn with_limit(limit: u64) -> Self {
        Self { skip: 0, limit }
    }

    /// Returns the next page.
    pub fn next_page(&self) -> Self {
        Self {
            skip: self.skip + self.limit,
            limit: self.limit,
        }
    }
}

/// Storage trait for email record persistence.
///
/// Implementations sit in front of the actual document store. Consistency
/// relies on the store's per-document atomicity; this layer adds no
/// locking of its own.
#[async_trait]
pub trait EmailStore: Send + Sync {
    /// Inserts a new record, assigning its id and creation timestamp.
    async fn insert(&self, email: NewEmail) -> Result<EmailRecord>;

    /// Finds all records matching `query`, shaped by `options`.
    async fn find(&self, query: EmailQuery, options: FindOptions) -> Result<Vec<EmailRecord>>;

    /// Finds the one record with the given id owned by `user_id`.
    async fn find_one(&self, user_id: &UserId, email_id: &EmailId)
        -> Result<Option<EmailRecord>>;

    /// Counts the records matching `query`.
    async fn count(&self, query: EmailQuery) -> Result<u64>;

    /// Persists a mutated record.
    async fn update(&self, email: &EmailRecord) -> Result<()>;

    /// Deletes the record with the given id owned by `user_id`.
    async fn delete(&self, user_id: &UserId, email_id: &EmailId) -> Result<()>;
}
