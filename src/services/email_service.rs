//! Email service owning all business rules for per-user email records.
//!
//! The [`EmailService`] validates and normalizes input, issues queries and
//! mutations against the record store, and fans out to the search index
//! (on create and delete) and the user directory (on create, to resolve
//! the sender address).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::Settings;
use crate::directory::UserDirectory;
use crate::domain::{EmailId, EmailKind, EmailOverview, EmailRecord, NewEmail, UserId};
use crate::search::SearchIndex;
use crate::store::{EmailQuery, EmailStore, FindOptions, Page};

/// Errors that can occur during email operations.
#[derive(Debug, Error)]
pub enum EmailError {
    /// No record with the given id is owned by the requesting user.
    #[error("email not found: {0}")]
    NotFound(EmailId),

    /// A collaborator rejected the operation. Propagated unchanged.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

/// Result type for email operations.
pub type EmailResult<T> = Result<T, EmailError>;

/// Manages per-user email records across the store, search index, and
/// user directory.
///
/// The service is stateless aside from its injected collaborators: each
/// operation is a bounded sequence of awaited collaborator calls with no
/// internal retries. Consistency relies on the store's per-document
/// atomicity; concurrent read-modify-write on the same record is not
/// guarded here.
///
/// # Example
///
/// ```ignore
/// let service = EmailService::new(store, index, directory);
/// let draft = service
///     .create_draft_email(&user_id, recipients, subject, message, None)
///     .await?;
/// ```
pub struct EmailService<S: EmailStore, I: SearchIndex, D: UserDirectory> {
    /// Email record store.
    store: Arc<S>,
    /// Search index, written on create and delete.
    index: Arc<I>,
    /// User directory, read on create to resolve the sender address.
    directory: Arc<D>,
    /// Service tunables.
    settings: Settings,
}

impl<S: EmailStore, I: SearchIndex, D: UserDirectory> EmailService<S, I, D> {
    /// Creates a new service with default settings.
    pub fn new(store: Arc<S>, index: Arc<I>, directory: Arc<D>) -> Self {
        Self::with_settings(store, index, directory, Settings::default())
    }

    /// Creates a new service with the given settings.
    pub fn with_settings(
        store: Arc<S>,
        index: Arc<I>,
        directory: Arc<D>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            index,
            directory,
            settings,
        }
    }

    /// Creates a draft email for `user_id`.
    ///
    /// The sender address is resolved from the user's directory entry and
    /// copied verbatim. An empty `subject` is replaced with the configured
    /// placeholder. The saved record is submitted to the search index
    /// after the store insert; an index failure leaves the record
    /// persisted but unindexed.
    ///
    /// # Returns
    ///
    /// The saved record, with store-assigned id and timestamp.
    pub async fn create_draft_email(
        &self,
        user_id: &UserId,
        recipients: Vec<String>,
        subject: String,
        message: String,
        viewed_at: Option<DateTime<Utc>>,
    ) -> EmailResult<EmailRecord> {
        self.create(user_id, recipients, subject, message, EmailKind::Draft, viewed_at)
            .await
    }

    /// Creates an outgoing email for `user_id`.
    ///
    /// Same contract as [`create_draft_email`](Self::create_draft_email),
    /// with kind `outgoing` and no viewed time.
    pub async fn create_email(
        &self,
        user_id: &UserId,
        recipients: Vec<String>,
        subject: String,
        message: String,
    ) -> EmailResult<EmailRecord> {
        self.create(user_id, recipients, subject, message, EmailKind::Outgoing, None)
            .await
    }

    async fn create(
        &self,
        user_id: &UserId,
        recipients: Vec<String>,
        subject: String,
        message: String,
        kind: EmailKind,
        viewed_at: Option<DateTime<Utc>>,
    ) -> EmailResult<EmailRecord> {
        let sender = self.directory.get_user(user_id).await?;
        let subject = if subject.is_empty() {
            self.settings.default_subject.clone()
        } else {
            subject
        };

        let email = self
            .store
            .insert(NewEmail {
                user_id: user_id.clone(),
                from: sender.email,
                recipients,
                subject,
                message,
                kind,
                is_spam: false,
                is_important: false,
                viewed_at,
            })
            .await?;
        self.index.save_email(&email).await?;

        tracing::debug!(user = %user_id, id = %email.id, kind = kind.as_str(), "created email");
        Ok(email)
    }

    /// Lists sent mail (kinds `outgoing` and `sent`), newest first.
    pub async fn get_sent_emails(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> EmailResult<Vec<EmailRecord>> {
        let query = EmailQuery::for_user(user_id.clone())
            .kind(EmailKind::Outgoing)
            .kind(EmailKind::Sent);
        Ok(self.store.find(query, FindOptions::newest_first(page)).await?)
    }

    /// Searches the user's mail by free text.
    ///
    /// The index answers with candidate ids (it owns relevance ranking
    /// and applies `offset`/`limit`); the store then supplies the full
    /// records, scoped to `user_id` and the candidate set. Records are
    /// returned in the index's relevance order.
    pub async fn search(
        &self,
        user_id: &UserId,
        query_text: &str,
        offset: u64,
        limit: u64,
    ) -> EmailResult<Vec<EmailRecord>> {
        let ids = self
            .index
            .find_email(user_id, query_text, offset, limit)
            .await?;

        let query = EmailQuery::for_user(user_id.clone()).ids(ids.clone());
        let mut emails = self.store.find(query, FindOptions::default()).await?;

        let rank: HashMap<&EmailId, usize> =
            ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
        emails.sort_by_key(|email| rank.get(&email.id).copied().unwrap_or(usize::MAX));
        Ok(emails)
    }

    /// Flags or unflags a record as important.
    pub async fn set_email_as_important(
        &self,
        user_id: &UserId,
        email_id: &EmailId,
        is_important: bool,
    ) -> EmailResult<EmailRecord> {
        let mut email = self.fetch_one(user_id, email_id).await?;
        email.is_important = is_important;
        self.store.update(&email).await?;
        Ok(email)
    }

    /// Records when the user opened an email.
    pub async fn set_email_to_viewed(
        &self,
        user_id: &UserId,
        email_id: &EmailId,
        viewed_at: DateTime<Utc>,
    ) -> EmailResult<EmailRecord> {
        let mut email = self.fetch_one(user_id, email_id).await?;
        email.viewed_at = Some(viewed_at);
        self.store.update(&email).await?;
        Ok(email)
    }

    /// Fetches a single record owned by `user_id`.
    pub async fn get_email(
        &self,
        user_id: &UserId,
        email_id: &EmailId,
    ) -> EmailResult<EmailRecord> {
        self.fetch_one(user_id, email_id).await
    }

    /// Deletes a record from the store and then from the search index.
    ///
    /// The two deletions are not atomic: an index failure after the store
    /// delete leaves the index stale.
    pub async fn remove_email(&self, user_id: &UserId, email_id: &EmailId) -> EmailResult<()> {
        let email = self.fetch_one(user_id, email_id).await?;
        self.store.delete(user_id, email_id).await?;
        self.index.delete_email(&email).await?;

        tracing::debug!(user = %user_id, id = %email_id, "removed email");
        Ok(())
    }

    /// Lists flagged mail, newest first.
    pub async fn get_important_emails(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> EmailResult<Vec<EmailRecord>> {
        let query = EmailQuery::for_user(user_id.clone()).important(true);
        Ok(self.store.find(query, FindOptions::newest_first(page)).await?)
    }

    /// Lists inbox mail (received, not spam), newest first.
    pub async fn get_inbox_emails(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> EmailResult<Vec<EmailRecord>> {
        let query = EmailQuery::for_user(user_id.clone())
            .kind(EmailKind::Received)
            .spam(false);
        Ok(self.store.find(query, FindOptions::newest_first(page)).await?)
    }

    /// Lists spam mail, newest first.
    pub async fn get_spam_emails(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> EmailResult<Vec<EmailRecord>> {
        let query = EmailQuery::for_user(user_id.clone()).spam(true);
        Ok(self.store.find(query, FindOptions::newest_first(page)).await?)
    }

    /// Lists draft mail, newest first.
    pub async fn get_draft_emails(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> EmailResult<Vec<EmailRecord>> {
        let query = EmailQuery::for_user(user_id.clone()).kind(EmailKind::Draft);
        Ok(self.store.find(query, FindOptions::newest_first(page)).await?)
    }

    /// Summarizes the user's mailbox as three counts.
    ///
    /// The counts are issued one at a time, inbox then drafts then spam;
    /// the order is observable to the store and part of the contract.
    pub async fn get_email_overview(&self, user_id: &UserId) -> EmailResult<EmailOverview> {
        // TODO: the unread counts do not filter on viewed_at and so count
        // all inbox/spam mail; revisit with the overview consumers.
        let unread_inbox_emails = self
            .store
            .count(
                EmailQuery::for_user(user_id.clone())
                    .kind(EmailKind::Received)
                    .spam(false),
            )
            .await?;
        let draft_emails = self
            .store
            .count(EmailQuery::for_user(user_id.clone()).kind(EmailKind::Draft))
            .await?;
        let unread_spam_emails = self
            .store
            .count(
                EmailQuery::for_user(user_id.clone())
                    .kind(EmailKind::Received)
                    .spam(true),
            )
            .await?;

        Ok(EmailOverview {
            unread_inbox_emails,
            draft_emails,
            unread_spam_emails,
        })
    }

    /// Overwrites a draft's recipients, subject, and message.
    ///
    /// The fields are stored verbatim; the placeholder subject is only
    /// applied at creation.
    pub async fn update_draft_email(
        &self,
        user_id: &UserId,
        email_id: &EmailId,
        recipients: Vec<String>,
        subject: String,
        message: String,
    ) -> EmailResult<EmailRecord> {
        let mut email = self.fetch_one(user_id, email_id).await?;
        email.recipients = recipients;
        email.subject = subject;
        email.message = message;
        self.store.update(&email).await?;
        Ok(email)
    }

    async fn fetch_one(&self, user_id: &UserId, email_id: &EmailId) -> EmailResult<EmailRecord> {
        self.store
            .find_one(user_id, email_id)
            .await?
            .ok_or_else(|| EmailError::NotFound(email_id.clone()))
    }
}
