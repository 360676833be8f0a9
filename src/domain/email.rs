//! Email record types.
//!
//! An [`EmailRecord`] is the single entity this service manages. Records
//! are owned by exactly one user and live in an external document store;
//! the store assigns `id` and `timestamp` on insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EmailId, UserId};

/// The kind of an email record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    /// Unsent mail being composed.
    Draft,
    /// Mail queued for delivery.
    Outgoing,
    /// Mail that has been delivered.
    Sent,
    /// Mail delivered to this user.
    Received,
}

impl EmailKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailKind::Draft => "draft",
            EmailKind::Outgoing => "outgoing",
            EmailKind::Sent => "sent",
            EmailKind::Received => "received",
        }
    }
}

/// A stored email record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Store-assigned identifier.
    pub id: EmailId,
    /// Owning user. Immutable once set; every lookup is scoped by it.
    pub user_id: UserId,
    /// Sender address, copied verbatim from the owner's directory entry.
    pub from: String,
    /// Recipient addresses, in the order given at creation.
    pub recipients: Vec<String>,
    /// Subject line. Never empty after creation.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// What kind of mail this is.
    pub kind: EmailKind,
    /// Distinguishes spam from inbox mail within `received`.
    pub is_spam: bool,
    /// Whether the user flagged this record.
    pub is_important: bool,
    /// When the user opened this record. Absent means unread.
    pub viewed_at: Option<DateTime<Utc>>,
    /// Store-assigned creation time, the sort key for all listings.
    pub timestamp: DateTime<Utc>,
}

impl EmailRecord {
    /// Returns whether this record has never been opened.
    pub fn is_unread(&self) -> bool {
        self.viewed_at.is_none()
    }

    /// Returns whether this record belongs in the inbox view.
    pub fn is_inbox(&self) -> bool {
        self.kind == EmailKind::Received && !self.is_spam
    }
}

/// The shape handed to the store when inserting a new record.
///
/// The store assigns `id` and `timestamp` and returns the full
/// [`EmailRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmail {
    /// Owning user.
    pub user_id: UserId,
    /// Sender address.
    pub from: String,
    /// Recipient addresses.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// What kind of mail this is.
    pub kind: EmailKind,
    /// Spam flag.
    pub is_spam: bool,
    /// Importance flag.
    pub is_important: bool,
    /// Viewed time, when known at creation.
    pub viewed_at: Option<DateTime<Utc>>,
}

/// Mailbox summary counts for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailOverview {
    /// Inbox mail count.
    pub unread_inbox_emails: u64,
    /// Draft count.
    pub draft_emails: u64,
    /// Spam mail count.
    pub unread_spam_emails: u64,
}
