//! User directory interface.
//!
//! Resolves a user identifier to profile data. The service uses it at
//! creation time to stamp the sender address on outgoing and draft mail.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// A directory entry for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's identifier.
    pub id: UserId,
    /// The user's email address, as the directory stores it.
    pub email: String,
}

/// Service resolving user identifiers to profile data.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up the profile for `user_id`.
    async fn get_user(&self, user_id: &UserId) -> Result<UserProfile>;
}
