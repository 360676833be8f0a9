//! Core identifier types for domain entities.
//!
//! These newtype wrappers provide type safety for entity identifiers,
//! preventing accidental mixing of user and email identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user owning email records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Unique identifier for an email record, assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailId(pub String);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmailId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmailId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display() {
        let id = UserId("u-1".to_string());
        assert_eq!(id.to_string(), "u-1");
    }

    #[test]
    fn email_id_equality() {
        let id1 = EmailId::from("email-1");
        let id2 = EmailId::from("email-1".to_string());
        assert_eq!(id1, id2);
    }

    #[test]
    fn email_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(EmailId::from("email-1"));
        assert!(set.contains(&EmailId::from("email-1")));
    }

    #[test]
    fn user_id_from_str() {
        let id: UserId = "someone".into();
        assert_eq!(id.0, "someone");
    }
}
