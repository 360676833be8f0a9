//! Business services layer.
//!
//! Services own the business rules and coordinate the external
//! collaborators (record store, search index, user directory) behind the
//! trait seams in [`crate::store`], [`crate::search`], and
//! [`crate::directory`].

mod email_service;

pub use email_service::{EmailError, EmailResult, EmailService};
