//! postbox - a multi-tenant webmail backend service layer
//!
//! This crate owns the business rules for creating, retrieving, mutating,
//! and deleting per-user email records. Persistence, free-text search, and
//! user lookup are external concerns consumed through the narrow traits in
//! [`store`], [`search`], and [`directory`].

pub mod config;
pub mod directory;
pub mod domain;
pub mod search;
pub mod services;
pub mod store;

pub use services::{EmailError, EmailResult, EmailService};
