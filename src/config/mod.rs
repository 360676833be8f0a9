//! Configuration types.
//!
//! Settings are plain serde values; the embedding application decides
//! where they live and hands them to the service at construction.

mod settings;

pub use settings::Settings;
