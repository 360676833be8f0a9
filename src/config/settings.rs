//! Service settings.

use serde::{Deserialize, Serialize};

/// Subject given to mail created without one.
const DEFAULT_SUBJECT: &str = "<no subject>";

/// Tunable behavior of the email service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Placeholder subject applied when mail is created with an empty
    /// subject. Never applied on draft updates.
    #[serde(default = "default_subject")]
    pub default_subject: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_subject: default_subject(),
        }
    }
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}
