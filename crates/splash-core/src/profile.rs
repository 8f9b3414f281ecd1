//! Static user profile shown on the last splash screen.

use serde::{Deserialize, Serialize};

/// Read-only user identity displayed by the UserInfo stage.
///
/// Configuration data, not runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Full name.
    pub name: String,
    /// Student/member registration number.
    pub id: String,
    /// Class or cohort label.
    pub class_label: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "ARIES ADITYANTO".to_string(),
            id: "3124104096".to_string(),
            class_label: "TI.24.B1".to_string(),
        }
    }
}
