//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Complete transcript followed by the final result (default)
    #[default]
    Full,
    /// Only the final result
    Final,
    /// Serialized debate outcome
    Json,
}
