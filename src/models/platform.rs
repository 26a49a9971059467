//! Probed platform metadata

use serde::{Deserialize, Serialize};

/// Sentinel for a detector whose whole fallback chain came up empty.
/// Callers always receive all three slots; this is a value, not an absence.
pub const UNKNOWN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub version: String,
    pub language: String,
    pub theme: String,
}

impl PlatformInfo {
    pub fn unknown() -> Self {
        Self {
            version: UNKNOWN.to_string(),
            language: UNKNOWN.to_string(),
            theme: UNKNOWN.to_string(),
        }
    }

    /// True when at least one detector produced a real value.
    pub fn has_any_value(&self) -> bool {
        [&self.version, &self.language, &self.theme]
            .iter()
            .any(|v| v.as_str() != UNKNOWN)
    }
}

impl Default for PlatformInfo {
    fn default() -> Self {
        Self::unknown()
    }
}
