//! Persisted detection state

use super::environment::Environment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single-slot persisted record, overwritten wholesale on every detection
/// pass. No history, no merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    pub current_environment: Option<Environment>,
    pub current_url: String,
    pub detected_at: DateTime<Utc>,
}

/// Written once at install/update time. Informational only; never read by
/// the detection core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallMarker {
    pub version: String,
    pub installed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_state_serializes_camel_case_with_iso_timestamp() {
        let state = StoredState {
            current_environment: Some(Environment::staging()),
            current_url: "https://staging.example.com/".to_string(),
            detected_at: "2026-08-25T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"currentEnvironment\""));
        assert!(json.contains("\"currentUrl\""));
        assert!(json.contains("\"detectedAt\":\"2026-08-25T12:00:00Z\""));
    }
}
