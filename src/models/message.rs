//! Cross-context message protocol
//!
//! Tagged payloads exchanged between the content script, the background
//! relay, and the popup. The wire form is JSON with an `action` tag,
//! matching the host messaging channel.

use super::environment::Environment;
use super::platform::PlatformInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Message {
    /// popup → content: request probed platform metadata.
    GetWordPressInfo,
    /// popup → content: re-run badge reconciliation.
    Refresh,
    /// content → background: open the extension popup.
    OpenPopup,
    /// content → background → popup: a detection pass completed.
    EnvironmentUpdated { environment: Option<Environment> },
}

/// Responses travelling back over the same channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Info(PlatformInfo),
    Ack { success: bool },
}
