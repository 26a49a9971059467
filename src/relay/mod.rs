//! Background-context message router and toolbar badge
//!
//! Stateless dispatch by message tag. The relay also re-derives the verdict
//! from a navigated tab's URL for the toolbar badge, a separate visual
//! channel from the in-page badge, driven by the same classifier.

use crate::classifier::classify_url;
use crate::models::{ColorToken, Message};

/// What the host shell should do in response to a dispatched message.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayAction {
    /// Open the extension popup.
    OpenPopup,
    /// Re-broadcast to any listening popup.
    Broadcast(Message),
    /// Message is not for the background context (or not recognized).
    Ignored,
}

#[derive(Debug, Default)]
pub struct Relay;

impl Relay {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, message: Message) -> RelayAction {
        match message {
            Message::OpenPopup => RelayAction::OpenPopup,
            Message::EnvironmentUpdated { environment } => {
                RelayAction::Broadcast(Message::EnvironmentUpdated { environment })
            }
            other => {
                log::debug!("relay ignoring message {other:?}");
                RelayAction::Ignored
            }
        }
    }

    /// Dispatch a raw JSON payload from the messaging channel. Unknown tags
    /// are logged and ignored, never an error.
    pub fn dispatch_raw(&self, payload: &str) -> RelayAction {
        match serde_json::from_str::<Message>(payload) {
            Ok(message) => self.dispatch(message),
            Err(err) => {
                log::debug!("relay ignoring unrecognized payload: {err}");
                RelayAction::Ignored
            }
        }
    }
}

/// Toolbar badge surface derived from a tab URL on navigation-completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarBadge {
    pub text: String,
    pub color: ColorToken,
    pub tooltip: String,
}

/// `None` clears the toolbar badge (production or unparseable URL).
pub fn toolbar_badge_for(url: &str) -> Option<ToolbarBadge> {
    let environment = classify_url(url)?;
    Some(ToolbarBadge {
        text: environment.short_code().to_string(),
        color: environment.color,
        tooltip: format!("{} detected", environment.label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Environment;

    #[test]
    fn test_open_popup_dispatch() {
        assert_eq!(Relay::new().dispatch(Message::OpenPopup), RelayAction::OpenPopup);
    }

    #[test]
    fn test_environment_updated_is_rebroadcast() {
        let env = Some(Environment::staging());
        let action = Relay::new().dispatch(Message::EnvironmentUpdated {
            environment: env.clone(),
        });
        assert_eq!(
            action,
            RelayAction::Broadcast(Message::EnvironmentUpdated { environment: env })
        );
    }

    #[test]
    fn test_content_bound_messages_are_ignored() {
        assert_eq!(Relay::new().dispatch(Message::GetWordPressInfo), RelayAction::Ignored);
        assert_eq!(Relay::new().dispatch(Message::Refresh), RelayAction::Ignored);
    }

    #[test]
    fn test_unknown_raw_payload_is_ignored() {
        let relay = Relay::new();
        assert_eq!(relay.dispatch_raw(r#"{"action":"mystery"}"#), RelayAction::Ignored);
        assert_eq!(relay.dispatch_raw("not json"), RelayAction::Ignored);
        assert_eq!(relay.dispatch_raw(r#"{"action":"openPopup"}"#), RelayAction::OpenPopup);
    }

    #[test]
    fn test_toolbar_badge_for_staging_url() {
        let badge = toolbar_badge_for("https://myapp.staging.example.com/").unwrap();
        assert_eq!(badge.text, "STG");
        assert_eq!(badge.color, ColorToken::Orange);
        assert!(badge.tooltip.contains("Staging detected"));
    }

    #[test]
    fn test_toolbar_badge_cleared_on_production() {
        assert_eq!(toolbar_badge_for("https://www.example.com/"), None);
        assert_eq!(toolbar_badge_for("chrome://newtab"), None);
    }

    #[test]
    fn test_toolbar_badge_for_dev_url() {
        let badge = toolbar_badge_for("http://localhost:8080/wp-admin/").unwrap();
        assert_eq!(badge.text, "DEV");
        assert_eq!(badge.color, ColorToken::Green);
    }
}
