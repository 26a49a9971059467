//! Popup presenter
//!
//! On open, classifies the active tab's URL directly (the persisted store
//! is a cache, not the primary source) and requests platform metadata from
//! the content context, falling back to direct script injection when the
//! channel reports no receiver. State lives in the presenter, scoped to the
//! popup's lifetime, nothing module-global.

use crate::classifier::classify_url;
use crate::error::ChannelError;
use crate::models::{ColorToken, Environment, Message, PlatformInfo};

/// Message round-trip to the content script's live context.
pub trait ContentChannel {
    fn request_info(&mut self) -> Result<PlatformInfo, ChannelError>;
}

/// On-demand script injection fallback. `None` when injection itself fails.
pub trait ScriptInjector {
    fn inject_probe(&mut self) -> Option<PlatformInfo>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub environment: Option<Environment>,
    pub info: PlatformInfo,
    pub url: String,
}

impl Default for PopupState {
    fn default() -> Self {
        Self {
            environment: None,
            info: PlatformInfo::unknown(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PopupPresenter {
    state: PopupState,
}

impl PopupPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    /// Full refresh against the active tab. Never fails: a dead channel
    /// falls back to injection, and a failed injection leaves the three
    /// metadata slots showing the `-` sentinel.
    pub fn refresh<C, I>(&mut self, tab_url: &str, channel: &mut C, injector: &mut I) -> &PopupState
    where
        C: ContentChannel,
        I: ScriptInjector,
    {
        self.state.url = tab_url.to_string();
        self.state.environment = classify_url(tab_url);
        self.state.info = match channel.request_info() {
            Ok(info) => info,
            Err(err) => {
                log::debug!("content channel unavailable ({err}); injecting probe");
                injector.inject_probe().unwrap_or_else(PlatformInfo::unknown)
            }
        };
        &self.state
    }

    /// React to a relay broadcast while the popup is open. Returns true
    /// when a refresh ran.
    pub fn on_broadcast<C, I>(&mut self, message: &Message, channel: &mut C, injector: &mut I) -> bool
    where
        C: ContentChannel,
        I: ScriptInjector,
    {
        if !matches!(message, Message::EnvironmentUpdated { .. }) {
            return false;
        }
        let url = self.state.url.clone();
        self.refresh(&url, channel, injector);
        true
    }
}

/// View model for the popup's environment card.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCard {
    pub label: String,
    pub color: Option<ColorToken>,
    pub version: String,
    pub language: String,
    pub theme: String,
}

impl DisplayCard {
    pub fn from_state(state: &PopupState) -> Self {
        let (label, color) = match &state.environment {
            Some(env) => (env.label.clone(), Some(env.color)),
            None => ("Production".to_string(), None),
        };
        Self {
            label,
            color,
            version: state.info.version.clone(),
            language: state.info.language.clone(),
            theme: state.info.theme.clone(),
        }
    }
}
