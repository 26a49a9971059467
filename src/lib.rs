//! WordPress Environment Badge
//!
//! Core of a browser extension that tells development, staging, and
//! production deployments of a WordPress site apart. Classifies the
//! hostname, probes the page for platform metadata, reconciles an injected
//! badge element idempotently, and propagates the verdict across extension
//! contexts (content script → storage → background relay → popup).

pub mod classifier;
pub mod error;
pub mod models;
pub mod parser;
pub mod popup;
pub mod prober;
pub mod reconciler;
pub mod relay;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use classifier::{classify, classify_url, ClassifierConfig};
pub use error::{ChannelError, Error};
pub use models::{
    Environment, EnvKind, Message, PageDocument, PlatformInfo, Response, StoredState,
};
pub use parser::parse_document;
pub use prober::{is_wordpress_site, probe};
pub use reconciler::{reconcile, NavigationWatcher, ReconcileOutcome};
pub use storage::{KeyValueStore, MemoryStore, PersistenceBridge};

use anyhow::Result;

/// Outcome of one full content-script detection pass.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    pub environment: Option<Environment>,
    pub badge_inserted: bool,
    pub stored: StoredState,
    /// Hand this to the background relay for re-broadcast to the popup.
    pub notification: Message,
}

/// One full detection pass: reconcile the badge, persist the verdict, and
/// produce the update notification. This is what runs at document-ready and
/// again after each settled SPA navigation.
pub fn run_detection<S: KeyValueStore>(
    doc: &mut PageDocument,
    store: &mut S,
) -> Result<DetectionReport> {
    let outcome = reconciler::reconcile(doc);

    let mut bridge = PersistenceBridge::new(store);
    let stored = bridge.write_state(&outcome.environment, &doc.url)?;

    let notification = Message::EnvironmentUpdated {
        environment: outcome.environment.clone(),
    };

    Ok(DetectionReport {
        environment: outcome.environment,
        badge_inserted: outcome.badge_inserted,
        stored,
        notification,
    })
}

/// Content-script side of the message protocol. Returns `None` for tags the
/// content context does not answer.
pub fn handle_page_message(message: &Message, doc: &mut PageDocument) -> Option<Response> {
    match message {
        Message::GetWordPressInfo => Some(Response::Info(prober::probe(doc))),
        Message::Refresh => {
            reconciler::reconcile(doc);
            Some(Response::Ack { success: true })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_page_message_routes_by_tag() {
        let mut doc = PageDocument::new("http://localhost/");
        assert!(matches!(
            handle_page_message(&Message::GetWordPressInfo, &mut doc),
            Some(Response::Info(_))
        ));
        assert_eq!(
            handle_page_message(&Message::Refresh, &mut doc),
            Some(Response::Ack { success: true })
        );
        assert_eq!(handle_page_message(&Message::OpenPopup, &mut doc), None);
    }
}
