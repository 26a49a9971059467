//! Idempotent badge reconciliation
//!
//! Owns exactly one element in the host page. Safe to re-run arbitrarily
//! often: step 1 removes any existing badge before deciding whether a new
//! one belongs, so overlapping triggers (rapid SPA navigations) converge
//! without locking.

pub mod observer;

pub use observer::NavigationWatcher;

use crate::classifier::ClassifierConfig;
use crate::models::{Element, Environment, PageDocument};
use crate::prober::{is_wordpress_site, ADMIN_BAR_ID};

/// Reserved id of the injected badge element. Other components may look it
/// up but never mutate it.
pub const BADGE_ID: &str = "wp-env-badge";

/// Class on the inner actionable label.
pub const BADGE_LABEL_CLASS: &str = "wp-env-badge-label";

/// Preferred anchor: the admin-bar site-name item.
pub const SITE_NAME_ID: &str = "wp-admin-bar-site-name";

/// Fallback anchor: the admin-bar top-level menu list.
pub const ROOT_MENU_ID: &str = "wp-admin-bar-root-default";

/// Where the badge ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPoint {
    AfterSiteName,
    RootMenu,
    AdminBar,
}

#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub environment: Option<Environment>,
    pub badge_inserted: bool,
    pub anchor: Option<AnchorPoint>,
}

impl ReconcileOutcome {
    fn absent() -> Self {
        Self {
            environment: None,
            badge_inserted: false,
            anchor: None,
        }
    }
}

/// Run one reconciliation pass with the default classifier rules.
pub fn reconcile(doc: &mut PageDocument) -> ReconcileOutcome {
    reconcile_with(crate::classifier::default_config(), doc)
}

/// Run one reconciliation pass.
///
/// The badge exists afterwards iff the document is a WordPress page and the
/// hostname classifies as a non-production environment, and even then only
/// when one of the known anchor points is present in the page.
pub fn reconcile_with(config: &ClassifierConfig, doc: &mut PageDocument) -> ReconcileOutcome {
    // Unconditional removal keeps the at-most-one invariant without a lock.
    doc.remove(BADGE_ID);

    if !is_wordpress_site(doc) {
        return ReconcileOutcome::absent();
    }
    let Some(host) = doc.hostname() else {
        return ReconcileOutcome::absent();
    };
    let Some(environment) = config.classify(&host) else {
        return ReconcileOutcome::absent();
    };

    let badge = build_badge(&environment);
    let anchor = insert_badge(doc, badge);
    if anchor.is_none() {
        log::debug!("no anchor point for badge on {host}; skipping insertion");
    }

    ReconcileOutcome {
        environment: Some(environment),
        badge_inserted: anchor.is_some(),
        anchor,
    }
}

/// Container plus inner actionable label. Activation routes an `openPopup`
/// message through the background relay; there is no direct coupling from
/// the page DOM to the extension UI.
fn build_badge(environment: &Environment) -> Element {
    let label = Element::new("a")
        .with_class("ab-item")
        .with_class(BADGE_LABEL_CLASS)
        .with_class(environment.color.css_class())
        .with_attr("data-action", "open-popup")
        .with_attr("data-icon", environment.icon.path())
        .with_text(environment.label.clone());
    Element::new("li")
        .with_id(BADGE_ID)
        .with_class(environment.kind.token())
        .with_child(label)
}

fn insert_badge(doc: &mut PageDocument, badge: Element) -> Option<AnchorPoint> {
    if doc.insert_after(SITE_NAME_ID, badge.clone()) {
        return Some(AnchorPoint::AfterSiteName);
    }
    if doc.append_into(ROOT_MENU_ID, badge.clone()) {
        return Some(AnchorPoint::RootMenu);
    }
    if doc.append_into(ADMIN_BAR_ID, badge) {
        return Some(AnchorPoint::AdminBar);
    }
    None
}
