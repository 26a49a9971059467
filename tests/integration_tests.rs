//! End-to-end detection scenarios
//!
//! Exercises the full content-script pass (reconcile → persist → notify)
//! and the popup/relay surfaces against realistic page fixtures.

use pretty_assertions::assert_eq;
use wp_env_badge::error::ChannelError;
use wp_env_badge::models::{ColorToken, Element, EnvKind, MetaTag};
use wp_env_badge::popup::{ContentChannel, DisplayCard, PopupPresenter, ScriptInjector};
use wp_env_badge::prober::ADMIN_BAR_ID;
use wp_env_badge::reconciler::{BADGE_ID, ROOT_MENU_ID, SITE_NAME_ID};
use wp_env_badge::relay::{toolbar_badge_for, Relay, RelayAction};
use wp_env_badge::storage::{keys, KeyValueStore};
use wp_env_badge::{probe, run_detection, MemoryStore, PageDocument, PlatformInfo};

/// A WordPress admin page with the usual admin-bar structure.
fn admin_page(url: &str) -> PageDocument {
    let mut doc = PageDocument::new(url);
    doc.meta.push(MetaTag {
        name: "generator".to_string(),
        content: "WordPress 6.4.2".to_string(),
    });
    doc.body = Element::new("body")
        .with_class("wp-admin")
        .with_class("admin-bar")
        .with_child(
            Element::new("div").with_id(ADMIN_BAR_ID).with_child(
                Element::new("ul").with_id(ROOT_MENU_ID).with_child(
                    Element::new("li")
                        .with_id(SITE_NAME_ID)
                        .with_text("My Site"),
                ),
            ),
        );
    doc
}

#[test]
fn localhost_badge_inserted_after_site_name() {
    let mut doc = admin_page("http://localhost/wp-admin/");
    let mut store = MemoryStore::new();
    let report = run_detection(&mut doc, &mut store).unwrap();

    let env = report.environment.unwrap();
    assert_eq!(env.kind, EnvKind::Development);
    assert_eq!(env.color, ColorToken::Green);
    assert!(report.badge_inserted);

    let menu = doc.find(ROOT_MENU_ID).unwrap();
    assert!(menu.children[0].has_id(SITE_NAME_ID));
    assert!(menu.children[1].has_id(BADGE_ID));
}

#[test]
fn staging_toolbar_badge_matches_page_verdict() {
    let badge = toolbar_badge_for("https://myapp.staging.example.com/").unwrap();
    assert_eq!(badge.text, "STG");
    assert!(badge.tooltip.contains("Staging detected"));

    // The in-page channel agrees with the toolbar channel.
    let mut doc = admin_page("https://myapp.staging.example.com/wp-admin/");
    let mut store = MemoryStore::new();
    let report = run_detection(&mut doc, &mut store).unwrap();
    assert_eq!(report.environment.unwrap().kind, EnvKind::Staging);
}

#[test]
fn production_clears_stored_environment() {
    let mut store = MemoryStore::new();

    let mut doc = admin_page("https://staging.example.com/wp-admin/");
    run_detection(&mut doc, &mut store).unwrap();
    assert!(store.get(keys::CURRENT_ENVIRONMENT).unwrap().is_some());

    let mut doc = admin_page("https://www.example.com/wp-admin/");
    let report = run_detection(&mut doc, &mut store).unwrap();
    assert_eq!(report.environment, None);
    assert_eq!(doc.count_by_id(BADGE_ID), 0);
    assert_eq!(store.get(keys::CURRENT_ENVIRONMENT).unwrap(), None);
    assert_eq!(
        store.get(keys::CURRENT_URL).unwrap().as_deref(),
        Some("https://www.example.com/wp-admin/")
    );
}

#[test]
fn version_detection_prefers_generator_then_script() {
    let mut with_generator = PageDocument::new("http://localhost/");
    with_generator.meta.push(MetaTag {
        name: "generator".to_string(),
        content: "WordPress 6.4.2".to_string(),
    });
    assert_eq!(probe(&with_generator).version, "6.4.2");

    let mut script_only = PageDocument::new("http://localhost/");
    script_only
        .scripts
        .push("wp-includes/js/wp-5.9.min.js".to_string());
    assert_eq!(probe(&script_only).version, "5.9");
}

struct DeadChannel;
impl ContentChannel for DeadChannel {
    fn request_info(&mut self) -> Result<PlatformInfo, ChannelError> {
        Err(ChannelError::NoReceiver)
    }
}

struct InjectedProbe(PageDocument);
impl ScriptInjector for InjectedProbe {
    fn inject_probe(&mut self) -> Option<PlatformInfo> {
        Some(probe(&self.0))
    }
}

struct BrokenInjector;
impl ScriptInjector for BrokenInjector {
    fn inject_probe(&mut self) -> Option<PlatformInfo> {
        None
    }
}

#[test]
fn popup_falls_back_to_injection() {
    let mut page = admin_page("http://localhost/wp-admin/");
    page.lang = Some("en-US".to_string());
    page.stylesheets
        .push("/wp-content/themes/astra/style.css".to_string());

    let mut presenter = PopupPresenter::new();
    let state = presenter.refresh(
        "http://localhost/wp-admin/",
        &mut DeadChannel,
        &mut InjectedProbe(page),
    );
    assert_eq!(state.info.version, "6.4.2");
    assert_eq!(state.info.language, "en-US");
    assert_eq!(state.info.theme, "astra");

    // Injection failing too leaves the three sentinel dashes.
    let state = presenter.refresh("http://localhost/wp-admin/", &mut DeadChannel, &mut BrokenInjector);
    assert_eq!(state.info, PlatformInfo::unknown());
    let card = DisplayCard::from_state(state);
    assert_eq!(card.version, "-");
    assert_eq!(card.label, "Development");
}

#[test]
fn full_propagation_content_to_popup() {
    // Content pass produces a notification...
    let mut doc = admin_page("https://preview.example.com/wp-admin/");
    let mut store = MemoryStore::new();
    let report = run_detection(&mut doc, &mut store).unwrap();

    // ...the relay re-broadcasts it...
    let broadcast = match Relay::new().dispatch(report.notification) {
        RelayAction::Broadcast(msg) => msg,
        other => panic!("expected broadcast, got {other:?}"),
    };

    // ...and an open popup refreshes off it.
    let mut presenter = PopupPresenter::new();
    presenter.refresh(
        "https://preview.example.com/wp-admin/",
        &mut DeadChannel,
        &mut BrokenInjector,
    );
    assert!(presenter.on_broadcast(&broadcast, &mut DeadChannel, &mut BrokenInjector));
    assert_eq!(
        presenter.state().environment.as_ref().unwrap().kind,
        EnvKind::Staging
    );
}

#[test]
fn popup_reads_stored_state_as_cache() {
    let mut doc = admin_page("https://demo.example.com/wp-admin/");
    let mut store = MemoryStore::new();
    run_detection(&mut doc, &mut store).unwrap();

    let bridge = wp_env_badge::PersistenceBridge::new(&mut store);
    let cached = bridge.load_state().unwrap().unwrap();
    assert_eq!(cached.current_url, "https://demo.example.com/wp-admin/");
    assert_eq!(cached.current_environment.unwrap().kind, EnvKind::Staging);
}
