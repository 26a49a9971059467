//! Platform metadata detection heuristics
//!
//! Three independent detectors (version, language, theme), each a layered
//! fallback chain ending in the `-` sentinel, plus the WordPress-site
//! predicate that gates badge reconciliation. All detectors are read-only
//! against the document snapshot.

use crate::models::{PageDocument, PlatformInfo, UNKNOWN};
use lazy_static::lazy_static;
use regex::Regex;

/// Admin-bar root element id.
pub const ADMIN_BAR_ID: &str = "wpadminbar";

/// Body classes indicating an admin-mode page.
pub const ADMIN_BODY_CLASSES: &[&str] = &["wp-admin", "admin-bar"];

/// Admin-area container element ids.
pub const ADMIN_AREA_IDS: &[&str] = &["adminmenu", "wpwrap", "wpcontent"];

/// Path marker for core library scripts carrying a version token.
pub const INCLUDES_MARKER: &str = "wp-includes/";

/// Path marker preceding a theme folder name in stylesheet URLs.
pub const THEMES_MARKER: &str = "/themes/";

lazy_static! {
    // "WordPress 6.4.2" inside the generator meta content.
    static ref GENERATOR_VERSION: Regex =
        Regex::new(r"WordPress\s+(\d+(?:\.\d+)*)").unwrap();

    // Version token embedded in a script filename, e.g. wp-5.9.min.js.
    static ref SCRIPT_VERSION: Regex =
        Regex::new(r"(\d+\.\d+(?:\.\d+)?)(?:\.min)?\.js(?:\?|$)").unwrap();

    // theme-<name> body class token.
    static ref THEME_CLASS: Regex =
        Regex::new(r"^theme-([A-Za-z0-9_-]+)$").unwrap();
}

/// Extract version, language and theme from a document snapshot. Every
/// slot is always populated, with `-` standing in for a failed chain.
pub fn probe(doc: &PageDocument) -> PlatformInfo {
    PlatformInfo {
        version: detect_version(doc),
        language: detect_language(doc),
        theme: detect_theme(doc),
    }
}

fn detect_version(doc: &PageDocument) -> String {
    if let Some(content) = doc.meta_content("generator") {
        if let Some(cap) = GENERATOR_VERSION.captures(content) {
            return cap[1].to_string();
        }
    }
    for src in &doc.scripts {
        if src.contains(INCLUDES_MARKER) {
            if let Some(cap) = SCRIPT_VERSION.captures(src) {
                return cap[1].to_string();
            }
        }
    }
    UNKNOWN.to_string()
}

fn detect_language(doc: &PageDocument) -> String {
    doc.lang
        .as_deref()
        .or(doc.xml_lang.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), str::to_string)
}

fn detect_theme(doc: &PageDocument) -> String {
    for class in &doc.body.classes {
        if let Some(cap) = THEME_CLASS.captures(class) {
            return cap[1].to_string();
        }
    }
    for href in &doc.stylesheets {
        if let Some(idx) = href.find(THEMES_MARKER) {
            let rest = &href[idx + THEMES_MARKER.len()..];
            let name = rest.split('/').next().unwrap_or("");
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }
    UNKNOWN.to_string()
}

/// True when the document looks like a WordPress page. A disjunction; any
/// one signal suffices.
pub fn is_wordpress_site(doc: &PageDocument) -> bool {
    doc.find(ADMIN_BAR_ID).is_some()
        || ADMIN_BODY_CLASSES.iter().any(|c| doc.body_has_class(c))
        || ADMIN_AREA_IDS.iter().any(|id| doc.find(id).is_some())
        || doc
            .meta_content("generator")
            .is_some_and(|c| c.contains("WordPress"))
}
