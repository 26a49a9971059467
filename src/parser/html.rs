//! HTML snapshot extraction using regex patterns
//!
//! Builds a [`PageDocument`] from raw markup: just the signals the prober
//! and reconciler consume (lang attributes, meta tags, script and
//! stylesheet URLs, body classes, id-carrying elements). Elements found by
//! id become children of the body in document order, which is enough for
//! the anchor chain and the site predicate. Malformed markup degrades to an
//! empty document.

use crate::models::{Element, MetaTag, PageDocument};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_LANG: Regex =
        Regex::new(r#"(?is)<html[^>]*?\slang\s*=\s*"([^"]*)""#).unwrap();
    static ref HTML_XML_LANG: Regex =
        Regex::new(r#"(?is)<html[^>]*?\sxml:lang\s*=\s*"([^"]*)""#).unwrap();
    static ref META_TAG: Regex = Regex::new(r"(?is)<meta\b[^>]*>").unwrap();
    static ref NAME_ATTR: Regex =
        Regex::new(r#"(?i)\bname\s*=\s*"([^"]*)""#).unwrap();
    static ref CONTENT_ATTR: Regex =
        Regex::new(r#"(?i)\bcontent\s*=\s*"([^"]*)""#).unwrap();
    static ref SCRIPT_SRC: Regex =
        Regex::new(r#"(?is)<script[^>]*?\ssrc\s*=\s*"([^"]+)""#).unwrap();
    static ref LINK_TAG: Regex = Regex::new(r"(?is)<link\b[^>]*>").unwrap();
    static ref REL_ATTR: Regex =
        Regex::new(r#"(?i)\brel\s*=\s*"([^"]*)""#).unwrap();
    static ref HREF_ATTR: Regex =
        Regex::new(r#"(?i)\bhref\s*=\s*"([^"]*)""#).unwrap();
    static ref BODY_CLASS: Regex =
        Regex::new(r#"(?is)<body[^>]*?\sclass\s*=\s*"([^"]*)""#).unwrap();
    static ref ID_ATTR: Regex =
        Regex::new(r#"(?i)\sid\s*=\s*"([^"]+)""#).unwrap();
}

/// Parse an HTML snapshot into the document model.
pub fn parse_document(html: &str, url: &str) -> PageDocument {
    let mut doc = PageDocument::new(url);

    doc.lang = HTML_LANG.captures(html).map(|c| c[1].to_string());
    doc.xml_lang = HTML_XML_LANG.captures(html).map(|c| c[1].to_string());

    for tag in META_TAG.find_iter(html) {
        let tag = tag.as_str();
        if let (Some(name), Some(content)) = (NAME_ATTR.captures(tag), CONTENT_ATTR.captures(tag)) {
            doc.meta.push(MetaTag {
                name: name[1].to_string(),
                content: content[1].to_string(),
            });
        }
    }

    for cap in SCRIPT_SRC.captures_iter(html) {
        doc.scripts.push(cap[1].to_string());
    }

    for tag in LINK_TAG.find_iter(html) {
        let tag = tag.as_str();
        let is_stylesheet = REL_ATTR
            .captures(tag)
            .is_some_and(|c| c[1].eq_ignore_ascii_case("stylesheet"));
        if is_stylesheet {
            if let Some(href) = HREF_ATTR.captures(tag) {
                doc.stylesheets.push(href[1].to_string());
            }
        }
    }

    if let Some(cap) = BODY_CLASS.captures(html) {
        doc.body.classes = cap[1].split_whitespace().map(str::to_string).collect();
    }

    // Flatten id-carrying elements into the body in document order. Nesting
    // is not reconstructed; lookups and append anchors do not need it.
    let mut seen = Vec::new();
    for cap in ID_ATTR.captures_iter(html) {
        let id = cap[1].to_string();
        if !seen.contains(&id) {
            seen.push(id.clone());
            doc.body.children.push(Element::new("div").with_id(id));
        }
    }

    doc
}
