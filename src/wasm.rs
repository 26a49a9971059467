//! WebAssembly bindings for the extension contexts
//!
//! Thin JSON-in/JSON-out surface so the content script, background worker,
//! and popup all call the same classification, probing, and reconciliation
//! logic instead of re-implementing it per context.

use serde_json::json;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for readable errors in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Classify a tab URL. Returns the environment as a JSON value, or JSON
/// `null` for production / unparseable input.
#[wasm_bindgen]
pub fn classify_url_json(url: &str) -> Result<String, JsValue> {
    serde_json::to_string(&crate::classify_url(url)).map_err(to_js_error)
}

/// Probe an HTML snapshot for platform metadata. All three slots are always
/// present, with `-` for a failed detector chain.
#[wasm_bindgen]
pub fn probe_html(html: &str, url: &str) -> Result<String, JsValue> {
    let doc = crate::parse_document(html, url);
    serde_json::to_string(&crate::probe(&doc)).map_err(to_js_error)
}

/// Full detection summary for one page snapshot: verdict, WordPress
/// predicate, and probed metadata.
#[wasm_bindgen]
pub fn detect_page(html: &str, url: &str) -> Result<String, JsValue> {
    let doc = crate::parse_document(html, url);
    let environment = doc.hostname().and_then(|h| crate::classify(&h));
    let summary = json!({
        "environment": environment,
        "wordpress": crate::is_wordpress_site(&doc),
        "info": crate::probe(&doc),
    });
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "detect_page: wordpress={} environment={}",
        summary["wordpress"],
        summary["environment"]
    )));
    serde_json::to_string(&summary).map_err(to_js_error)
}

fn to_js_error(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
