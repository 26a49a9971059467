//! Hostname → environment classification
//!
//! Pure, deterministic, case-insensitive. Rules run in strict order and the
//! first match wins; `.test` matches both the dev-suffix rule and the
//! `test` staging pattern, and the suffix rule must stay ahead; flipping
//! the order reclassifies every `*.test` hostname.

use crate::models::{DevOrigin, Environment};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use url::Url;

/// Development top-level-domain suffixes (rule 2).
pub const DEV_SUFFIXES: &[&str] = &[".dev", ".test", ".local"];

/// Staging substring patterns (rule 3), matched case-insensitively.
pub const STAGING_PATTERNS: &[&str] = &["staging", "stage", "preview", "demo", "test"];

lazy_static! {
    static ref DEFAULT_CONFIG: ClassifierConfig = ClassifierConfig::default();
}

/// Rule sets driving classification. The defaults mirror the shipped
/// extension; both sets are overridable together via [`ClassifierConfig::new`].
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    dev_suffixes: Vec<String>,
    staging_patterns: Vec<Regex>,
}

impl ClassifierConfig {
    pub fn new(
        dev_suffixes: &[&str],
        staging_patterns: &[&str],
    ) -> Result<Self, regex::Error> {
        let staging_patterns = staging_patterns
            .iter()
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            dev_suffixes: dev_suffixes.iter().map(|s| s.to_string()).collect(),
            staging_patterns,
        })
    }

    /// Classify a bare hostname. Returns `None` for production (no verdict).
    pub fn classify(&self, hostname: &str) -> Option<Environment> {
        let host = hostname.trim().to_ascii_lowercase();
        if host.is_empty() {
            return None;
        }

        // Rule 1: loopback.
        if host == "localhost" || host.starts_with("127.") {
            return Some(Environment::development(DevOrigin::Local));
        }

        // Rule 2: development TLD suffix. Checked before the staging
        // patterns so `.test` lands here, not in rule 3.
        if self.dev_suffixes.iter().any(|s| host.ends_with(s.as_str())) {
            return Some(Environment::development(DevOrigin::Tld));
        }

        // Rule 3: staging substring patterns.
        if self.staging_patterns.iter().any(|re| re.is_match(&host)) {
            return Some(Environment::staging());
        }

        None
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        // Both default sets are literal patterns; compilation cannot fail.
        Self::new(DEV_SUFFIXES, STAGING_PATTERNS).unwrap()
    }
}

/// Shared default rule sets, compiled once.
pub fn default_config() -> &'static ClassifierConfig {
    &DEFAULT_CONFIG
}

/// Classify a hostname against the default rule sets.
pub fn classify(hostname: &str) -> Option<Environment> {
    DEFAULT_CONFIG.classify(hostname)
}

/// Lowercased hostname of an HTTP(S) URL. Malformed URLs and non-web
/// schemes resolve to `None`; nothing is propagated to the caller.
pub fn hostname_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}

/// Classify a full URL. Unparseable input is production (no badge).
pub fn classify_url(url: &str) -> Option<Environment> {
    classify(&hostname_of(url)?)
}
