//! Environment verdict value object

use serde::{Deserialize, Serialize};

/// Top-level classification kind. Production is represented by the absence of
/// an [`Environment`] value (`Option::None`), never by a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvKind {
    Development,
    Staging,
}

impl EnvKind {
    pub fn token(&self) -> &'static str {
        match self {
            EnvKind::Development => "development",
            EnvKind::Staging => "staging",
        }
    }
}

/// Sub-reason for a Development verdict. Encoded in the badge color only;
/// both origins share the Development kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevOrigin {
    /// `localhost` or a `127.*` loopback address.
    Local,
    /// A development top-level-domain suffix such as `.dev` or `.test`.
    Tld,
}

/// Display color for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Teal,
    Orange,
}

impl ColorToken {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorToken::Green => "wp-env-green",
            ColorToken::Teal => "wp-env-teal",
            ColorToken::Orange => "wp-env-orange",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Green => "#46b450",
            ColorToken::Teal => "#00a0d2",
            ColorToken::Orange => "#ffb900",
        }
    }
}

/// Reference to a bundled badge icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRef {
    Development,
    Staging,
}

impl IconRef {
    pub fn path(&self) -> &'static str {
        match self {
            IconRef::Development => "icons/badge-development.svg",
            IconRef::Staging => "icons/badge-staging.svg",
        }
    }
}

/// Classification verdict for a hostname. Immutable once constructed;
/// re-derived on every classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub kind: EnvKind,
    pub label: String,
    pub color: ColorToken,
    pub icon: IconRef,
}

impl Environment {
    pub fn development(origin: DevOrigin) -> Self {
        Self {
            kind: EnvKind::Development,
            label: "Development".to_string(),
            color: match origin {
                DevOrigin::Local => ColorToken::Green,
                DevOrigin::Tld => ColorToken::Teal,
            },
            icon: IconRef::Development,
        }
    }

    pub fn staging() -> Self {
        Self {
            kind: EnvKind::Staging,
            label: "Staging".to_string(),
            color: ColorToken::Orange,
            icon: IconRef::Staging,
        }
    }

    /// Which development sub-reason produced this verdict, recovered from the
    /// color encoding. `None` for staging.
    pub fn dev_origin(&self) -> Option<DevOrigin> {
        match (self.kind, self.color) {
            (EnvKind::Development, ColorToken::Green) => Some(DevOrigin::Local),
            (EnvKind::Development, ColorToken::Teal) => Some(DevOrigin::Tld),
            _ => None,
        }
    }

    /// Short code used for the toolbar badge text.
    pub fn short_code(&self) -> &'static str {
        match self.kind {
            EnvKind::Development => "DEV",
            EnvKind::Staging => "STG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_variants_share_kind_but_not_color() {
        let local = Environment::development(DevOrigin::Local);
        let tld = Environment::development(DevOrigin::Tld);
        assert_eq!(local.kind, tld.kind);
        assert_ne!(local.color, tld.color);
        assert_eq!(local.dev_origin(), Some(DevOrigin::Local));
        assert_eq!(tld.dev_origin(), Some(DevOrigin::Tld));
        assert_ne!(local.color.hex(), tld.color.hex());
        assert_ne!(local.color.css_class(), tld.color.css_class());
    }

    #[test]
    fn test_staging_has_no_dev_origin() {
        assert_eq!(Environment::staging().dev_origin(), None);
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let env = Environment::staging();
        let json = serde_json::to_string(&env).unwrap();
        assert!(json.contains("\"kind\":\"staging\""));
        assert!(json.contains("\"color\":\"orange\""));
        let back: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
