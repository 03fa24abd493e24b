//! Validator configuration (`lufa-theme.toml`)
//!
//! ```toml
//! prefix = "lufa"
//!
//! [checks]
//! completeness = true
//! contrast = true
//! format = true
//!
//! [contrast]
//! level = "aa"
//! extra_pairs = [
//!   { foreground = "brand-ink", background = "brand-paper", type = "text" },
//! ]
//!
//! [completeness]
//! required = ["--lufa-semantic-ui-text-primary"]
//! ```
//!
//! Every field is optional; an empty document yields [`ValidatorConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::manifest::{ColorPair, ContrastCatalog, TokenManifest, DEFAULT_PREFIX};
use crate::validate::ConformanceLevel;

/// Top-level validator configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidatorConfig {
    /// Token namespace, without the leading `--`
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub contrast: ContrastConfig,
    #[serde(default)]
    pub completeness: CompletenessConfig,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

/// Which validators run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChecksConfig {
    #[serde(default = "default_true")]
    pub completeness: bool,
    #[serde(default = "default_true")]
    pub contrast: bool,
    #[serde(default = "default_true")]
    pub format: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            completeness: true,
            contrast: true,
            format: true,
        }
    }
}

/// Contrast check settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContrastConfig {
    #[serde(default)]
    pub level: ConformanceLevel,
    /// Replaces the built-in catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<ColorPair>>,
    /// Appended to the catalog in use
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_pairs: Vec<ColorPair>,
}

/// Completeness check settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompletenessConfig {
    /// Full token names; replaces the built-in manifest when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            checks: ChecksConfig::default(),
            contrast: ContrastConfig::default(),
            completeness: CompletenessConfig::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse and check a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: ValidatorConfig = toml::from_str(src)?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings that could never match a custom property
    pub fn check(&self) -> Result<()> {
        validate_prefix(&self.prefix)?;
        if let Some(pairs) = &self.contrast.pairs {
            ContrastCatalog::new(pairs.clone())?;
        }
        ContrastCatalog::new(self.contrast.extra_pairs.clone())?;
        if let Some(required) = &self.completeness.required {
            TokenManifest::new(required.clone())?;
        }
        Ok(())
    }

    /// Contrast catalog after applying `pairs` and `extra_pairs`
    pub fn catalog(&self) -> Result<ContrastCatalog> {
        let base = match &self.contrast.pairs {
            Some(pairs) => ContrastCatalog::new(pairs.clone())?,
            None => ContrastCatalog::lufa(),
        };
        base.extended(self.contrast.extra_pairs.clone())
    }

    /// Required-token manifest, either configured or built in for the prefix
    pub fn manifest(&self) -> Result<TokenManifest> {
        match &self.completeness.required {
            Some(required) => TokenManifest::new(required.clone()),
            None => Ok(TokenManifest::lufa(&self.prefix)),
        }
    }
}

/// `[A-Za-z0-9][A-Za-z0-9_-]*`, not ending in `-`
pub fn validate_prefix(prefix: &str) -> Result<()> {
    let mut chars = prefix.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !prefix.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidPrefix(prefix.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ContrastKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.prefix, "lufa");
        assert!(config.checks.completeness && config.checks.contrast && config.checks.format);
        assert_eq!(config.contrast.level, ConformanceLevel::Aa);
    }

    #[test]
    fn full_document() {
        let config = ValidatorConfig::from_toml_str(
            r#"
prefix = "acme"

[checks]
format = false

[contrast]
level = "aaa"
pairs = [
  { foreground = "ink", background = "paper", type = "text" },
]
extra_pairs = [
  { foreground = "rule", background = "paper", kind = "ui" },
]

[completeness]
required = ["--acme-ink", "--acme-paper"]
"#,
        )
        .unwrap();

        assert_eq!(config.prefix, "acme");
        assert!(config.checks.completeness);
        assert!(!config.checks.format);
        assert_eq!(config.contrast.level, ConformanceLevel::Aaa);

        let catalog = config.catalog().unwrap();
        assert_eq!(
            catalog.pairs(),
            &[
                ColorPair::new("ink", "paper", ContrastKind::Text),
                ColorPair::new("rule", "paper", ContrastKind::Ui),
            ]
        );
        assert_eq!(config.manifest().unwrap().required(), &["--acme-ink", "--acme-paper"]);
    }

    #[test]
    fn extra_pairs_extend_builtin_catalog() {
        let config = ValidatorConfig::from_toml_str(
            "[contrast]\nextra_pairs = [{ foreground = \"a\", background = \"b\", type = \"ui\" }]",
        )
        .unwrap();
        assert_eq!(config.catalog().unwrap().len(), ContrastCatalog::lufa().len() + 1);
    }

    #[test]
    fn builtin_manifest_follows_prefix() {
        let config = ValidatorConfig::from_toml_str("prefix = \"acme\"").unwrap();
        let manifest = config.manifest().unwrap();
        assert!(manifest.required().iter().all(|name| name.starts_with("--acme-")));
    }

    #[test]
    fn rejects_bad_prefix() {
        for bad in ["", "--lufa", "lufa-", "lu fa", "-lufa"] {
            assert!(
                matches!(validate_prefix(bad), Err(ConfigError::InvalidPrefix(_))),
                "{bad:?}"
            );
        }
        assert!(validate_prefix("my_theme-2").is_ok());
        assert!(ValidatorConfig::from_toml_str("prefix = \"\"").is_err());
    }

    #[test]
    fn rejects_bad_entries() {
        let err = ValidatorConfig::from_toml_str(
            "[contrast]\npairs = [{ foreground = \"\", background = \"b\", type = \"text\" }]",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPairToken { index: 0, side: "foreground" }));

        let err =
            ValidatorConfig::from_toml_str("[completeness]\nrequired = [\"lufa-x\"]").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRequiredToken(_)));

        let err = ValidatorConfig::from_toml_str("[contrast]\nlevel = \"a\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
