//! Built-in Lufa token manifest and contrast catalog
//!
//! Both are plain values handed to the validators, so alternate design
//! systems (or tests) can supply their own.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Token prefix of the Lufa design system
pub const DEFAULT_PREFIX: &str = "lufa";

/// Whether a pair carries text or a non-text UI element
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastKind {
    /// Body text and labels
    Text,
    /// Borders, icons, focus rings and other graphical objects
    Ui,
}

impl std::fmt::Display for ContrastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastKind::Text => write!(f, "text"),
            ContrastKind::Ui => write!(f, "ui"),
        }
    }
}

/// A foreground/background token pair that must stay legible
///
/// Both sides are token suffixes (the part after `--<prefix>-`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: ContrastKind,
}

impl ColorPair {
    pub fn new(
        foreground: impl Into<String>,
        background: impl Into<String>,
        kind: ContrastKind,
    ) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            kind,
        }
    }

    /// Full foreground token name for a prefix
    pub fn foreground_token(&self, prefix: &str) -> String {
        format!("--{prefix}-{}", self.foreground)
    }

    /// Full background token name for a prefix
    pub fn background_token(&self, prefix: &str) -> String {
        format!("--{prefix}-{}", self.background)
    }
}

/// Immutable list of pairs checked by the contrast validator
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContrastCatalog {
    pairs: Vec<ColorPair>,
}

impl ContrastCatalog {
    /// Build a catalog, rejecting pairs with an empty side
    pub fn new(pairs: Vec<ColorPair>) -> Result<Self> {
        for (index, pair) in pairs.iter().enumerate() {
            if pair.foreground.trim().is_empty() {
                return Err(ConfigError::EmptyPairToken {
                    index,
                    side: "foreground",
                });
            }
            if pair.background.trim().is_empty() {
                return Err(ConfigError::EmptyPairToken {
                    index,
                    side: "background",
                });
            }
        }
        Ok(Self { pairs })
    }

    /// The catalog of semantic and component pairs shipped with Lufa
    pub fn lufa() -> Self {
        let pairs = LUFA_CONTRAST_PAIRS
            .iter()
            .map(|&(fg, bg, kind)| ColorPair::new(fg, bg, kind))
            .collect();
        Self { pairs }
    }

    /// Return a catalog with additional pairs appended
    pub fn extended(mut self, extra: Vec<ColorPair>) -> Result<Self> {
        let extra = Self::new(extra)?;
        self.pairs.extend(extra.pairs);
        Ok(self)
    }

    pub fn pairs(&self) -> &[ColorPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Ordered list of token names a theme must define
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenManifest {
    required: Vec<String>,
}

impl TokenManifest {
    /// Build a manifest from full token names (`--lufa-...`)
    pub fn new(required: Vec<String>) -> Result<Self> {
        if let Some(bad) = required.iter().find(|name| !name.starts_with("--")) {
            return Err(ConfigError::InvalidRequiredToken(bad.clone()));
        }
        Ok(Self { required })
    }

    /// The tokens every Lufa theme must define, under the given prefix
    pub fn lufa(prefix: &str) -> Self {
        Self {
            required: LUFA_REQUIRED_TOKENS
                .iter()
                .map(|suffix| format!("--{prefix}-{suffix}"))
                .collect(),
        }
    }

    /// Parse a manifest file: one token per line, `#` and `//` comments
    pub fn parse_list(src: &str) -> Result<Self> {
        let required = src
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
            .map(str::to_string)
            .collect();
        Self::new(required)
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}

/// Required token suffixes, grouped by layer
pub const LUFA_REQUIRED_TOKENS: &[&str] = &[
    // Semantic text
    "semantic-ui-text-primary",
    "semantic-ui-text-secondary",
    "semantic-ui-text-tertiary",
    "semantic-ui-text-disabled",
    "semantic-ui-text-inverse",
    "semantic-ui-text-link",
    "semantic-ui-text-link-hover",
    "semantic-ui-text-on-brand",
    "semantic-ui-text-success",
    "semantic-ui-text-warning",
    "semantic-ui-text-error",
    "semantic-ui-text-info",
    // Semantic backgrounds
    "semantic-ui-background-page",
    "semantic-ui-background-surface",
    "semantic-ui-background-raised",
    "semantic-ui-background-sunken",
    "semantic-ui-background-inverse",
    "semantic-ui-background-brand",
    "semantic-ui-background-brand-hover",
    "semantic-ui-background-brand-subtle",
    "semantic-ui-background-success-subtle",
    "semantic-ui-background-warning-subtle",
    "semantic-ui-background-error-subtle",
    "semantic-ui-background-info-subtle",
    "semantic-ui-background-disabled",
    // Semantic borders
    "semantic-ui-border-default",
    "semantic-ui-border-strong",
    "semantic-ui-border-subtle",
    "semantic-ui-border-focus",
    "semantic-ui-border-brand",
    "semantic-ui-border-success",
    "semantic-ui-border-warning",
    "semantic-ui-border-error",
    // Semantic icons
    "semantic-ui-icon-primary",
    "semantic-ui-icon-secondary",
    "semantic-ui-icon-inverse",
    "semantic-ui-icon-brand",
    "semantic-ui-icon-success",
    "semantic-ui-icon-warning",
    "semantic-ui-icon-error",
    "semantic-ui-icon-info",
    // Components
    "component-button-primary-text",
    "component-button-primary-background",
    "component-button-primary-background-hover",
    "component-button-secondary-text",
    "component-button-secondary-background",
    "component-button-secondary-background-hover",
    "component-button-secondary-border",
    "component-button-danger-text",
    "component-button-danger-background",
    "component-button-danger-background-hover",
    "component-input-text",
    "component-input-placeholder",
    "component-input-background",
    "component-input-border",
    "component-input-border-focus",
    "component-input-border-error",
    "component-badge-text",
    "component-badge-background",
    "component-tooltip-text",
    "component-tooltip-background",
    "component-alert-success-text",
    "component-alert-success-background",
    "component-alert-warning-text",
    "component-alert-warning-background",
    "component-alert-error-text",
    "component-alert-error-background",
    "component-alert-info-text",
    "component-alert-info-background",
    "component-tag-text",
    "component-tag-background",
    "component-navigation-text",
    "component-navigation-text-active",
    "component-navigation-background",
    "component-navigation-border-active",
    "component-checkbox-border",
    "component-checkbox-background-checked",
    "component-checkbox-icon",
    "component-card-background",
    "component-card-border",
    // Core scales
    "core-spacing-xs",
    "core-spacing-sm",
    "core-spacing-md",
    "core-spacing-lg",
    "core-spacing-xl",
    "core-radius-sm",
    "core-radius-md",
    "core-radius-lg",
    "core-radius-full",
    "core-border-width-thin",
    "core-border-width-thick",
    "core-font-family-base",
    "core-font-family-mono",
    "core-font-size-sm",
    "core-font-size-md",
    "core-font-size-lg",
    "core-font-size-xl",
    "core-font-weight-regular",
    "core-font-weight-medium",
    "core-font-weight-bold",
    "core-line-height-tight",
    "core-line-height-normal",
    "core-letter-spacing-normal",
    "core-shadow-sm",
    "core-shadow-md",
    "core-shadow-lg",
    "core-duration-fast",
    "core-duration-normal",
    "core-easing-standard",
    "core-opacity-disabled",
    "core-z-index-dropdown",
    "core-z-index-modal",
    "core-z-index-tooltip",
];

use ContrastKind::{Text, Ui};

/// Pairs that must remain legible: (foreground suffix, background suffix, kind)
pub const LUFA_CONTRAST_PAIRS: &[(&str, &str, ContrastKind)] = &[
    // Text on page and surfaces
    ("semantic-ui-text-primary", "semantic-ui-background-page", Text),
    ("semantic-ui-text-primary", "semantic-ui-background-surface", Text),
    ("semantic-ui-text-primary", "semantic-ui-background-raised", Text),
    ("semantic-ui-text-primary", "semantic-ui-background-sunken", Text),
    ("semantic-ui-text-secondary", "semantic-ui-background-page", Text),
    ("semantic-ui-text-secondary", "semantic-ui-background-surface", Text),
    ("semantic-ui-text-tertiary", "semantic-ui-background-page", Text),
    ("semantic-ui-text-link", "semantic-ui-background-page", Text),
    ("semantic-ui-text-link", "semantic-ui-background-surface", Text),
    ("semantic-ui-text-link-hover", "semantic-ui-background-page", Text),
    ("semantic-ui-text-inverse", "semantic-ui-background-inverse", Text),
    ("semantic-ui-text-on-brand", "semantic-ui-background-brand", Text),
    ("semantic-ui-text-on-brand", "semantic-ui-background-brand-hover", Text),
    ("semantic-ui-text-primary", "semantic-ui-background-brand-subtle", Text),
    // Status text
    ("semantic-ui-text-success", "semantic-ui-background-page", Text),
    ("semantic-ui-text-warning", "semantic-ui-background-page", Text),
    ("semantic-ui-text-error", "semantic-ui-background-page", Text),
    ("semantic-ui-text-info", "semantic-ui-background-page", Text),
    ("semantic-ui-text-success", "semantic-ui-background-success-subtle", Text),
    ("semantic-ui-text-warning", "semantic-ui-background-warning-subtle", Text),
    ("semantic-ui-text-error", "semantic-ui-background-error-subtle", Text),
    ("semantic-ui-text-info", "semantic-ui-background-info-subtle", Text),
    // Borders
    ("semantic-ui-border-strong", "semantic-ui-background-page", Ui),
    ("semantic-ui-border-focus", "semantic-ui-background-page", Ui),
    ("semantic-ui-border-focus", "semantic-ui-background-surface", Ui),
    ("semantic-ui-border-brand", "semantic-ui-background-page", Ui),
    ("semantic-ui-border-success", "semantic-ui-background-page", Ui),
    ("semantic-ui-border-warning", "semantic-ui-background-page", Ui),
    ("semantic-ui-border-error", "semantic-ui-background-page", Ui),
    // Icons
    ("semantic-ui-icon-primary", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-secondary", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-inverse", "semantic-ui-background-inverse", Ui),
    ("semantic-ui-icon-brand", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-success", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-warning", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-error", "semantic-ui-background-page", Ui),
    ("semantic-ui-icon-info", "semantic-ui-background-page", Ui),
    ("semantic-ui-background-brand", "semantic-ui-background-page", Ui),
    // Buttons
    ("component-button-primary-text", "component-button-primary-background", Text),
    ("component-button-primary-text", "component-button-primary-background-hover", Text),
    ("component-button-primary-background", "semantic-ui-background-page", Ui),
    ("component-button-secondary-text", "component-button-secondary-background", Text),
    ("component-button-secondary-text", "component-button-secondary-background-hover", Text),
    ("component-button-secondary-border", "semantic-ui-background-page", Ui),
    ("component-button-danger-text", "component-button-danger-background", Text),
    ("component-button-danger-text", "component-button-danger-background-hover", Text),
    // Inputs
    ("component-input-text", "component-input-background", Text),
    ("component-input-placeholder", "component-input-background", Text),
    ("component-input-border", "component-input-background", Ui),
    ("component-input-border-focus", "component-input-background", Ui),
    ("component-input-border-error", "component-input-background", Ui),
    // Feedback and labels
    ("component-badge-text", "component-badge-background", Text),
    ("component-tooltip-text", "component-tooltip-background", Text),
    ("component-alert-success-text", "component-alert-success-background", Text),
    ("component-alert-warning-text", "component-alert-warning-background", Text),
    ("component-alert-error-text", "component-alert-error-background", Text),
    ("component-alert-info-text", "component-alert-info-background", Text),
    ("component-tag-text", "component-tag-background", Text),
    // Navigation and selection controls
    ("component-navigation-text", "component-navigation-background", Text),
    ("component-navigation-text-active", "component-navigation-background", Text),
    ("component-navigation-border-active", "component-navigation-background", Ui),
    ("component-checkbox-border", "semantic-ui-background-surface", Ui),
    ("component-checkbox-icon", "component-checkbox-background-checked", Ui),
];
