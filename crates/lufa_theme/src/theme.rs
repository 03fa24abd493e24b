//! Runs the configured validators over a theme source

use tracing::{debug, info_span};

use crate::config::ValidatorConfig;
use crate::css::{self, ParsedTheme};
use crate::error::{ParseError, Result};
use crate::report::ThemeReport;
use crate::validate::{CompletenessValidator, ContrastValidator, FormatValidator};

/// The enabled validators, built once from a [`ValidatorConfig`]
///
/// ```
/// use lufa_theme::{ThemeValidator, ValidatorConfig};
///
/// let validator = ThemeValidator::new(&ValidatorConfig::default()).unwrap();
/// let report = validator.validate_source(":root { --lufa-core-spacing-md: 16px; }");
///
/// // Far from complete, but every declared value is well formed
/// assert!(!report.is_valid());
/// assert!(report.format.as_ref().unwrap().valid);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeValidator {
    completeness: Option<CompletenessValidator>,
    contrast: Option<ContrastValidator>,
    format: Option<FormatValidator>,
}

impl ThemeValidator {
    pub fn new(config: &ValidatorConfig) -> Result<Self> {
        config.check()?;
        let checks = &config.checks;

        let completeness = if checks.completeness {
            Some(CompletenessValidator::new(config.manifest()?))
        } else {
            None
        };
        let contrast = if checks.contrast {
            Some(ContrastValidator::new(
                config.prefix.clone(),
                config.catalog()?,
                config.contrast.level,
            ))
        } else {
            None
        };
        let format = checks
            .format
            .then(|| FormatValidator::new(config.prefix.clone()));

        debug!(
            prefix = %config.prefix,
            completeness = checks.completeness,
            contrast = checks.contrast,
            format = checks.format,
            "theme validator configured"
        );

        Ok(Self {
            completeness,
            contrast,
            format,
        })
    }

    /// Scan and validate CSS text
    pub fn validate_source(&self, css: &str) -> ThemeReport {
        self.validate_parsed(css::parse_with_warnings(css))
    }

    /// Decode, scan and validate raw bytes
    pub fn validate_bytes(&self, bytes: &[u8]) -> std::result::Result<ThemeReport, ParseError> {
        css::parse_bytes_with_warnings(bytes).map(|parsed| self.validate_parsed(parsed))
    }

    /// Validate an already scanned theme
    pub fn validate_parsed(&self, parsed: ParsedTheme) -> ThemeReport {
        let _span = info_span!("validate_theme", properties = parsed.properties.len()).entered();
        parsed.log_diagnostics();

        let properties = &parsed.properties;
        ThemeReport {
            total_properties: properties.len(),
            completeness: self.completeness.as_ref().map(|v| v.validate(properties)),
            contrast: self.contrast.as_ref().map(|v| v.validate(properties)),
            format: self.format.as_ref().map(|v| v.validate(properties)),
            warnings: parsed.warnings,
        }
    }
}
