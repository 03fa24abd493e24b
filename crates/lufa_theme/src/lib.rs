//! Lufa Theme Validation
//!
//! Checks user-supplied design-system theme files (CSS declaring `--lufa-*`
//! custom properties) before they are shipped.
//!
//! # Overview
//!
//! - **Parser** ([`css`]): flat, ordered list of custom-property declarations
//! - **Resolver** ([`resolve`]): `var()` substitution with cycle detection
//! - **Color math** ([`color`]): hex parsing, WCAG 2.1 luminance and contrast
//! - **Validators** ([`validate`]): completeness, contrast and format checks
//! - **Report** ([`report`]): aggregated, serializable outcome
//!
//! # Quick Start
//!
//! ```
//! use lufa_theme::{ThemeValidator, ValidatorConfig};
//!
//! let css = r#"
//! :root {
//!   --lufa-semantic-ui-text-primary: #cccccc;
//!   --lufa-semantic-ui-background-page: #ffffff;
//! }
//! "#;
//!
//! let validator = ThemeValidator::new(&ValidatorConfig::default()).unwrap();
//! let report = validator.validate_source(css);
//!
//! let contrast = report.contrast.as_ref().unwrap();
//! assert_eq!(contrast.violations.len(), 1);
//! assert_eq!(contrast.violations[0].ratio, 1.61);
//! assert!(!report.is_valid());
//! ```
//!
//! # Validators
//!
//! Each validator works on the same immutable property slice and can be used
//! on its own:
//!
//! - [`CompletenessValidator`]: every token of a [`TokenManifest`] is defined
//! - [`ContrastValidator`]: every pair of a [`ContrastCatalog`] meets its WCAG
//!   threshold after `var()` resolution
//! - [`FormatValidator`]: every categorized token has a well-formed value
//!
//! Contrast skips pairs it cannot measure (missing tokens, non-hex values);
//! those defects are reported by the other two validators.

pub mod color;
pub mod config;
pub mod css;
pub mod error;
pub mod manifest;
pub mod report;
pub mod resolve;
pub mod theme;
pub mod validate;

// Re-export commonly used types
pub use color::{contrast_ratio, hex_to_rgb, relative_luminance, Rgb};
pub use config::ValidatorConfig;
pub use css::{parse, parse_bytes, parse_with_warnings, CustomProperty, ParseWarning, ParsedTheme};
pub use error::{ConfigError, ParseError};
pub use manifest::{ColorPair, ContrastCatalog, ContrastKind, TokenManifest, DEFAULT_PREFIX};
pub use report::ThemeReport;
pub use resolve::{resolve, TokenMap};
pub use theme::ThemeValidator;
pub use validate::{
    CompletenessResult, CompletenessValidator, ConformanceLevel, ContrastResult,
    ContrastValidator, ContrastViolation, FormatIssue, FormatResult, FormatValidator,
    TokenCategory,
};
