//! WCAG contrast check over a catalog of token pairs
//!
//! Pairs whose tokens are missing, or whose resolved values are not hex
//! colors, are skipped without a violation: missing tokens belong to the
//! completeness check and malformed colors to the format check. Running this
//! validator alone can therefore under-report problems.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::color::{
    contrast_ratio, meets_aa_text, meets_aa_ui, meets_aaa, round_ratio, AAA_RATIO, AA_TEXT_RATIO,
    AA_UI_RATIO,
};
use crate::css::{strip_important, CustomProperty};
use crate::manifest::{ColorPair, ContrastCatalog, ContrastKind};
use crate::resolve::TokenMap;

/// Target conformance level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConformanceLevel {
    /// 4.5:1 for text, 3:1 for UI
    #[default]
    Aa,
    /// 7:1 for text, 3:1 for UI
    Aaa,
}

impl ConformanceLevel {
    /// Minimum ratio a pair of the given kind must reach
    pub fn required_ratio(self, kind: ContrastKind) -> f64 {
        match (self, kind) {
            (ConformanceLevel::Aa, ContrastKind::Text) => AA_TEXT_RATIO,
            (ConformanceLevel::Aaa, ContrastKind::Text) => AAA_RATIO,
            (_, ContrastKind::Ui) => AA_UI_RATIO,
        }
    }

    /// Check an unrounded ratio against the level
    pub fn passes(self, kind: ContrastKind, ratio: f64) -> bool {
        match (self, kind) {
            (ConformanceLevel::Aa, ContrastKind::Text) => meets_aa_text(ratio),
            (ConformanceLevel::Aaa, ContrastKind::Text) => meets_aaa(ratio),
            (_, ContrastKind::Ui) => meets_aa_ui(ratio),
        }
    }
}

impl std::str::FromStr for ConformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aa" => Ok(ConformanceLevel::Aa),
            "aaa" => Ok(ConformanceLevel::Aaa),
            other => Err(format!("unknown conformance level `{other}` (expected aa or aaa)")),
        }
    }
}

/// A pair that falls below its threshold
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastViolation {
    /// Full foreground token name
    pub foreground: String,
    /// Full background token name
    pub background: String,
    /// Measured ratio, rounded to two decimals
    pub ratio: f64,
    /// Threshold the pair had to meet
    pub required: f64,
    #[serde(rename = "type")]
    pub kind: ContrastKind,
}

/// Outcome of a contrast run
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub valid: bool,
    pub violations: Vec<ContrastViolation>,
    /// Size of the catalog, independent of which pairs could be measured
    pub total_checks: usize,
    /// Pairs that were actually measured
    pub evaluated: usize,
    /// Pairs skipped because a token was missing or not a hex color
    pub skipped: usize,
}

/// Measures every catalog pair present in a theme
#[derive(Clone, Debug)]
pub struct ContrastValidator {
    prefix: String,
    catalog: ContrastCatalog,
    level: ConformanceLevel,
}

impl ContrastValidator {
    pub fn new(
        prefix: impl Into<String>,
        catalog: ContrastCatalog,
        level: ConformanceLevel,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            catalog,
            level,
        }
    }

    pub fn catalog(&self) -> &ContrastCatalog {
        &self.catalog
    }

    pub fn level(&self) -> ConformanceLevel {
        self.level
    }

    pub fn validate(&self, properties: &[CustomProperty]) -> ContrastResult {
        let tokens = TokenMap::from_properties(properties);
        let mut violations = Vec::new();
        let mut evaluated = 0;

        for pair in self.catalog.pairs() {
            match self.measure(pair, &tokens) {
                Some((foreground, background, ratio)) => {
                    evaluated += 1;
                    if let Some(violation) =
                        check_ratio(foreground, background, ratio, pair.kind, self.level)
                    {
                        debug!(
                            foreground = %violation.foreground,
                            background = %violation.background,
                            ratio = violation.ratio,
                            required = violation.required,
                            "contrast violation"
                        );
                        violations.push(violation);
                    }
                }
                None => continue,
            }
        }

        let total_checks = self.catalog.len();
        info!(
            total = total_checks,
            evaluated,
            violations = violations.len(),
            "contrast check finished"
        );

        ContrastResult {
            valid: violations.is_empty(),
            violations,
            total_checks,
            evaluated,
            skipped: total_checks - evaluated,
        }
    }

    /// Resolve both sides of a pair and compute their ratio
    fn measure(&self, pair: &ColorPair, tokens: &TokenMap) -> Option<(String, String, f64)> {
        let foreground = pair.foreground_token(&self.prefix);
        let background = pair.background_token(&self.prefix);

        let (Some(fg_raw), Some(bg_raw)) = (tokens.get(&foreground), tokens.get(&background)) else {
            debug!(%foreground, %background, "pair skipped: token not defined");
            return None;
        };

        let fg_value = tokens.resolve(fg_raw).unwrap_or_else(|| fg_raw.to_string());
        let bg_value = tokens.resolve(bg_raw).unwrap_or_else(|| bg_raw.to_string());

        let Some(ratio) = contrast_ratio(strip_important(&fg_value), strip_important(&bg_value))
        else {
            debug!(
                %foreground,
                %background,
                fg = %fg_value,
                bg = %bg_value,
                "pair skipped: not a hex color"
            );
            return None;
        };

        Some((foreground, background, ratio))
    }
}

/// Compare the unrounded ratio with the threshold; report the rounded one
pub(crate) fn check_ratio(
    foreground: String,
    background: String,
    ratio: f64,
    kind: ContrastKind,
    level: ConformanceLevel,
) -> Option<ContrastViolation> {
    if level.passes(kind, ratio) {
        return None;
    }
    Some(ContrastViolation {
        foreground,
        background,
        ratio: round_ratio(ratio),
        required: level.required_ratio(kind),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css;
    use crate::manifest::DEFAULT_PREFIX;
    use pretty_assertions::assert_eq;

    fn lufa_validator() -> ContrastValidator {
        ContrastValidator::new(DEFAULT_PREFIX, ContrastCatalog::lufa(), ConformanceLevel::Aa)
    }

    #[test]
    fn low_contrast_text_reports_one_violation() {
        let props = css::parse(
            ":root {\n  --lufa-semantic-ui-text-primary: #cccccc;\n  --lufa-semantic-ui-background-page: #ffffff;\n}",
        );
        let result = lufa_validator().validate(&props);

        assert!(!result.valid);
        assert_eq!(result.violations.len(), 1);
        let v = &result.violations[0];
        assert_eq!(v.foreground, "--lufa-semantic-ui-text-primary");
        assert_eq!(v.background, "--lufa-semantic-ui-background-page");
        assert_eq!(v.kind, ContrastKind::Text);
        assert_eq!(v.required, 4.5);
        assert!(v.ratio < 4.5);
        assert_eq!(v.ratio, 1.61);
        assert_eq!(result.evaluated, 1);
    }

    #[test]
    fn important_flag_does_not_hide_low_contrast() {
        let props = css::parse(
            "--lufa-semantic-ui-text-primary: #cccccc !important;\n\
             --lufa-semantic-ui-background-page: #ffffff;",
        );
        let result = lufa_validator().validate(&props);

        assert_eq!(result.evaluated, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].ratio, 1.61);
    }

    #[test]
    fn important_flag_on_referenced_token() {
        let props = css::parse(
            "--lufa-core-color-muted: #cccccc !important;\n\
             --lufa-semantic-ui-text-primary: var(--lufa-core-color-muted);\n\
             --lufa-semantic-ui-background-page: var(--missing, #fff) !important;",
        );
        let result = lufa_validator().validate(&props);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].ratio, 1.61);
    }

    #[test]
    fn passing_pair_is_valid() {
        let props = css::parse(
            "--lufa-semantic-ui-text-primary: #111827;\n--lufa-semantic-ui-background-page: #fff;",
        );
        let result = lufa_validator().validate(&props);
        assert!(result.valid);
        assert_eq!(result.evaluated, 1);
    }

    #[test]
    fn missing_side_is_skipped_without_violation() {
        let props = css::parse("--lufa-semantic-ui-text-primary: #cccccc;");
        let result = lufa_validator().validate(&props);
        assert!(result.valid);
        assert!(result.violations.is_empty());
        assert_eq!(result.evaluated, 0);
        assert_eq!(result.skipped, result.total_checks);
    }

    #[test]
    fn invalid_colors_are_skipped_without_violation() {
        // Contrast alone is not a full oracle: these values are broken, yet valid here
        let props = css::parse(
            "--lufa-semantic-ui-text-primary: not-a-color;\n--lufa-semantic-ui-background-page: rgb(255, 255, 255);\n--lufa-semantic-ui-text-secondary: #ccccccff;\n--lufa-semantic-ui-background-surface: #fff;",
        );
        let result = lufa_validator().validate(&props);
        assert!(result.valid);
        assert_eq!(result.evaluated, 0);
    }

    #[test]
    fn circular_references_do_not_hang() {
        let props = css::parse(
            "--a: var(--b);\n--b: var(--a);\n--lufa-semantic-ui-text-primary: var(--a);\n--lufa-semantic-ui-background-page: var(--lufa-semantic-ui-text-primary);",
        );
        let result = lufa_validator().validate(&props);
        assert!(result.valid);
        assert_eq!(result.evaluated, 0);
    }

    #[test]
    fn three_level_chain_matches_literal_values() {
        let literal = css::parse(
            "--lufa-semantic-ui-text-primary: #cccccc;\n--lufa-semantic-ui-background-page: #ffffff;",
        );
        let chained = css::parse(
            r#"
--lufa-primitive-color-neutral-0: #ffffff;
--lufa-primitive-color-neutral-300: #cccccc;
--lufa-core-color-text-muted: var(--lufa-primitive-color-neutral-300);
--lufa-core-color-surface-base: var(--lufa-primitive-color-neutral-0);
--lufa-semantic-ui-text-primary: var(--lufa-core-color-text-muted);
--lufa-semantic-ui-background-page: var(--lufa-core-color-surface-base);
"#,
        );
        let validator = lufa_validator();
        assert_eq!(validator.validate(&chained), validator.validate(&literal));
    }

    #[test]
    fn total_checks_is_catalog_size_for_any_input() {
        let validator = lufa_validator();
        let expected = ContrastCatalog::lufa().len();
        assert_eq!(validator.validate(&[]).total_checks, expected);
        let props = css::parse("--lufa-semantic-ui-text-primary: #000;");
        assert_eq!(validator.validate(&props).total_checks, expected);
    }

    #[test]
    fn ui_pairs_use_ui_threshold() {
        // #949494 on white is ~3.03: fails text AA, passes UI AA
        let props = css::parse(
            "--lufa-semantic-ui-border-strong: #949494;\n--lufa-semantic-ui-text-tertiary: #949494;\n--lufa-semantic-ui-background-page: #ffffff;",
        );
        let result = lufa_validator().validate(&props);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].foreground, "--lufa-semantic-ui-text-tertiary");
        assert_eq!(result.violations[0].kind, ContrastKind::Text);
    }

    #[test]
    fn ui_violation_reports_three() {
        let props = css::parse(
            "--lufa-semantic-ui-border-strong: #d1d5db;\n--lufa-semantic-ui-background-page: #ffffff;",
        );
        let result = lufa_validator().validate(&props);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].required, 3.0);
        assert_eq!(result.violations[0].kind, ContrastKind::Ui);
    }

    #[test]
    fn aaa_level_raises_text_threshold() {
        // #595959 on white is ~7.0 which passes AAA; #6b7280 (~4.83) only passes AA
        let props = css::parse(
            "--lufa-semantic-ui-text-primary: #6b7280;\n--lufa-semantic-ui-background-page: #ffffff;",
        );
        let aa = lufa_validator().validate(&props);
        let aaa =
            ContrastValidator::new(DEFAULT_PREFIX, ContrastCatalog::lufa(), ConformanceLevel::Aaa)
                .validate(&props);
        assert!(aa.valid);
        assert!(!aaa.valid);
        assert_eq!(aaa.violations[0].required, 7.0);
    }

    #[test]
    fn threshold_uses_unrounded_ratio() {
        let violation = check_ratio(
            "--fg".into(),
            "--bg".into(),
            4.4951,
            ContrastKind::Text,
            ConformanceLevel::Aa,
        )
        .expect("4.4951 is below 4.5 even though it displays as 4.50");
        assert_eq!(violation.ratio, 4.5);
        assert_eq!(violation.required, 4.5);

        let check = |ratio: f64, kind: ContrastKind| {
            check_ratio("--fg".into(), "--bg".into(), ratio, kind, ConformanceLevel::Aa)
        };
        assert!(check(4.5, ContrastKind::Text).is_none());
        assert!(check(2.999, ContrastKind::Ui).is_some());
    }

    #[test]
    fn alternate_catalog_and_prefix() {
        let catalog =
            ContrastCatalog::new(vec![ColorPair::new("ink", "paper", ContrastKind::Text)]).unwrap();
        let validator = ContrastValidator::new("acme", catalog, ConformanceLevel::Aa);
        let props = css::parse("--acme-ink: #777;\n--acme-paper: #888;");
        let result = validator.validate(&props);
        assert_eq!(result.total_checks, 1);
        assert_eq!(result.violations[0].foreground, "--acme-ink");
    }

    #[test]
    fn level_from_str() {
        assert_eq!("AA".parse::<ConformanceLevel>(), Ok(ConformanceLevel::Aa));
        assert_eq!("aaa".parse::<ConformanceLevel>(), Ok(ConformanceLevel::Aaa));
        assert!("a".parse::<ConformanceLevel>().is_err());
    }

    #[test]
    fn violation_serializes_kind_as_type() {
        let violation = check_ratio(
            "--fg".into(),
            "--bg".into(),
            1.2,
            ContrastKind::Ui,
            ConformanceLevel::Aa,
        )
        .unwrap();
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["type"], "ui");
        assert_eq!(json["required"], 3.0);
    }
}
