//! Aggregated validation report and its console rendering

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::css::ParseWarning;
use crate::validate::{CompletenessResult, ContrastResult, FormatResult};

/// Results of every validator that ran over one theme source
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeReport {
    /// Declarations found in the source, duplicates included
    pub total_properties: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness: Option<CompletenessResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<ContrastResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatResult>,
    /// Declarations the parser skipped
    pub warnings: Vec<ParseWarning>,
}

/// ANSI escape codes, or empty strings for plain output
struct Palette {
    reset: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    blue: &'static str,
    magenta: &'static str,
    dim: &'static str,
    bold: &'static str,
}

impl Palette {
    const ANSI: Palette = Palette {
        reset: "\x1b[0m",
        red: "\x1b[31m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        blue: "\x1b[34m",
        magenta: "\x1b[35m",
        dim: "\x1b[2m",
        bold: "\x1b[1m",
    };

    const PLAIN: Palette = Palette {
        reset: "",
        red: "",
        green: "",
        yellow: "",
        blue: "",
        magenta: "",
        dim: "",
        bold: "",
    };

    fn select(colored: bool) -> &'static Palette {
        if colored {
            &Palette::ANSI
        } else {
            &Palette::PLAIN
        }
    }
}

impl ThemeReport {
    /// True when every validator that ran passed
    ///
    /// Parse warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        self.completeness.as_ref().map_or(true, |r| r.valid)
            && self.contrast.as_ref().map_or(true, |r| r.valid)
            && self.format.as_ref().map_or(true, |r| r.valid)
    }

    /// Number of findings across all validators
    pub fn issue_count(&self) -> usize {
        self.completeness.as_ref().map_or(0, |r| r.missing_tokens.len())
            + self.contrast.as_ref().map_or(0, |r| r.violations.len())
            + self.format.as_ref().map_or(0, |r| r.errors.len())
    }

    /// Human-readable report without color codes
    pub fn to_plain_string(&self, show_warnings: bool) -> String {
        self.render(false, show_warnings)
    }

    /// Human-readable report with ANSI color codes
    ///
    /// Colors:
    /// - Passed sections: Green
    /// - Failed sections and findings: Red
    /// - Parse warnings: Yellow
    /// - Token names: Blue
    /// - Values and ratios: Magenta
    /// - Line numbers: Dim
    pub fn to_colored_string(&self, show_warnings: bool) -> String {
        self.render(true, show_warnings)
    }

    /// One-line outcome, e.g. `✖ Theme validation failed: 3 issue(s), 1 warning(s)`
    pub fn summary_line(&self, colored: bool) -> String {
        let p = Palette::select(colored);
        let warnings = self.warnings.len();

        if self.is_valid() {
            let mut s = format!("{}{}✓ Theme is valid{}", p.bold, p.green, p.reset);
            if warnings > 0 {
                let _ = write!(s, " ({}{warnings} warning(s){})", p.yellow, p.reset);
            }
            s
        } else {
            let mut parts = vec![format!("{}{} issue(s){}", p.red, self.issue_count(), p.reset)];
            if warnings > 0 {
                parts.push(format!("{}{warnings} warning(s){}", p.yellow, p.reset));
            }
            format!(
                "{}{}✖ Theme validation failed{}: {}",
                p.bold,
                p.red,
                p.reset,
                parts.join(", ")
            )
        }
    }

    /// Log the outcome via tracing
    pub fn log_summary(&self) {
        for warning in &self.warnings {
            debug!(line = warning.line, message = %warning.message, "parse warning");
        }
        if self.is_valid() {
            info!(
                properties = self.total_properties,
                warnings = self.warnings.len(),
                "theme is valid"
            );
        } else {
            warn!(
                properties = self.total_properties,
                issues = self.issue_count(),
                warnings = self.warnings.len(),
                "theme validation failed"
            );
        }
    }

    fn render(&self, colored: bool, show_warnings: bool) -> String {
        let p = Palette::select(colored);
        let mut s = String::new();

        if let Some(result) = &self.completeness {
            section_header(&mut s, p, "Completeness", result.valid);
            let _ = writeln!(
                s,
                "  {}{} of {} required tokens defined ({} distinct tokens in theme){}",
                p.dim,
                result.total_required - result.missing_tokens.len(),
                result.total_required,
                result.total_defined,
                p.reset
            );
            for token in &result.missing_tokens {
                let _ = writeln!(s, "  {}missing{} {}{token}{}", p.red, p.reset, p.blue, p.reset);
            }
        }

        if let Some(result) = &self.contrast {
            section_header(&mut s, p, "Contrast", result.valid);
            let _ = writeln!(
                s,
                "  {}{} of {} pairs evaluated, {} skipped{}",
                p.dim, result.evaluated, result.total_checks, result.skipped, p.reset
            );
            for v in &result.violations {
                let _ = writeln!(
                    s,
                    "  {}{:.2}:1{} < {:.1}:1 ({}) {}{}{} on {}{}{}",
                    p.magenta,
                    v.ratio,
                    p.reset,
                    v.required,
                    v.kind,
                    p.blue,
                    v.foreground,
                    p.reset,
                    p.blue,
                    v.background,
                    p.reset
                );
            }
        }

        if let Some(result) = &self.format {
            section_header(&mut s, p, "Format", result.valid);
            let _ = writeln!(
                s,
                "  {}{} tokens checked{}",
                p.dim, result.total_checked, p.reset
            );
            for issue in &result.errors {
                let _ = writeln!(
                    s,
                    "  {}[line {}]{} {}{}{} = {}{}{}",
                    p.dim,
                    issue.line,
                    p.reset,
                    p.blue,
                    issue.token,
                    p.reset,
                    p.magenta,
                    issue.value,
                    p.reset
                );
                let _ = writeln!(s, "    {}expected {}{}", p.dim, issue.expected_format, p.reset);
            }
        }

        if show_warnings && !self.warnings.is_empty() {
            let _ = writeln!(s, "{}{}⚠ Parse warnings{}", p.bold, p.yellow, p.reset);
            for warning in &self.warnings {
                let _ = writeln!(
                    s,
                    "  {}[line {}]{} {}",
                    p.dim, warning.line, p.reset, warning.message
                );
            }
        }

        s.push_str(&self.summary_line(colored));
        s.push('\n');
        s
    }
}

fn section_header(s: &mut String, p: &Palette, name: &str, valid: bool) {
    let (color, icon, status) = if valid {
        (p.green, "✓", "passed")
    } else {
        (p.red, "✖", "failed")
    };
    let _ = writeln!(s, "{}{color}{icon} {name}{} {status}", p.bold, p.reset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ContrastKind;
    use crate::validate::{ContrastViolation, FormatIssue};
    use pretty_assertions::assert_eq;

    fn failing_report() -> ThemeReport {
        ThemeReport {
            total_properties: 3,
            completeness: Some(CompletenessResult {
                valid: false,
                total_required: 2,
                total_defined: 3,
                missing_tokens: vec!["--lufa-semantic-ui-text-link".into()],
            }),
            contrast: Some(ContrastResult {
                valid: false,
                violations: vec![ContrastViolation {
                    foreground: "--lufa-semantic-ui-text-primary".into(),
                    background: "--lufa-semantic-ui-background-page".into(),
                    ratio: 1.61,
                    required: 4.5,
                    kind: ContrastKind::Text,
                }],
                total_checks: 63,
                evaluated: 1,
                skipped: 62,
            }),
            format: Some(FormatResult {
                valid: false,
                errors: vec![FormatIssue {
                    token: "--lufa-core-radius-md".into(),
                    line: 4,
                    value: "large".into(),
                    expected_format: "length".into(),
                }],
                total_checked: 3,
            }),
            warnings: vec![ParseWarning {
                line: 7,
                message: "missing semicolon".into(),
            }],
        }
    }

    #[test]
    fn validity_ignores_disabled_validators() {
        let report = ThemeReport::default();
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn any_failure_invalidates() {
        let mut report = failing_report();
        assert!(!report.is_valid());
        assert_eq!(report.issue_count(), 3);

        report.completeness = None;
        report.contrast = None;
        assert!(!report.is_valid());
        report.format = None;
        assert!(report.is_valid());
    }

    #[test]
    fn plain_rendering() {
        let text = failing_report().to_plain_string(true);
        assert!(!text.contains('\x1b'));
        assert!(text.contains("✖ Completeness failed"));
        assert!(text.contains("missing --lufa-semantic-ui-text-link"));
        assert!(text.contains(
            "1.61:1 < 4.5:1 (text) --lufa-semantic-ui-text-primary on --lufa-semantic-ui-background-page"
        ));
        assert!(text.contains("[line 4] --lufa-core-radius-md = large"));
        assert!(text.contains("[line 7] missing semicolon"));
        assert!(text.ends_with("✖ Theme validation failed: 3 issue(s), 1 warning(s)\n"));
    }

    #[test]
    fn warnings_hidden_unless_requested() {
        let text = failing_report().to_plain_string(false);
        assert!(!text.contains("Parse warnings"));
    }

    #[test]
    fn colored_rendering_uses_ansi() {
        let text = failing_report().to_colored_string(false);
        assert!(text.contains("\x1b[31m"));
        assert!(text.contains("\x1b[0m"));
    }

    #[test]
    fn summary_for_valid_report() {
        let report = ThemeReport {
            warnings: vec![ParseWarning {
                line: 1,
                message: "empty value".into(),
            }],
            ..Default::default()
        };
        assert_eq!(report.summary_line(false), "✓ Theme is valid (1 warning(s))");
    }

    #[test]
    fn json_omits_disabled_sections() {
        let mut report = failing_report();
        report.format = None;
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalProperties"], 3);
        assert!(json.get("format").is_none());
        assert_eq!(json["contrast"]["violations"][0]["type"], "text");
        assert_eq!(json["warnings"][0]["line"], 7);
    }
}
