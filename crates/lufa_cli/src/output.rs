//! Report rendering for the terminal

use anyhow::{Context, Result};
use lufa_theme::ThemeReport;
use std::ffi::OsStr;

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Colored,
    Plain,
}

impl OutputMode {
    /// Pick a mode from the flags and the environment
    ///
    /// Color is used only on a terminal and when `NO_COLOR` is unset or empty.
    pub fn detect(json: bool, no_color: bool, is_terminal: bool) -> Self {
        let env_no_color = no_color_env(std::env::var_os("NO_COLOR").as_deref());
        if json {
            OutputMode::Json
        } else if no_color || !is_terminal || env_no_color {
            OutputMode::Plain
        } else {
            OutputMode::Colored
        }
    }
}

/// Only a non-empty `NO_COLOR` disables color
fn no_color_env(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Render a report; parse warnings are listed only when `show_warnings` is set
pub fn render(report: &ThemeReport, mode: OutputMode, show_warnings: bool) -> Result<String> {
    match mode {
        OutputMode::Json => {
            let mut json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Colored => Ok(report.to_colored_string(show_warnings)),
        OutputMode::Plain => Ok(report.to_plain_string(show_warnings)),
    }
}
