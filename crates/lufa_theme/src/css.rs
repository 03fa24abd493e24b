//! CSS custom-property scanner
//!
//! Extracts a flat, ordered list of `--name: value;` declarations from a CSS
//! source. Selectors, at-rules and nesting are ignored: every declaration is
//! collected no matter which block it sits in, because the validators work on
//! a flat token space rather than on a cascade.
//!
//! # Error Handling
//!
//! Scanning never fails on malformed CSS. Declarations that cannot be read
//! (missing semicolon, unbalanced parentheses, empty value, invalid name) are
//! skipped and reported as [`ParseWarning`]s, which are also logged via
//! tracing at DEBUG level. The only fatal condition is input that is not text,
//! see [`parse_bytes`].
//!
//! # Example
//!
//! ```
//! use lufa_theme::css;
//!
//! let props = css::parse(":root {\n  --lufa-core-spacing-md: 16px;\n}");
//! assert_eq!(props[0].name, "--lufa-core-spacing-md");
//! assert_eq!(props[0].value, "16px");
//! assert_eq!(props[0].line, 2);
//! ```

use std::fmt;

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::recognize,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ParseError;

type ParseResult<'a, O> = IResult<&'a str, O>;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// One parsed custom-property declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomProperty {
    /// Full property name including the leading `--`
    pub name: String,
    /// Raw value as written, trimmed
    pub value: String,
    /// Line (1-indexed) where the declaration starts
    pub line: usize,
}

impl CustomProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line,
        }
    }

    /// The part of the name after `--<prefix>-`, if the property carries that prefix
    ///
    /// ```
    /// use lufa_theme::css::CustomProperty;
    ///
    /// let prop = CustomProperty::new("--lufa-core-radius-md", "8px", 1);
    /// assert_eq!(prop.suffix("lufa"), Some("core-radius-md"));
    /// assert_eq!(prop.suffix("acme"), None);
    /// ```
    pub fn suffix(&self, prefix: &str) -> Option<&str> {
        self.name
            .strip_prefix("--")?
            .strip_prefix(prefix)?
            .strip_prefix('-')
            .filter(|rest| !rest.is_empty())
    }

    /// Check whether the property belongs to the `--<prefix>-*` namespace
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.suffix(prefix).is_some()
    }
}

/// A declaration that was skipped while scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// Line (1-indexed) where the skipped declaration starts
    pub line: usize,
    /// Human-readable reason
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of scanning a theme source with warning collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTheme {
    /// Declarations in source order (duplicates kept)
    pub properties: Vec<CustomProperty>,
    /// Declarations that were skipped
    pub warnings: Vec<ParseWarning>,
}

impl ParsedTheme {
    /// Log all warnings via tracing
    pub fn log_diagnostics(&self) {
        for warning in &self.warnings {
            debug!(
                line = warning.line,
                message = %warning.message,
                "skipped custom property declaration"
            );
        }
    }
}

/// Scan CSS text for custom-property declarations
pub fn parse(css: &str) -> Vec<CustomProperty> {
    parse_with_warnings(css).properties
}

/// Decode raw bytes as UTF-8 and scan them
///
/// Fails only when the bytes are not valid text. A leading byte-order mark
/// is ignored.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<CustomProperty>, ParseError> {
    decode(bytes).map(parse)
}

/// Byte-level counterpart of [`parse_with_warnings`]
pub fn parse_bytes_with_warnings(bytes: &[u8]) -> Result<ParsedTheme, ParseError> {
    decode(bytes).map(parse_with_warnings)
}

/// Decode a theme source, reporting where decoding failed
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|e| {
        let offset = e.valid_up_to();
        let line = bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1;
        ParseError::InvalidUtf8 { line, offset }
    })
}

/// Scan CSS text, collecting a warning for every skipped declaration
pub fn parse_with_warnings(css: &str) -> ParsedTheme {
    let css = css.strip_prefix('\u{feff}').unwrap_or(css);
    let source = strip_comments(css);
    let lines = LineIndex::new(&source);

    let mut theme = ParsedTheme::default();
    let mut pos = 0;

    while let Some(start) = next_candidate(&source, pos) {
        let line = lines.line_of(start);
        match scan_declaration(&source[start..]) {
            Scan::Complete {
                name,
                value,
                consumed,
            } => {
                theme
                    .properties
                    .push(CustomProperty::new(name, value, line));
                pos = start + consumed;
            }
            Scan::Malformed { message, resume } => {
                debug!(line, message = %message, "skipping malformed declaration");
                theme.warnings.push(ParseWarning { line, message });
                pos = start + resume;
            }
            Scan::NotDeclaration => {
                pos = start + 2;
            }
        }
    }

    debug!(
        properties = theme.properties.len(),
        warnings = theme.warnings.len(),
        "scanned theme source"
    );
    theme
}

/// Drop a trailing `!important` flag from a value
///
/// ```
/// use lufa_theme::css::strip_important;
///
/// assert_eq!(strip_important("#cccccc !important"), "#cccccc");
/// assert_eq!(strip_important("16px"), "16px");
/// ```
pub fn strip_important(value: &str) -> &str {
    let trimmed = value.trim_end();
    if let Some(bang) = trimmed.rfind('!') {
        if trimmed[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return trimmed[..bang].trim_end();
        }
    }
    trimmed
}

// ============================================================================
// Scanner internals
// ============================================================================

enum Scan {
    Complete {
        name: String,
        value: String,
        consumed: usize,
    },
    Malformed {
        message: String,
        resume: usize,
    },
    NotDeclaration,
}

/// Where a declaration value stops
enum ValueEnd {
    /// Top-level `;` at this offset
    Semicolon(usize),
    /// Top-level `}` at this offset (last declaration of a block)
    CloseBrace(usize),
    /// Top-level `{` at this offset
    OpenBrace(usize),
    /// Input ended first
    Eof,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Parse a block comment /* ... */
fn block_comment(input: &str) -> ParseResult<'_, &str> {
    recognize(delimited(tag("/*"), take_until("*/"), tag("*/")))(input)
}

/// Parse `--name` followed by optional whitespace and a colon
fn declaration_head(input: &str) -> ParseResult<'_, &str> {
    terminated(
        recognize(preceded(tag("--"), take_while1(is_name_char))),
        pair(multispace0, char(':')),
    )(input)
}

/// Blank out comments, keeping newlines so line numbers survive
fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(open) = rest.find("/*") {
        out.push_str(&rest[..open]);
        let body = &rest[open..];
        // Unterminated comments run to the end of input
        let comment = block_comment(body).map(|(_, c)| c).unwrap_or(body);
        out.extend(comment.chars().map(|c| if c == '\n' { '\n' } else { ' ' }));
        rest = &body[comment.len()..];
    }

    out.push_str(rest);
    out
}

/// Find the next `--` that starts at a declaration boundary
fn next_candidate(source: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while search < source.len() {
        let idx = search + source[search..].find("--")?;
        let at_boundary = source[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || matches!(c, '{' | '}' | ';'));
        if at_boundary {
            return Some(idx);
        }
        search = idx + 2;
    }
    None
}

fn scan_declaration(input: &str) -> Scan {
    let Ok((after_colon, name)) = declaration_head(input) else {
        return Scan::NotDeclaration;
    };

    let bare = &name[2..];
    if bare.ends_with('-') || bare.chars().all(|c| c == '-') {
        return Scan::Malformed {
            message: format!("invalid custom property name `{name}`"),
            resume: name.len(),
        };
    }

    let value_start = input.len() - after_colon.len();
    let (raw, consumed) = match scan_value(after_colon) {
        ValueEnd::Semicolon(i) => (&after_colon[..i], value_start + i + 1),
        ValueEnd::CloseBrace(i) => (&after_colon[..i], value_start + i),
        ValueEnd::OpenBrace(_) => {
            return Scan::Malformed {
                message: format!("declaration `{name}` runs into a rule block"),
                resume: name.len(),
            }
        }
        ValueEnd::Eof => {
            return Scan::Malformed {
                message: format!("declaration `{name}` is not terminated"),
                resume: name.len(),
            }
        }
    };

    if swallows_declaration(raw) {
        return Scan::Malformed {
            message: format!("declaration `{name}` is missing a semicolon"),
            resume: name.len(),
        };
    }

    let value = raw.trim();
    if value.is_empty() {
        return Scan::Malformed {
            message: format!("declaration `{name}` has an empty value"),
            resume: consumed,
        };
    }

    Scan::Complete {
        name: name.to_string(),
        value: value.to_string(),
        consumed,
    }
}

/// Find the end of a value, ignoring separators inside quotes and parentheses
fn scan_value(input: &str) -> ValueEnd {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => return ValueEnd::Semicolon(i),
            '}' if depth == 0 => return ValueEnd::CloseBrace(i),
            '{' if depth == 0 => return ValueEnd::OpenBrace(i),
            _ => {}
        }
    }

    ValueEnd::Eof
}

/// A value that contains another `--name:` line lost its semicolon
fn swallows_declaration(value: &str) -> bool {
    value
        .lines()
        .skip(1)
        .any(|line| declaration_head(line.trim_start()).is_ok())
}

/// Maps byte offsets to 1-indexed line numbers
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }
}
