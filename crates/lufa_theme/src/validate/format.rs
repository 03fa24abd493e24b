//! Syntactic value checks per token category
//!
//! The category of a token is inferred from the segments of its name after
//! the prefix (`--lufa-core-font-size-md` is a length, `--lufa-semantic-ui-
//! text-primary` a color). Tokens whose category cannot be inferred are not
//! checked. Values are never resolved: a whole-value `var()` reference is an
//! acceptable shape for every category.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{alpha1, char, digit1, multispace0, multispace1, one_of, space1},
    combinator::{all_consuming, opt, recognize, verify},
    error::{Error, ErrorKind},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::css::{strip_important, CustomProperty};

/// Syntactic family a token value must belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Color,
    Length,
    FontFamily,
    FontWeight,
    LineHeight,
    Duration,
    Easing,
    Opacity,
    ZIndex,
    Shadow,
}

const COLOR_WORDS: &[&str] = &[
    "color",
    "text",
    "background",
    "border",
    "icon",
    "fill",
    "stroke",
    "placeholder",
    "outline",
    "surface",
];

const LENGTH_WORDS: &[&str] = &[
    "spacing",
    "space",
    "radius",
    "gap",
    "size",
    "width",
    "height",
    "breakpoint",
    "offset",
    "padding",
    "margin",
];

impl TokenCategory {
    /// Infer the category from a token suffix (the name after `--<prefix>-`)
    ///
    /// ```
    /// use lufa_theme::validate::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::infer("core-font-size-md"), Some(TokenCategory::Length));
    /// assert_eq!(TokenCategory::infer("semantic-ui-icon-brand"), Some(TokenCategory::Color));
    /// assert_eq!(TokenCategory::infer("meta-version"), None);
    /// ```
    pub fn infer(suffix: &str) -> Option<Self> {
        let lower = suffix.to_ascii_lowercase();
        let segments: Vec<&str> = lower.split('-').filter(|s| !s.is_empty()).collect();
        let has = |word: &str| segments.iter().any(|s| *s == word);
        let has_any = |words: &[&str]| words.iter().any(|&w| has(w));
        let adjacent = |a: &str, b: &str| segments.windows(2).any(|w| w[0] == a && w[1] == b);

        let category = if has("shadow") {
            TokenCategory::Shadow
        } else if has("duration") {
            TokenCategory::Duration
        } else if has("easing") {
            TokenCategory::Easing
        } else if has("opacity") {
            TokenCategory::Opacity
        } else if adjacent("z", "index") || has("zindex") {
            TokenCategory::ZIndex
        } else if adjacent("font", "family") {
            TokenCategory::FontFamily
        } else if adjacent("font", "weight") {
            TokenCategory::FontWeight
        } else if adjacent("line", "height") {
            TokenCategory::LineHeight
        } else if adjacent("font", "size")
            || adjacent("letter", "spacing")
            || adjacent("border", "width")
            || has_any(LENGTH_WORDS)
        {
            TokenCategory::Length
        } else if has_any(COLOR_WORDS) {
            TokenCategory::Color
        } else {
            return None;
        };
        Some(category)
    }

    /// Human-readable description of the accepted shapes
    pub fn expected_format(self) -> &'static str {
        match self {
            TokenCategory::Color => "color (hex, rgb(), hsl(), named color or var())",
            TokenCategory::Length => "length (e.g. 16px, 1rem, 50%, 0 or calc())",
            TokenCategory::FontFamily => "font family list (e.g. \"Inter\", sans-serif)",
            TokenCategory::FontWeight => "font weight (1-1000, normal, bold, lighter, bolder)",
            TokenCategory::LineHeight => "line height (number, length or normal)",
            TokenCategory::Duration => "duration (e.g. 150ms or 0.2s)",
            TokenCategory::Easing => "easing (keyword, cubic-bezier() or steps())",
            TokenCategory::Opacity => "opacity (0 to 1 or 0% to 100%)",
            TokenCategory::ZIndex => "z-index (integer or auto)",
            TokenCategory::Shadow => "shadow (none or offset-x offset-y [blur [spread]] [color])",
        }
    }

    /// Whether a value (already stripped of `!important`) has an accepted shape
    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        if is_var_reference(value) {
            return true;
        }
        match self {
            TokenCategory::Color => whole(color, value),
            TokenCategory::Length => whole(length_list, value),
            TokenCategory::FontFamily => whole(font_family, value),
            TokenCategory::FontWeight => whole(font_weight, value),
            TokenCategory::LineHeight => whole(line_height, value),
            TokenCategory::Duration => whole(duration, value),
            TokenCategory::Easing => whole(easing, value),
            TokenCategory::Opacity => whole(opacity, value),
            TokenCategory::ZIndex => whole(z_index, value),
            TokenCategory::Shadow => is_shadow(value),
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenCategory::Color => "color",
            TokenCategory::Length => "length",
            TokenCategory::FontFamily => "font-family",
            TokenCategory::FontWeight => "font-weight",
            TokenCategory::LineHeight => "line-height",
            TokenCategory::Duration => "duration",
            TokenCategory::Easing => "easing",
            TokenCategory::Opacity => "opacity",
            TokenCategory::ZIndex => "z-index",
            TokenCategory::Shadow => "shadow",
        };
        f.write_str(name)
    }
}

/// A token whose value does not fit its category
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatIssue {
    pub token: String,
    pub line: usize,
    pub value: String,
    pub expected_format: String,
}

/// Outcome of a format run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub valid: bool,
    pub errors: Vec<FormatIssue>,
    /// Declarations with a known category
    pub total_checked: usize,
}

/// Checks prefixed declarations against the shape of their category
#[derive(Clone, Debug)]
pub struct FormatValidator {
    prefix: String,
}

impl FormatValidator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn validate(&self, properties: &[CustomProperty]) -> FormatResult {
        let mut errors = Vec::new();
        let mut total_checked = 0;

        for prop in properties {
            let Some(category) = prop.suffix(&self.prefix).and_then(TokenCategory::infer) else {
                continue;
            };
            total_checked += 1;

            if !category.accepts(strip_important(&prop.value)) {
                debug!(
                    token = %prop.name,
                    line = prop.line,
                    value = %prop.value,
                    %category,
                    "value does not match token category"
                );
                errors.push(FormatIssue {
                    token: prop.name.clone(),
                    line: prop.line,
                    value: prop.value.clone(),
                    expected_format: category.expected_format().to_string(),
                });
            }
        }

        info!(
            checked = total_checked,
            errors = errors.len(),
            "format check finished"
        );

        FormatResult {
            valid: errors.is_empty(),
            errors,
            total_checked,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value grammar
// ─────────────────────────────────────────────────────────────────────────────

type ParseResult<'a> = IResult<&'a str, &'a str>;

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "ex", "ch", "cap", "ic", "lh", "rlh", "vw", "vh", "vi", "vb", "vmin",
    "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqmin", "cqmax", "cm",
    "mm", "q", "in", "pt", "pc",
];

const MATH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp"];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "light-dark",
];

const FONT_WEIGHT_KEYWORDS: &[&str] = &["normal", "bold", "lighter", "bolder"];

const EASING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

const EASING_FUNCTIONS: &[&str] = &["cubic-bezier", "steps", "linear"];

const GENERIC_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert"];

const NAMED_COLORS: &[&str] = &[
    "transparent", "currentcolor", "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure",
    "beige", "bisque", "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood",
    "cadetblue", "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey",
    "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred",
    "darksalmon", "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey",
    "darkturquoise", "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey",
    "dodgerblue", "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro",
    "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow", "grey", "honeydew",
    "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender", "lavenderblush",
    "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink",
    "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey",
    "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred",
    "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy", "oldlace",
    "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

/// Run `parser` over the whole of `value`
fn whole<'a, F>(parser: F, value: &'a str) -> bool
where
    F: FnMut(&'a str) -> ParseResult<'a>,
{
    all_consuming(parser)(value).is_ok()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn contains_ignore_case(words: &[&str], word: &str) -> bool {
    words.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// An identifier from a fixed keyword list (case-insensitive)
fn keyword<'a>(words: &'static [&'static str]) -> impl FnMut(&'a str) -> ParseResult<'a> {
    move |input| verify(take_while1(is_ident_char), |w: &str| contains_ignore_case(words, w))(input)
}

/// A `(`...`)` group with balanced nesting
fn parenthesized(input: &str) -> ParseResult<'_> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..=i]));
                }
            }
            _ if depth == 0 => break,
            _ => {}
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Char)))
}

/// `name(...)` for one of the given function names; arguments are not inspected
fn function_call<'a>(names: &'static [&'static str]) -> impl FnMut(&'a str) -> ParseResult<'a> {
    move |input| recognize(pair(keyword(names), parenthesized))(input)
}

fn var_call(input: &str) -> ParseResult<'_> {
    function_call(&["var"])(input)
}

/// `var(--name)` or `var(--name, fallback)` spanning the whole value
fn is_var_reference(value: &str) -> bool {
    whole(
        |input| verify(var_call, |call: &str| call[4..].trim_start().starts_with("--"))(input),
        value,
    )
}

/// Signed integer or decimal; no exponent so `1em` stays a dimension
fn number(input: &str) -> ParseResult<'_> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(input)
}

fn zero(input: &str) -> ParseResult<'_> {
    verify(number, |n: &str| n.parse::<f64>().map_or(false, |v| v == 0.0))(input)
}

fn length_unit(input: &str) -> ParseResult<'_> {
    alt((
        tag("%"),
        verify(alpha1, |u: &str| contains_ignore_case(LENGTH_UNITS, u)),
    ))(input)
}

fn length(input: &str) -> ParseResult<'_> {
    alt((
        recognize(pair(number, length_unit)),
        function_call(MATH_FUNCTIONS),
        zero,
    ))(input)
}

/// One to four lengths, as in `padding: 8px 16px`
fn length_list(input: &str) -> ParseResult<'_> {
    recognize(verify(
        separated_list1(multispace1, alt((length, var_call))),
        |parts: &Vec<&str>| parts.len() <= 4,
    ))(input)
}

fn hex_color(input: &str) -> ParseResult<'_> {
    recognize(preceded(
        char('#'),
        verify(take_while1(|c: char| c.is_ascii_hexdigit()), |d: &str| {
            matches!(d.len(), 3 | 4 | 6 | 8)
        }),
    ))(input)
}

fn color(input: &str) -> ParseResult<'_> {
    alt((
        hex_color,
        function_call(COLOR_FUNCTIONS),
        keyword(NAMED_COLORS),
        keyword(GENERIC_KEYWORDS),
    ))(input)
}

fn quoted(input: &str) -> ParseResult<'_> {
    alt((
        recognize(delimited(char('"'), take_until("\""), char('"'))),
        recognize(delimited(char('\''), take_until("'"), char('\''))),
    ))(input)
}

/// `"Inter", "Segoe UI", system-ui, sans-serif`
fn font_family(input: &str) -> ParseResult<'_> {
    let family = alt((
        quoted,
        var_call,
        recognize(separated_list1(space1, take_while1(is_ident_char))),
    ));
    recognize(separated_list1(tuple((multispace0, char(','), multispace0)), family))(input)
}

fn font_weight(input: &str) -> ParseResult<'_> {
    alt((
        verify(digit1, |d: &str| {
            d.parse::<u16>().map_or(false, |w| (1..=1000).contains(&w))
        }),
        keyword(FONT_WEIGHT_KEYWORDS),
    ))(input)
}

fn line_height(input: &str) -> ParseResult<'_> {
    alt((keyword(&["normal"]), length, number))(input)
}

fn duration(input: &str) -> ParseResult<'_> {
    alt((
        recognize(pair(
            number,
            verify(alpha1, |u: &str| u.eq_ignore_ascii_case("ms") || u.eq_ignore_ascii_case("s")),
        )),
        function_call(MATH_FUNCTIONS),
    ))(input)
}

fn easing(input: &str) -> ParseResult<'_> {
    alt((function_call(EASING_FUNCTIONS), keyword(EASING_KEYWORDS)))(input)
}

fn opacity(input: &str) -> ParseResult<'_> {
    alt((
        verify(recognize(pair(number, char('%'))), |p: &str| {
            p.trim_end_matches('%')
                .parse::<f64>()
                .map_or(false, |v| (0.0..=100.0).contains(&v))
        }),
        verify(number, |n: &str| {
            n.parse::<f64>().map_or(false, |v| (0.0..=1.0).contains(&v))
        }),
        function_call(MATH_FUNCTIONS),
    ))(input)
}

fn z_index(input: &str) -> ParseResult<'_> {
    alt((
        recognize(pair(opt(one_of("+-")), digit1)),
        keyword(&["auto"]),
        function_call(MATH_FUNCTIONS),
    ))(input)
}

/// `none`, or comma-separated layers of `[inset] x y [blur [spread]] [color]`
fn is_shadow(value: &str) -> bool {
    if value.eq_ignore_ascii_case("none") {
        return true;
    }
    split_top_level(value, |c| c == ',')
        .into_iter()
        .all(|layer| !layer.is_empty() && is_shadow_layer(layer))
}

fn is_shadow_layer(layer: &str) -> bool {
    let parts: Vec<&str> = split_top_level(layer, char::is_whitespace)
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return false;
    }

    let (mut lengths, mut colors, mut insets, mut references) = (0, 0, 0, 0);
    for part in parts {
        if part.eq_ignore_ascii_case("inset") {
            insets += 1;
        } else if whole(length, part) {
            lengths += 1;
        } else if whole(color, part) {
            colors += 1;
        } else if whole(var_call, part) {
            references += 1;
        } else {
            return false;
        }
    }

    // A var() can stand in for any component, so only upper bounds apply
    let lengths_ok = if references > 0 {
        lengths <= 4
    } else {
        (2..=4).contains(&lengths)
    };
    lengths_ok && colors <= 1 && insets <= 1
}

/// Split on `is_sep` outside parentheses and quotes; pieces are trimmed
fn split_top_level(value: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if depth == 0 && is_sep(c) => {
                parts.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);

    parts.into_iter().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css;
    use pretty_assertions::assert_eq;

    fn check(category: TokenCategory, good: &[&str], bad: &[&str]) {
        for value in good {
            assert!(category.accepts(value), "{category} should accept {value:?}");
        }
        for value in bad {
            assert!(!category.accepts(value), "{category} should reject {value:?}");
        }
    }

    #[test]
    fn infer_categories_from_names() {
        use TokenCategory::*;
        let cases = [
            ("semantic-ui-text-primary", Some(Color)),
            ("semantic-ui-background-brand-subtle", Some(Color)),
            ("component-input-placeholder", Some(Color)),
            ("component-navigation-border-active", Some(Color)),
            ("core-border-width-thin", Some(Length)),
            ("core-radius-full", Some(Length)),
            ("core-spacing-md", Some(Length)),
            ("core-font-size-lg", Some(Length)),
            ("core-letter-spacing-normal", Some(Length)),
            ("core-font-family-mono", Some(FontFamily)),
            ("core-font-weight-bold", Some(FontWeight)),
            ("core-line-height-tight", Some(LineHeight)),
            ("core-shadow-md", Some(Shadow)),
            ("component-card-shadow-color", Some(Shadow)),
            ("core-duration-fast", Some(Duration)),
            ("core-easing-standard", Some(Easing)),
            ("core-opacity-disabled", Some(Opacity)),
            ("core-z-index-modal", Some(ZIndex)),
            ("meta-version", None),
            ("core-font-variant", None),
        ];
        for (suffix, expected) in cases {
            assert_eq!(TokenCategory::infer(suffix), expected, "{suffix}");
        }
    }

    #[test]
    fn color_shapes() {
        check(
            TokenCategory::Color,
            &[
                "#fff",
                "#FFFF",
                "#1d4ed8",
                "#1d4ed880",
                "rgb(0, 0, 0)",
                "rgba(0 0 0 / 50%)",
                "hsl(220 90% 56%)",
                "oklch(0.7 0.1 200)",
                "rebeccapurple",
                "transparent",
                "currentColor",
                "var(--lufa-primitive-color-blue-700)",
                "var(--missing, #000)",
            ],
            &[
                "#12",
                "#12345",
                "blue-ish",
                "rgb 0 0 0",
                "16px",
                "#fff #000",
                "var(nope)",
                "var(--a) x",
            ],
        );
    }

    #[test]
    fn length_shapes() {
        check(
            TokenCategory::Length,
            &[
                "16px",
                "1.5rem",
                "1em",
                "-0.01em",
                ".5rem",
                "50%",
                "0",
                "9999px",
                "8px 16px",
                "calc(100% - 2 * var(--gap))",
                "clamp(1rem, 2vw, 2rem)",
                "var(--lufa-core-spacing-md)",
            ],
            &["16", "px", "1e3px", "16 px", "1px 2px 3px 4px 5px", "large", "#fff"],
        );
    }

    #[test]
    fn font_shapes() {
        check(
            TokenCategory::FontFamily,
            &[
                "Inter",
                "\"Inter\", sans-serif",
                "'JetBrains Mono', ui-monospace, monospace",
                "Segoe UI, Roboto",
            ],
            &["\"Inter", "Inter,", ", serif"],
        );
        check(
            TokenCategory::FontWeight,
            &["400", "700", "1000", "bold", "normal"],
            &["0", "1001", "heavy", "400px", "4.5"],
        );
        check(
            TokenCategory::LineHeight,
            &["1.5", "24px", "150%", "normal"],
            &["tall", "1.5 2"],
        );
    }

    #[test]
    fn motion_and_misc_shapes() {
        check(
            TokenCategory::Duration,
            &["150ms", "0.2s", "0s", "200MS"],
            &["150", "fast", "1m", "ms"],
        );
        check(
            TokenCategory::Easing,
            &["ease-in-out", "linear", "cubic-bezier(0.4, 0, 0.2, 1)", "steps(4, end)"],
            &["bouncy", "cubic-bezier", "0.4, 0, 0.2, 1"],
        );
        check(
            TokenCategory::Opacity,
            &["0", "0.38", "1", "50%", "100%"],
            &["1.5", "-0.1", "120%", "half"],
        );
        check(
            TokenCategory::ZIndex,
            &["1000", "-1", "auto", "0"],
            &["1.5", "top", "10px"],
        );
    }

    #[test]
    fn shadow_shapes() {
        check(
            TokenCategory::Shadow,
            &[
                "none",
                "0 1px 2px rgba(0, 0, 0, 0.05)",
                "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
                "inset 0 0 0 1px #e5e7eb",
                "0 0 0 3px var(--lufa-semantic-ui-border-focus)",
                "var(--lufa-core-shadow-sm)",
            ],
            &["1px", "0 1px 2px 3px 4px", "0 1px #000 #fff", "big", "0 1px,"],
        );
    }

    #[test]
    fn validator_reports_bad_values_with_lines() {
        let props = css::parse(
            r#":root {
  --lufa-semantic-ui-text-primary: #12;
  --lufa-core-spacing-md: 16px;
  --lufa-core-radius-md: large;
  --lufa-core-font-weight-bold: 700 !important;
  --lufa-meta-version: "2.0";
  --other-text-primary: nonsense;
}"#,
        );
        let result = FormatValidator::new("lufa").validate(&props);

        assert!(!result.valid);
        assert_eq!(result.total_checked, 4);
        assert_eq!(
            result.errors,
            vec![
                FormatIssue {
                    token: "--lufa-semantic-ui-text-primary".into(),
                    line: 2,
                    value: "#12".into(),
                    expected_format: TokenCategory::Color.expected_format().into(),
                },
                FormatIssue {
                    token: "--lufa-core-radius-md".into(),
                    line: 4,
                    value: "large".into(),
                    expected_format: TokenCategory::Length.expected_format().into(),
                },
            ]
        );
    }

    #[test]
    fn references_are_valid_without_resolution() {
        let props = css::parse(
            "--lufa-semantic-ui-text-primary: var(--lufa-undefined);\n--lufa-core-duration-fast: var(--a, 150ms);",
        );
        let result = FormatValidator::new("lufa").validate(&props);
        assert!(result.valid);
        assert_eq!(result.total_checked, 2);
    }

    #[test]
    fn empty_input_is_valid() {
        let result = FormatValidator::new("lufa").validate(&[]);
        assert!(result.valid);
        assert_eq!(result.total_checked, 0);
    }

    #[test]
    fn issue_serializes_expected_format_camel_case() {
        let props = css::parse("--lufa-core-z-index-modal: top;");
        let result = FormatValidator::new("lufa").validate(&props);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalChecked"], 1);
        assert_eq!(json["errors"][0]["expectedFormat"], "z-index (integer or auto)");
    }
}
