//! Hex color parsing and WCAG 2.1 contrast math
//!
//! All functions are pure. Thresholds are inclusive: a ratio of exactly 4.5
//! passes AA for text.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::preceded,
    IResult,
};
use serde::Serialize;

/// Minimum contrast for normal text at WCAG AA
pub const AA_TEXT_RATIO: f64 = 4.5;
/// Minimum contrast for UI components and graphical objects at WCAG AA
pub const AA_UI_RATIO: f64 = 3.0;
/// Minimum contrast for normal text at WCAG AAA
pub const AAA_RATIO: f64 = 7.0;

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse the digits of `#rgb` / `#rrggbb` (the `#` is optional)
fn hex_digits(input: &str) -> IResult<&str, &str> {
    preceded(opt(char('#')), take_while1(|c: char| c.is_ascii_hexdigit()))(input)
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`
///
/// Returns `None` for every other shape, including 4- and 8-digit hex.
///
/// ```
/// use lufa_theme::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#abc"), Some(Rgb::new(170, 187, 204)));
/// assert_eq!(hex_to_rgb("1D4ED8"), Some(Rgb::new(29, 78, 216)));
/// assert_eq!(hex_to_rgb("#12"), None);
/// ```
pub fn hex_to_rgb(input: &str) -> Option<Rgb> {
    let (_, digits) = all_consuming(hex_digits)(input.trim()).ok()?;

    let channel = |i: usize, width: usize| -> Option<u8> {
        let v = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16).ok()?;
        Some(if width == 1 { v * 17 } else { v })
    };

    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return None,
    };

    Some(Rgb::new(channel(0, width)?, channel(1, width)?, channel(2, width)?))
}

/// Linearize one 8-bit sRGB channel
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in [0.0, 1.0]
///
/// White is exactly 1.0 and black exactly 0.0.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two colors, in [1.0, 21.0], symmetric
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors
///
/// Returns `None` when either side is not a valid 3- or 6-digit hex color.
///
/// ```
/// use lufa_theme::color::contrast_ratio;
///
/// assert_eq!(contrast_ratio("#000000", "#ffffff"), Some(21.0));
/// assert_eq!(contrast_ratio("#000", "not-a-color"), None);
/// ```
pub fn contrast_ratio(foreground: &str, background: &str) -> Option<f64> {
    Some(contrast_ratio_rgb(
        hex_to_rgb(foreground)?,
        hex_to_rgb(background)?,
    ))
}

/// WCAG AA for normal text (>= 4.5:1)
pub fn meets_aa_text(ratio: f64) -> bool {
    ratio >= AA_TEXT_RATIO
}

/// WCAG AA for UI components (>= 3:1)
pub fn meets_aa_ui(ratio: f64) -> bool {
    ratio >= AA_UI_RATIO
}

/// WCAG AAA for normal text (>= 7:1)
pub fn meets_aaa(ratio: f64) -> bool {
    ratio >= AAA_RATIO
}

/// Nudge applied before rounding so decimal halves (`1.005`) round up even
/// when their binary value sits just below the half
const ROUNDING_NUDGE: f64 = 1e-9;

/// Round a ratio to two decimals for display (half-up)
///
/// ```
/// use lufa_theme::color::round_ratio;
///
/// assert_eq!(round_ratio(1.005), 1.01);
/// assert_eq!(round_ratio(4.4951), 4.5);
/// ```
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0 + ROUNDING_NUDGE).round() / 100.0
}
