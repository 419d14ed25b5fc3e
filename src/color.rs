//! CSS color literals.

use std::fmt;
use std::str::FromStr;
use rgb::{RGBA, RGBA8};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// How a [`Color`] is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `#rrggbb` (always opaque).
    Hex,
    /// `rgb(r, g, b)` (always opaque).
    Rgb,
    /// `rgba(r, g, b, a)` with `a` ∈ \[0, 1\].
    Rgba,
}

/// A color as written in a stylesheet or a chart option object.
///
/// The color remembers its notation so that formatting it gives back
/// the literal it was created from:
///
/// ```
/// use chart_theme::Color;
/// let c: Color = "rgba(102, 252, 241, 0.7)".parse().unwrap();
/// assert_eq!(c.to_string(), "rgba(102, 252, 241, 0.7)");
/// assert_eq!(Color::hex(0x66, 0xfc, 0xf1), "#66fcf1");
/// ```
///
/// Equality compares the notation too: the same components written
/// `#66fcf1` and `rgb(102, 252, 241)` are different `Color`s.  Compare
/// [`Color::to_rgba`] to compare the colors themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    rgba: RGBA<u8, f64>, // Invariant: 0 ≤ a ≤ 1
    notation: Notation,
}

impl Color {
    /// Opaque color written `#rrggbb`.
    pub fn hex(r: u8, g: u8, b: u8) -> Self {
        Color { rgba: RGBA { r, g, b, a: 1. }, notation: Notation::Hex }
    }

    /// Opaque color written `rgb(r, g, b)`.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { rgba: RGBA { r, g, b, a: 1. }, notation: Notation::Rgb }
    }

    /// Color written `rgba(r, g, b, a)`.  The alpha `a` is clamped
    /// to \[0, 1\].
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1. } else { a.clamp(0., 1.) };
        Color { rgba: RGBA { r, g, b, a }, notation: Notation::Rgba }
    }

    pub fn notation(&self) -> Notation { self.notation }

    /// Opacity in \[0, 1\].
    pub fn alpha(&self) -> f64 { self.rgba.a }

    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    pub fn to_rgba(&self) -> RGBA<f64> {
        let RGBA { r, g, b, a } = self.rgba;
        RGBA { r: r as f64, g: g as f64, b: b as f64, a: 255. * a }
    }

    /// Same as [`Color::to_rgba`] with components rounded to bytes.
    pub fn to_rgba8(&self) -> RGBA8 {
        let RGBA { r, g, b, a } = self.rgba;
        RGBA8 { r, g, b, a: (255. * a).round() as u8 }
    }

    /// The same color with opacity `a`, written `rgba(…)`.
    pub fn with_alpha(&self, a: f64) -> Self {
        let RGBA { r, g, b, .. } = self.rgba;
        Color::rgba(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RGBA { r, g, b, a } = self.rgba;
        match self.notation {
            Notation::Hex => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Notation::Rgb => write!(f, "rgb({r}, {g}, {b})"),
            Notation::Rgba => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool { self.to_string() == other }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool { self.to_string() == *other }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Error returned when a string is not a supported color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("not a color “{0}”")]
    Syntax(String),
    #[error("“{color}”: expected {expected} components")]
    Arity { color: String, expected: usize },
    #[error("“{color}”: invalid component “{component}”")]
    Component { color: String, component: String },
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

/// Parse `rrggbb` or `rgb` (without the leading `#`).
fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let d: Vec<u8> = s.bytes().map(hex_digit).collect::<Option<_>>()?;
    match d.len() {
        3 => Some([17 * d[0], 17 * d[1], 17 * d[2]]),
        6 => Some([16 * d[0] + d[1], 16 * d[2] + d[3], 16 * d[4] + d[5]]),
        _ => None,
    }
}

/// Split the arguments of `rgb(…)` or `rgba(…)`.
fn components<'a>(color: &str, args: &'a str, expected: usize)
                  -> Result<Vec<&'a str>, ParseColorError> {
    let c: Vec<&str> = args.split(',').map(str::trim).collect();
    if c.len() != expected {
        return Err(ParseColorError::Arity { color: color.to_string(),
                                            expected })
    }
    Ok(c)
}

fn channel(color: &str, c: &str) -> Result<u8, ParseColorError> {
    c.parse::<u8>().map_err(|_| ParseColorError::Component {
        color: color.to_string(), component: c.to_string() })
}

fn alpha(color: &str, c: &str) -> Result<f64, ParseColorError> {
    match c.parse::<f64>() {
        Ok(a) if (0. ..= 1.).contains(&a) => Ok(a),
        _ => Err(ParseColorError::Component {
            color: color.to_string(), component: c.to_string() }),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rgb`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let [r, g, b] = parse_hex(hex)
                .ok_or_else(|| ParseColorError::Syntax(s.to_string()))?;
            return Ok(Color::hex(r, g, b))
        }
        if let Some(args) = s.strip_prefix("rgba(")
            .and_then(|a| a.strip_suffix(')')) {
            let c = components(s, args, 4)?;
            return Ok(Color::rgba(channel(s, c[0])?, channel(s, c[1])?,
                                  channel(s, c[2])?, alpha(s, c[3])?))
        }
        if let Some(args) = s.strip_prefix("rgb(")
            .and_then(|a| a.strip_suffix(')')) {
            let c = components(s, args, 3)?;
            return Ok(Color::rgb(channel(s, c[0])?, channel(s, c[1])?,
                                 channel(s, c[2])?))
        }
        Err(ParseColorError::Syntax(s.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_format_back_unchanged() {
        for lit in ["#66fcf1", "#0b0c10", "rgba(102, 252, 241, 0.7)",
                    "rgba(6, 182, 212, 0.75)", "rgba(11, 12, 16, 0.95)",
                    "rgb(1, 2, 3)"] {
            let c: Color = lit.parse().unwrap();
            assert_eq!(c.to_string(), lit);
        }
    }

    #[test]
    fn equality_includes_notation() {
        let hex = Color::hex(0x66, 0xfc, 0xf1);
        let rgb: Color = "rgb(102, 252, 241)".parse().unwrap();
        assert_ne!(hex, rgb);
        assert_eq!(hex.to_rgba(), rgb.to_rgba());
    }

    #[test]
    fn short_hex_expands() {
        let c: Color = "#fa0".parse().unwrap();
        assert_eq!(c, Color::hex(0xff, 0xaa, 0x00));
        assert_eq!(c, "#ffaa00");
    }

    #[test]
    fn components_in_0_255() {
        let c = Color::rgba(11, 12, 16, 0.5);
        assert_eq!(c.to_rgba(), RGBA { r: 11., g: 12., b: 16., a: 127.5 });
        assert_eq!(c.to_rgba8(), RGBA8 { r: 11, g: 12, b: 16, a: 128 });
        assert_eq!(Color::hex(1, 2, 3).to_rgba().a, 255.);
    }

    #[test]
    fn with_alpha_switches_notation() {
        let c = Color::hex(0x45, 0xa2, 0x9e).with_alpha(0.1);
        assert_eq!(c, "rgba(69, 162, 158, 0.1)");
        assert_eq!(c.notation(), Notation::Rgba);
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!("teal".parse::<Color>(),
                         Err(ParseColorError::Syntax(_))));
        assert!(matches!("#12345".parse::<Color>(),
                         Err(ParseColorError::Syntax(_))));
        assert!(matches!("rgba(1, 2, 3)".parse::<Color>(),
                         Err(ParseColorError::Arity { expected: 4, .. })));
        assert!(matches!("rgb(1, 2, 300)".parse::<Color>(),
                         Err(ParseColorError::Component { .. })));
        assert!(matches!("rgba(1, 2, 3, 1.5)".parse::<Color>(),
                         Err(ParseColorError::Component { .. })));
    }

    #[test]
    fn serializes_as_css_text() {
        let c = Color::rgba(255, 255, 255, 0.98);
        assert_eq!(serde_json::to_string(&c).unwrap(),
                   "\"rgba(255, 255, 255, 0.98)\"");
    }
}
