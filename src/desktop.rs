//! Colors of the desktop client's charts.
//!
//! The desktop client only has a dark theme, drawn on its own
//! background rather than on a transparent canvas.

use lazy_static::lazy_static;
use serde::Serialize;
use crate::Color;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopColors {
    pub text: Color,
    pub accent_blue: Color,
    pub accent_teal: Color,
    pub accent_red: Color,
    pub accent_purple: Color,
    pub bg: Color,
    pub border: Color,
}

lazy_static! {
  pub static ref DESKTOP: DesktopColors = DesktopColors {
    text:          Color::hex(0xc5, 0xc6, 0xc7),
    accent_blue:   Color::hex(0x66, 0xfc, 0xf1),
    accent_teal:   Color::hex(0x45, 0xa2, 0x9e),
    accent_red:    Color::hex(0xfc, 0x20, 0x44),
    accent_purple: Color::hex(0xc5, 0x86, 0xc0),
    bg:            Color::hex(0x0b, 0x0c, 0x10),
    border:        Color::hex(0x1f, 0x28, 0x33),
  };
}

impl DesktopColors {
    /// Bars of the average flowrate, pressure and temperature chart.
    pub fn parameter_colors(&self) -> [Color; 3] {
        [self.accent_blue, self.accent_teal, self.accent_red]
    }

    /// Flowrate, pressure and temperature series of the per-type
    /// comparison chart.
    pub fn comparison_colors(&self) -> [Color; 3] {
        [self.accent_blue, self.accent_purple, self.accent_red]
    }
}
