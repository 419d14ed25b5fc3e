use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
use crate::Color;

lazy_static! {
  pub(crate) static ref DARK: Palette = Palette {
    primary:           Color::rgba(102, 252, 241, 0.7),
    primary_border:    Color::hex(0x66, 0xfc, 0xf1),
    secondary:         Color::rgba(69, 162, 158, 0.7),
    secondary_border:  Color::hex(0x45, 0xa2, 0x9e),
    tertiary:          Color::rgba(252, 32, 68, 0.7),
    tertiary_border:   Color::hex(0xfc, 0x20, 0x44),
    quaternary:        Color::rgba(32, 252, 143, 0.7),
    quaternary_border: Color::hex(0x20, 0xfc, 0x8f),
    quinary:           Color::rgba(224, 168, 0, 0.7),
    quinary_border:    Color::hex(0xe0, 0xa8, 0x00),
    senary:            Color::rgba(168, 85, 247, 0.7),
    senary_border:     Color::hex(0xa8, 0x55, 0xf7),
    grid:              Color::hex(0x30, 0x36, 0x3d),
    text:              Color::hex(0x8b, 0x94, 0x9e),
    legend_text:       Color::hex(0xe6, 0xed, 0xf3),
    tooltip_bg:        Color::rgba(11, 12, 16, 0.95),
    tooltip_title:     Color::hex(0x66, 0xfc, 0xf1),
    tooltip_body:      Color::hex(0xc5, 0xc6, 0xc7),
    tooltip_border:    Color::hex(0x45, 0xa2, 0x9e),
  };

  // Series colors are more saturated to stand out on a white background.
  pub(crate) static ref LIGHT: Palette = Palette {
    primary:           Color::rgba(6, 182, 212, 0.75),
    primary_border:    Color::hex(0x08, 0x91, 0xb2),
    secondary:         Color::rgba(20, 184, 166, 0.75),
    secondary_border:  Color::hex(0x0d, 0x94, 0x88),
    tertiary:          Color::rgba(239, 68, 68, 0.75),
    tertiary_border:   Color::hex(0xdc, 0x26, 0x26),
    quaternary:        Color::rgba(34, 197, 94, 0.75),
    quaternary_border: Color::hex(0x16, 0xa3, 0x4a),
    quinary:           Color::rgba(245, 158, 11, 0.75),
    quinary_border:    Color::hex(0xd9, 0x77, 0x06),
    senary:            Color::rgba(139, 92, 246, 0.75),
    senary_border:     Color::hex(0x7c, 0x3a, 0xed),
    grid:              Color::hex(0xe2, 0xe8, 0xf0),
    text:              Color::hex(0x64, 0x74, 0x8b),
    legend_text:       Color::hex(0x0f, 0x17, 0x2a),
    tooltip_bg:        Color::rgba(255, 255, 255, 0.98),
    tooltip_title:     Color::hex(0x0f, 0x17, 0x2a),
    tooltip_body:      Color::hex(0x47, 0x55, 0x69),
    tooltip_border:    Color::hex(0xe2, 0xe8, 0xf0),
  };
}
