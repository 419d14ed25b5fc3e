//! Hover tooltip styling.

use serde::Serialize;
use crate::{Color, Palette};

/// Font descriptor of the charting library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
    pub family: &'static str,
}

/// Font of tooltip titles.
pub const TITLE_FONT: Font = Font {
    size: 14, weight: Some("bold"), family: "'JetBrains Mono', monospace" };

/// Font of tooltip bodies.
pub const BODY_FONT: Font = Font {
    size: 12, weight: None, family: "'Inter', sans-serif" };

/// Tooltip options, as the `plugins.tooltip` entry of a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub enabled: bool,
    pub background_color: Color,
    pub title_color: Color,
    pub body_color: Color,
    pub border_color: Color,
    pub border_width: u32,
    pub padding: u32,
    pub corner_radius: u32,
    pub title_font: Font,
    pub body_font: Font,
    pub display_colors: bool,
    pub box_padding: u32,
}

/// Tooltip options colored with `palette`.
///
/// ```
/// use chart_theme::{get_palette, build_tooltip_config};
/// let light = get_palette("light").unwrap();
/// let tooltip = build_tooltip_config(light);
/// assert_eq!(tooltip.padding, 12);
/// assert_eq!(tooltip.border_color, light.tooltip_border);
/// ```
pub fn build_tooltip_config(palette: &Palette) -> TooltipConfig {
    TooltipConfig {
        enabled: true,
        background_color: palette.tooltip_bg,
        title_color: palette.tooltip_title,
        body_color: palette.tooltip_body,
        border_color: palette.tooltip_border,
        border_width: 1,
        padding: 12,
        corner_radius: 4,
        title_font: TITLE_FONT,
        body_font: BODY_FONT,
        display_colors: true,
        box_padding: 4,
    }
}
