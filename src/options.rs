//! Complete option objects for themed charts.

use log::debug;
use serde::Serialize;
use crate::{Color, Palette, ThemeError, ThemeMode,
            interaction::{interaction_config, InteractionConfig},
            tooltip::{build_tooltip_config, TooltipConfig}};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridOptions {
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickOptions {
    pub color: Color,
}

/// Styling of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisOptions {
    pub grid: GridOptions,
    pub ticks: TickOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegendOptions {
    pub labels: LegendLabels,
}

#[derive(Clone, Debug, Serialize)]
pub struct Plugins {
    pub legend: LegendOptions,
    pub tooltip: TooltipConfig,
    pub zoom: &'static InteractionConfig,
}

/// The `options` object of a themed chart: grid and tick colors on
/// both axes, legend labels, tooltip and pan/zoom plugin.
///
/// ```
/// use chart_theme::{ChartOptions, ThemeMode};
/// let json = ChartOptions::themed(ThemeMode::Light).to_json().unwrap();
/// assert_eq!(json["scales"]["x"]["grid"]["color"], "#e2e8f0");
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

impl ChartOptions {
    /// Options colored with `palette`.
    pub fn new(palette: &Palette) -> Self {
        let axis = AxisOptions {
            grid: GridOptions { color: palette.grid },
            ticks: TickOptions { color: palette.text },
        };
        ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales { x: axis, y: axis },
            plugins: Plugins {
                legend: LegendOptions {
                    labels: LegendLabels { color: palette.legend_text } },
                tooltip: build_tooltip_config(palette),
                zoom: interaction_config(),
            },
        }
    }

    /// Options for the theme `mode`.
    pub fn themed(mode: ThemeMode) -> Self {
        debug!("building chart options for the {mode} theme");
        Self::new(mode.palette())
    }

    /// The options as a JSON value, ready to hand to the charting
    /// library.
    pub fn to_json(&self) -> Result<serde_json::Value, ThemeError> {
        Ok(serde_json::to_value(self)?)
    }
}
