//! Dark and light color themes for dashboard charts.
//!
//! - [`get_palette`] / [`ThemeMode::palette`]
//! - [`color_sequence`], [`border_sequence`], [`series`]
//! - [`build_tooltip_config`]
//! - [`interaction_config`]
//!
//! [`ChartOptions`] puts all of it together into the options object of
//! a chart.
//!
//! # Example
//!
//! ```
//! use chart_theme::{get_palette, color_sequence, border_sequence};
//! let dark = get_palette("dark").unwrap();
//! assert_eq!(dark.primary_border, "#66fcf1");
//! assert_eq!(color_sequence(dark)[0], "rgba(102, 252, 241, 0.7)");
//! assert_eq!(border_sequence(dark)[0], "#66fcf1");
//! assert!(get_palette("sepia").is_err());
//! ```

use std::fmt;
use std::str::FromStr;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod color;
pub use color::{Color, Notation, ParseColorError};

mod palettes;
pub use palettes::ty::{Palette, Series, SeriesColors, FIELD_COUNT};

pub mod desktop;
pub mod interaction;
pub use interaction::{interaction_config, InteractionConfig};
pub mod options;
pub use options::ChartOptions;
pub mod tooltip;
pub use tooltip::{build_tooltip_config, TooltipConfig};

/// Errors of this crate.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme mode “{0}” (expected “dark” or “light”)")]
    InvalidMode(String),
    #[error("no palette color named “{0}”")]
    UnknownField(String),
    #[error("cannot serialize chart options: {0}")]
    Json(#[from] serde_json::Error),
}

/// The chart themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    /// Returns the palette of this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &palettes::DARK,
            ThemeMode::Light => &palettes::LIGHT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    /// Only the exact names `"dark"` and `"light"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

/// Returns the palette of the theme named `mode`.  There is no
/// fallback: an unknown name is an [`ThemeError::InvalidMode`] error.
pub fn get_palette(mode: &str) -> Result<&'static Palette, ThemeError> {
    match mode.parse::<ThemeMode>() {
        Ok(m) => {
            debug!("using the {m} chart palette");
            Ok(m.palette())
        }
        Err(e) => {
            warn!("{e}");
            Err(e)
        }
    }
}

/// Return the fill colors of the six series, in [`Series::ORDER`].
/// Suited to pie and doughnut charts.
pub fn color_sequence(palette: &Palette) -> [Color; 6] {
    Series::ORDER.map(|s| *palette.fill(s))
}

/// Return the border colors matching [`color_sequence`] position by
/// position.
pub fn border_sequence(palette: &Palette) -> [Color; 6] {
    Series::ORDER.map(|s| *palette.border(s))
}

/// Return an iterator over the series of `palette`, in
/// [`Series::ORDER`], each with its fill and border colors.
pub fn series(palette: &Palette) -> SeriesIter<'_> {
    SeriesIter { palette, i: 0, j: Series::ORDER.len() }
}

/// Return the `(fill, border)` colors of `n` datasets, going around
/// the six series as many times as needed.
pub fn dataset_colors(palette: &Palette, n: usize) -> Vec<(Color, Color)> {
    series(palette).cycle().take(n)
        .map(|s| (*s.fill, *s.border))
        .collect()
}

/// An exact size iterator over the series of a [`Palette`].
///
/// Created by [`series`].
#[derive(Clone, Copy)]
pub struct SeriesIter<'a> {
    palette: &'a Palette,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // position after the last one to be consumed
}

impl<'a> SeriesIter<'a> {
    fn colors(&self, k: usize) -> SeriesColors<'a> {
        let series = Series::ORDER[k];
        SeriesColors { series,
                       fill: self.palette.fill(series),
                       border: self.palette.border(series) }
    }
}

impl<'a> Iterator for SeriesIter<'a> {
    type Item = SeriesColors<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let x = self.colors(self.i);
        self.i += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SeriesIter<'_> {}

impl DoubleEndedIterator for SeriesIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some(self.colors(self.j))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_across_modes() {
        let names = |m: ThemeMode| -> Vec<&'static str> {
            m.palette().fields().iter().map(|(n, _)| *n).collect() };
        assert_eq!(names(ThemeMode::Dark), names(ThemeMode::Light));
        assert_eq!(names(ThemeMode::Dark).len(), FIELD_COUNT);
    }

    #[test]
    fn sequences_are_aligned() {
        for mode in ThemeMode::ALL {
            let p = mode.palette();
            let fills = color_sequence(p);
            let borders = border_sequence(p);
            for (i, s) in Series::ORDER.iter().enumerate() {
                assert_eq!(fills[i], *p.get(s.name()).unwrap());
                let border = format!("{}Border", s.name());
                assert_eq!(borders[i], *p.get(&border).unwrap());
            }
        }
    }

    #[test]
    fn sequence_order() {
        let light = get_palette("light").unwrap();
        assert_eq!(color_sequence(light).map(|c| c.to_string()), [
            "rgba(6, 182, 212, 0.75)", "rgba(20, 184, 166, 0.75)",
            "rgba(34, 197, 94, 0.75)", "rgba(239, 68, 68, 0.75)",
            "rgba(245, 158, 11, 0.75)", "rgba(139, 92, 246, 0.75)"]);
        assert_eq!(border_sequence(light).map(|c| c.to_string()), [
            "#0891b2", "#0d9488", "#16a34a", "#dc2626", "#d97706",
            "#7c3aed"]);
        let dark = get_palette("dark").unwrap();
        assert_eq!(color_sequence(dark).map(|c| c.to_string()), [
            "rgba(102, 252, 241, 0.7)", "rgba(69, 162, 158, 0.7)",
            "rgba(32, 252, 143, 0.7)", "rgba(252, 32, 68, 0.7)",
            "rgba(224, 168, 0, 0.7)", "rgba(168, 85, 247, 0.7)"]);
        assert_eq!(border_sequence(dark).map(|c| c.to_string()), [
            "#66fcf1", "#45a29e", "#20fc8f", "#fc2044", "#e0a800",
            "#a855f7"]);
    }

    #[test]
    fn series_iter() {
        let dark = ThemeMode::Dark.palette();
        let it = series(dark);
        assert_eq!(it.len(), 6);
        let fwd: Vec<_> = it.map(|s| *s.fill).collect();
        assert_eq!(fwd, color_sequence(dark));
        let mut back: Vec<_> = it.rev().map(|s| *s.border).collect();
        back.reverse();
        assert_eq!(back, border_sequence(dark));
        let mut it = series(dark);
        assert_eq!(it.next().map(|s| s.series), Some(Series::Primary));
        assert_eq!(it.next_back().map(|s| s.series), Some(Series::Senary));
        assert_eq!(it.len(), 4);
    }

    #[test]
    fn dataset_colors_wrap_around() {
        let dark = ThemeMode::Dark.palette();
        let c = dataset_colors(dark, 8);
        assert_eq!(c.len(), 8);
        assert_eq!(c[6], c[0]);
        assert_eq!(c[7], (dark.secondary, dark.secondary_border));
        assert!(dataset_colors(dark, 0).is_empty());
    }

    #[test]
    fn invalid_mode() {
        for m in ["sepia", "", "Dark", " light"] {
            match get_palette(m) {
                Err(ThemeError::InvalidMode(s)) => assert_eq!(s, m),
                r => panic!("{m:?}: unexpected {r:?}"),
            }
        }
    }

    #[test]
    fn unknown_field() {
        let dark = ThemeMode::Dark.palette();
        assert_eq!(dark.get("grid").unwrap(), &dark.grid);
        assert!(matches!(dark.get("background"),
                         Err(ThemeError::UnknownField(_))));
    }

    #[test]
    fn mode_round_trips_through_serde() {
        let m: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(m, ThemeMode::Light);
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(),
                   "\"dark\"");
        assert!(serde_json::from_str::<ThemeMode>("\"sepia\"").is_err());
    }
}
