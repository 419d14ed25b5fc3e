use serde::Serialize;
use crate::{Color, ThemeError};

/// The colors of one chart theme.
///
/// Six data series, each with a translucent fill and an opaque border,
/// plus the colors of the chart furniture.  The dark and light themes
/// are two values of this one type, so they always have the same
/// fields.  Serializing gives the camelCase keys the charting library
/// (and [`Palette::get`]) use.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Main data series (cyan).
    pub primary: Color,
    pub primary_border: Color,
    /// Main data series (teal).
    pub secondary: Color,
    pub secondary_border: Color,
    /// Warning, temperature (red).
    pub tertiary: Color,
    pub tertiary_border: Color,
    /// Success, positive (green).
    pub quaternary: Color,
    pub quaternary_border: Color,
    /// Alert (amber).
    pub quinary: Color,
    pub quinary_border: Color,
    /// Supplementary (purple).
    pub senary: Color,
    pub senary_border: Color,
    pub grid: Color,
    pub text: Color,
    pub legend_text: Color,
    pub tooltip_bg: Color,
    pub tooltip_title: Color,
    pub tooltip_body: Color,
    pub tooltip_border: Color,
}

/// Number of named colors in a [`Palette`].
pub const FIELD_COUNT: usize = 19;

impl Palette {
    /// Returns all the colors of the palette with their names, in
    /// declaration order.
    pub fn fields(&self) -> [(&'static str, &Color); FIELD_COUNT] {
        [("primary", &self.primary),
         ("primaryBorder", &self.primary_border),
         ("secondary", &self.secondary),
         ("secondaryBorder", &self.secondary_border),
         ("tertiary", &self.tertiary),
         ("tertiaryBorder", &self.tertiary_border),
         ("quaternary", &self.quaternary),
         ("quaternaryBorder", &self.quaternary_border),
         ("quinary", &self.quinary),
         ("quinaryBorder", &self.quinary_border),
         ("senary", &self.senary),
         ("senaryBorder", &self.senary_border),
         ("grid", &self.grid),
         ("text", &self.text),
         ("legendText", &self.legend_text),
         ("tooltipBg", &self.tooltip_bg),
         ("tooltipTitle", &self.tooltip_title),
         ("tooltipBody", &self.tooltip_body),
         ("tooltipBorder", &self.tooltip_border)]
    }

    /// Look a color up by its camelCase name (e.g. `"legendText"`).
    pub fn get(&self, name: &str) -> Result<&Color, ThemeError> {
        self.fields().into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| ThemeError::UnknownField(name.to_string()))
    }

    /// Fill color of `series`.
    pub fn fill(&self, series: Series) -> &Color {
        use Series::*;
        match series {
            Primary => &self.primary,
            Secondary => &self.secondary,
            Tertiary => &self.tertiary,
            Quaternary => &self.quaternary,
            Quinary => &self.quinary,
            Senary => &self.senary,
        }
    }

    /// Border color of `series`.
    pub fn border(&self, series: Series) -> &Color {
        use Series::*;
        match series {
            Primary => &self.primary_border,
            Secondary => &self.secondary_border,
            Tertiary => &self.tertiary_border,
            Quaternary => &self.quaternary_border,
            Quinary => &self.quinary_border,
            Senary => &self.senary_border,
        }
    }
}

/// A data series slot of a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Series {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Quinary,
    Senary,
}

impl Series {
    /// The order in which series colors are handed out to successive
    /// datasets: primary, secondary, quaternary, tertiary, quinary,
    /// senary.
    pub const ORDER: [Series; 6] = [
        Series::Primary, Series::Secondary, Series::Quaternary,
        Series::Tertiary, Series::Quinary, Series::Senary];

    /// Name of the fill field.
    pub fn name(self) -> &'static str {
        use Series::*;
        match self {
            Primary => "primary",
            Secondary => "secondary",
            Tertiary => "tertiary",
            Quaternary => "quaternary",
            Quinary => "quinary",
            Senary => "senary",
        }
    }
}

/// The fill and border colors of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesColors<'a> {
    pub series: Series,
    pub fill: &'a Color,
    pub border: &'a Color,
}
