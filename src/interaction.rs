//! Pan and zoom behaviour of charts.
//!
//! Scrolling or pinching zooms, dragging with <kbd>Ctrl</kbd> held
//! pans.  The configuration is the same for every theme.

use std::fmt;
use log::trace;
use serde::Serialize;

/// Update modes accepted by a chart redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Redraw without animation.
    None,
    Active,
    Hide,
    Reset,
    Resize,
    Show,
}

/// A rendered chart, as seen by the interaction callbacks.
pub trait Chart {
    /// Recompute and redraw the chart.  Must not fail.
    fn update(&mut self, mode: UpdateMode);
}

/// What the charting library hands to a zoom callback.
pub struct ZoomContext<'a> {
    pub chart: &'a mut dyn Chart,
}

/// Callback run once a zoom gesture is over.
pub type ZoomHandler = fn(ZoomContext<'_>);

/// Axes a gesture acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axes { X, Y, XY }

/// Key that has to be held for a gesture to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey { Ctrl, Alt, Shift, Meta }

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanOptions {
    pub enabled: bool,
    pub mode: Axes,
    pub modifier_key: ModifierKey,
}

/// Zoom options.  The callback is not part of the serialized form;
/// hosts register [`ZoomOptions::on_zoom_complete`] themselves.
#[derive(Clone, Copy, Serialize)]
pub struct ZoomOptions {
    pub wheel: Toggle,
    pub pinch: Toggle,
    pub mode: Axes,
    #[serde(skip_serializing)]
    pub on_zoom_complete: ZoomHandler,
}

impl fmt::Debug for ZoomOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomOptions")
            .field("wheel", &self.wheel)
            .field("pinch", &self.pinch)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// The `plugins.zoom` entry of a chart.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InteractionConfig {
    pub pan: PanOptions,
    pub zoom: ZoomOptions,
}

/// Redraw the zoomed chart with no animation.  Calling it several
/// times for the same gesture just redraws again.
pub fn redraw_without_animation(ctx: ZoomContext<'_>) {
    trace!("zoom complete, redrawing without animation");
    ctx.chart.update(UpdateMode::None);
}

pub static INTERACTION_CONFIG: InteractionConfig = InteractionConfig {
    pan: PanOptions {
        enabled: true,
        mode: Axes::XY,
        modifier_key: ModifierKey::Ctrl,
    },
    zoom: ZoomOptions {
        wheel: Toggle { enabled: true },
        pinch: Toggle { enabled: true },
        mode: Axes::XY,
        on_zoom_complete: redraw_without_animation,
    },
};

/// Pan and zoom configuration shared by all charts.
#[inline]
pub fn interaction_config() -> &'static InteractionConfig {
    &INTERACTION_CONFIG
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        updates: Vec<UpdateMode>,
    }

    impl Chart for Recorder {
        fn update(&mut self, mode: UpdateMode) { self.updates.push(mode) }
    }

    #[test]
    fn zoom_complete_redraws_without_animation() {
        let mut chart = Recorder::default();
        let cb = interaction_config().zoom.on_zoom_complete;
        cb(ZoomContext { chart: &mut chart });
        assert_eq!(chart.updates, [UpdateMode::None]);
        // Same gesture reported twice.
        cb(ZoomContext { chart: &mut chart });
        assert_eq!(chart.updates, [UpdateMode::None, UpdateMode::None]);
    }

    #[test]
    fn serialized_form() {
        assert_eq!(serde_json::to_value(interaction_config()).unwrap(),
                   json!({
                       "pan": { "enabled": true, "mode": "xy",
                                "modifierKey": "ctrl" },
                       "zoom": { "wheel": { "enabled": true },
                                 "pinch": { "enabled": true },
                                 "mode": "xy" },
                   }));
    }
}
