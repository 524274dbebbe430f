use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::{DEFAULT_TICK_LIMIT, DayWindow, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Height used by hosts that do not size the graph themselves.
pub const DEFAULT_GRAPH_HEIGHT_PX: u32 = 300;

/// Colors and metrics of every drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayGraphStyle {
    pub month_band_color: Color,
    pub month_label_color: Color,
    pub month_label_font_size_px: f64,
    pub season_marker_color: Color,
    /// Distance from the plot top to the marker's horizontal stroke.
    pub season_marker_offset_px: f64,
    pub season_marker_height_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_dash_on_px: f64,
    pub grid_dash_off_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    pub label_inset_px: f64,
    pub bar_color: Color,
    /// Horizontal gap on each side of a bar.
    pub bar_padding_px: f64,
}

impl Default for DayGraphStyle {
    fn default() -> Self {
        Self {
            month_band_color: Color::from_rgb8(0xf6, 0xf6, 0xf6),
            month_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            month_label_font_size_px: 14.0,
            season_marker_color: Color::from_rgb8(0x33, 0x33, 0x33),
            season_marker_offset_px: 20.0,
            season_marker_height_px: 10.0,
            grid_line_color: Color::from_rgb8(0x99, 0x99, 0x99),
            grid_line_width: 1.0,
            grid_dash_on_px: 1.0,
            grid_dash_off_px: 3.0,
            tick_label_color: Color::from_rgb8(0x99, 0x99, 0x99),
            tick_label_font_size_px: 10.0,
            label_inset_px: 5.0,
            bar_color: Color::from_rgb8(0x00, 0x99, 0xff),
            bar_padding_px: 0.5,
        }
    }
}

impl DayGraphStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.month_band_color,
            self.month_label_color,
            self.season_marker_color,
            self.grid_line_color,
            self.tick_label_color,
            self.bar_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("month_label_font_size_px", self.month_label_font_size_px),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("grid_line_width", self.grid_line_width),
            ("grid_dash_on_px", self.grid_dash_on_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("season_marker_offset_px", self.season_marker_offset_px),
            ("season_marker_height_px", self.season_marker_height_px),
            ("grid_dash_off_px", self.grid_dash_off_px),
            ("label_inset_px", self.label_inset_px),
            ("bar_padding_px", self.bar_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Serializable setup of a day graph view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayGraphConfig {
    pub viewport: Viewport,
    #[serde(default = "default_season")]
    pub season: DayWindow,
    #[serde(default = "default_header_height_px")]
    pub header_height_px: f64,
    #[serde(default = "default_tick_limit")]
    pub tick_limit: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default = "default_transition_easing")]
    pub transition_easing: Easing,
    #[serde(default)]
    pub style: DayGraphStyle,
}

impl DayGraphConfig {
    /// Config with the Atlantic hurricane season and default styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            season: default_season(),
            header_height_px: default_header_height_px(),
            tick_limit: default_tick_limit(),
            transition_duration_ms: default_transition_duration_ms(),
            transition_easing: default_transition_easing(),
            style: DayGraphStyle::default(),
        }
    }

    #[must_use]
    pub fn with_season(mut self, season: DayWindow) -> Self {
        self.season = season;
        self
    }

    #[must_use]
    pub fn with_header_height_px(mut self, header_height_px: f64) -> Self {
        self.header_height_px = header_height_px;
        self
    }

    #[must_use]
    pub fn with_tick_limit(mut self, tick_limit: f64) -> Self {
        self.tick_limit = tick_limit;
        self
    }

    /// Sets duration and easing of the zoom toggle.
    #[must_use]
    pub fn with_transition(mut self, duration_ms: f64, easing: Easing) -> Self {
        self.transition_duration_ms = duration_ms;
        self.transition_easing = easing;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: DayGraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.header_height_px.is_finite()
            || self.header_height_px < 0.0
            || self.header_height_px >= f64::from(self.viewport.height)
        {
            return Err(ChartError::InvalidData(format!(
                "header height {} must be >= 0 and below viewport height {}",
                self.header_height_px, self.viewport.height
            )));
        }
        if !self.tick_limit.is_finite() || self.tick_limit <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick limit must be finite and > 0".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_season() -> DayWindow {
    DayWindow::atlantic_hurricane_season()
}

fn default_header_height_px() -> f64 {
    30.0
}

fn default_tick_limit() -> f64 {
    DEFAULT_TICK_LIMIT
}

fn default_transition_duration_ms() -> f64 {
    500.0
}

fn default_transition_easing() -> Easing {
    Easing::InOutQuart
}
