use serde::{Deserialize, Serialize};

use crate::animation::easing::in_expo;
use crate::core::{AxisScale, DayGraphData, Rect};
use crate::error::{ChartError, ChartResult};

/// Linear interpolation, `a` at `p = 0` and `b` at `p = 1`.
#[must_use]
pub fn lerp(a: f64, b: f64, p: f64) -> f64 {
    (1.0 - p) * a + p * b
}

/// Pixel mapping of a day graph at one zoom level.
///
/// Zoom 0 fits the whole laid-out window into the plot, zoom 1 fits the
/// season. Day positions are measured from the window start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomGeometry {
    /// Width of one day.
    pub dx: f64,
    /// Horizontal shift applied to every day position.
    pub offset: f64,
    /// Height of one count unit.
    pub dy: f64,
    pub season_alpha: f64,
    pub origin_x: f64,
    pub window_start: usize,
}

impl ZoomGeometry {
    pub fn compute(
        data: &DayGraphData,
        plot_rect: Rect,
        zoom: f64,
        scale: &AxisScale,
    ) -> ChartResult<Self> {
        if !zoom.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "zoom must be finite, got {zoom}"
            )));
        }
        if !plot_rect.width.is_finite()
            || !plot_rect.height.is_finite()
            || plot_rect.width < 0.0
            || plot_rect.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "plot rect size must be finite and >= 0".to_owned(),
            ));
        }
        let zoom = zoom.clamp(0.0, 1.0);

        let window = data.window();
        let season = data.season();
        let dx_full = plot_rect.width / window.len() as f64;
        let dx_season = plot_rect.width / season.len() as f64;
        let dx = lerp(dx_full, dx_season, zoom);
        let season_shift = season.start().index().saturating_sub(window.start().index()) as f64;
        let offset = lerp(0.0, -dx * season_shift, zoom);
        let dy = plot_rect.height / scale.max();

        Ok(Self {
            dx,
            offset,
            dy,
            season_alpha: (1.0 - in_expo(zoom)).clamp(0.0, 1.0),
            origin_x: plot_rect.left(),
            window_start: window.start().index(),
        })
    }

    /// Left edge of the day with absolute index `day_index`.
    #[must_use]
    pub fn day_x(&self, day_index: usize) -> f64 {
        let relative = day_index as f64 - self.window_start as f64;
        self.origin_x + self.offset + self.dx * relative
    }

    /// Height of a bar for `count`.
    #[must_use]
    pub fn bar_height(&self, count: f64) -> f64 {
        self.dy * count
    }
}
