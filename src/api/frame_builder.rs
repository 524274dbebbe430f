use tracing::trace;

use crate::core::{AxisScale, DayGraphData, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, LineStrokeStyle, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::label_format::format_tick_label;
use super::{DayGraphConfig, DayGraphStyle, ZoomGeometry};

/// Plot area below the month header inside `rect`.
pub fn plot_rect(rect: Rect, header_height_px: f64) -> ChartResult<Rect> {
    let plot = Rect::from_trbl(
        rect.top() + header_height_px,
        rect.right(),
        rect.bottom(),
        rect.left(),
    );
    if !plot.width.is_finite() || !plot.height.is_finite() || plot.width <= 0.0 || plot.height <= 0.0
    {
        return Err(ChartError::InvalidData(format!(
            "plot area is empty: {}x{} after a {header_height_px}px header",
            plot.width, plot.height
        )));
    }
    Ok(plot)
}

/// Draws `data` into `rect` at `zoom`.
///
/// Commands are emitted back to front: clear, month bands and labels, the
/// season marker, the dotted count grid and its labels, then one bar per day.
pub fn render_to(
    data: &DayGraphData,
    rect: Rect,
    zoom: f64,
    config: &DayGraphConfig,
) -> ChartResult<RenderFrame> {
    let plot = plot_rect(rect, config.header_height_px)?;
    let scale = data.count_scale(config.tick_limit)?;
    let geometry = ZoomGeometry::compute(data, plot, zoom, &scale)?;
    let style = &config.style;

    let mut frame = RenderFrame::new(config.viewport).with_clear(rect);
    append_months(&mut frame, data, rect, &geometry, style);
    append_season_marker(&mut frame, data, plot, &geometry, style);
    append_grid(&mut frame, plot, &scale, &geometry, style);
    append_bars(&mut frame, data, plot, &geometry, style);

    trace!(
        zoom,
        dx = geometry.dx,
        offset = geometry.offset,
        commands = frame.commands.len(),
        "built day graph frame"
    );
    Ok(frame)
}

fn append_months(
    frame: &mut RenderFrame,
    data: &DayGraphData,
    rect: Rect,
    geometry: &ZoomGeometry,
    style: &DayGraphStyle,
) {
    for (position, span) in data.months().iter().enumerate() {
        let x = geometry.day_x(span.start);
        if position % 2 == 0 {
            frame.push_rect(RectPrimitive::new(
                x,
                rect.top(),
                geometry.dx * span.len() as f64,
                rect.height,
                style.month_band_color,
            ));
        }
        frame.push_text(TextPrimitive::new(
            span.month.name().to_lowercase(),
            x + style.label_inset_px,
            rect.top() + style.label_inset_px,
            style.month_label_font_size_px,
            style.month_label_color,
            TextHAlign::Left,
        ));
    }
}

fn append_season_marker(
    frame: &mut RenderFrame,
    data: &DayGraphData,
    plot: Rect,
    geometry: &ZoomGeometry,
    style: &DayGraphStyle,
) {
    if geometry.season_alpha <= 0.0 {
        return;
    }
    let season = data.season();
    let x1 = geometry.day_x(season.start().index());
    let x2 = geometry.day_x(season.end().index()) + geometry.dx;
    let y = plot.top() + style.season_marker_offset_px;
    let foot = y + style.season_marker_height_px;
    frame.push_polyline(PolylinePrimitive::new(
        vec![(x1, foot), (x1, y), (x2, y), (x2, foot)],
        1.0,
        style.season_marker_color.with_alpha(geometry.season_alpha),
    ));
}

fn append_grid(
    frame: &mut RenderFrame,
    plot: Rect,
    scale: &AxisScale,
    geometry: &ZoomGeometry,
    style: &DayGraphStyle,
) {
    let dash = LineStrokeStyle::Dashed {
        on_px: style.grid_dash_on_px,
        off_px: style.grid_dash_off_px,
    };
    for &div in scale.divs() {
        let y = plot.bottom() - geometry.bar_height(div);
        frame.push_line(
            LinePrimitive::new(
                geometry.origin_x + geometry.offset,
                y,
                plot.right(),
                y,
                style.grid_line_width,
                style.grid_line_color,
            )
            .with_stroke_style(dash),
        );
    }
    for &div in scale.divs() {
        let y = plot.bottom() - geometry.bar_height(div);
        frame.push_text(TextPrimitive::new(
            format_tick_label(div),
            plot.left() + style.label_inset_px,
            y - style.label_inset_px - style.tick_label_font_size_px,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Left,
        ));
    }
}

fn append_bars(
    frame: &mut RenderFrame,
    data: &DayGraphData,
    plot: Rect,
    geometry: &ZoomGeometry,
    style: &DayGraphStyle,
) {
    let padding = style.bar_padding_px;
    let width = (geometry.dx - 2.0 * padding).max(0.0);
    for bucket in data.days() {
        let height = geometry.bar_height(bucket.count() as f64);
        frame.push_rect(RectPrimitive::new(
            geometry.day_x(bucket.day.index()) + padding,
            plot.bottom() - height,
            width,
            height,
            style.bar_color,
        ));
    }
}
