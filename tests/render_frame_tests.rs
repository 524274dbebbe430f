use chrono::{TimeZone, Utc};
use storm_days::ChartError;
use storm_days::api::{DayGraphConfig, plot_rect, render_to};
use storm_days::core::{DayGraphData, Rect, Storm, TrackEntry, Viewport};
use storm_days::render::{
    Color, DrawCommand, LinePrimitive, LineStrokeStyle, NullRenderer, PolylinePrimitive,
    RectPrimitive, RenderFrame, Renderer,
};

fn storm(id: &str, days: &[(u32, u32)]) -> Storm {
    let track = days
        .iter()
        .map(|&(month, day)| {
            TrackEntry::at(
                Utc.with_ymd_and_hms(2021, month, day, 0, 0, 0)
                    .single()
                    .expect("valid time"),
            )
        })
        .collect();
    Storm::new(id, None, 2021, track)
}

fn config() -> DayGraphConfig {
    DayGraphConfig::new(Viewport::new(732, 300))
}

fn one_storm_data() -> DayGraphData {
    DayGraphData::full_year(
        vec![storm("AL012021", &[(9, 1), (9, 4)])],
        config().season,
    )
}

#[test]
fn frame_starts_with_clear_and_draws_every_layer() {
    let config = config();
    let rect = config.viewport.rect();
    let frame = render_to(&one_storm_data(), rect, 0.0, &config).expect("frame");

    assert_eq!(frame.commands.first(), Some(&DrawCommand::Clear(rect)));
    // 6 even-month bands plus one bar per day.
    assert_eq!(frame.rects().count(), 6 + 366);
    assert_eq!(frame.polylines().count(), 1);
    // for_range(0, 1) puts gridlines at 0.2, 0.4, 0.6 and 0.8.
    assert_eq!(frame.lines().count(), 4);
    assert_eq!(frame.texts().count(), 12 + 4);
    frame.validate().expect("valid frame");
}

#[test]
fn month_labels_are_lowercase_in_calendar_order() {
    let config = config();
    let frame = render_to(&one_storm_data(), config.viewport.rect(), 0.0, &config)
        .expect("frame");

    let labels: Vec<&str> = frame.texts().take(12).map(|text| text.text.as_str()).collect();
    assert_eq!(
        labels,
        ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"]
    );
}

#[test]
fn grid_is_dotted_and_labelled_with_grouped_counts() {
    let storms: Vec<Storm> = (0..23)
        .map(|i| storm(&format!("AL{:02}2021", i + 1), &[(8, 20), (8, 21)]))
        .collect();
    let config = config();
    let data = DayGraphData::full_year(storms, config.season);
    let frame = render_to(&data, config.viewport.rect(), 0.0, &config).expect("frame");

    let grid: Vec<&LinePrimitive> = frame.lines().collect();
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|line| line.stroke_style
        == LineStrokeStyle::Dashed {
            on_px: 1.0,
            off_px: 3.0
        }));

    let tick_labels: Vec<&str> = frame.texts().skip(12).map(|text| text.text.as_str()).collect();
    assert_eq!(tick_labels, ["5", "10", "15", "20"]);

    // Plot spans y = 30..300 and the axis tops out at 25.
    let plot_height = 270.0;
    assert!((grid[0].y1 - (300.0 - plot_height * 5.0 / 25.0)).abs() < 1e-9);
}

#[test]
fn bars_grow_from_the_plot_bottom() {
    let config = config();
    let data = one_storm_data();
    let frame = render_to(&data, config.viewport.rect(), 0.0, &config).expect("frame");

    let bars: Vec<&RectPrimitive> = frame.rects().skip(6).collect();
    assert_eq!(bars.len(), 366);
    let sep_1 = 244;
    let bar = bars[sep_1];
    assert_eq!(bar.height, 270.0);
    assert_eq!(bar.y, 30.0);
    assert_eq!(bar.x, 2.0 * sep_1 as f64 + 0.5);
    assert_eq!(bar.width, 1.0);
    assert_eq!(bar.fill_color, Color::from_rgb8(0x00, 0x99, 0xff));
    assert_eq!(bars[0].height, 0.0);
}

#[test]
fn season_marker_fades_out_when_zoomed() {
    let config = config();
    let data = one_storm_data();

    let half = render_to(&data, config.viewport.rect(), 0.5, &config).expect("frame");
    let marker: Vec<&PolylinePrimitive> = half.polylines().collect();
    assert_eq!(marker.len(), 1);
    assert_eq!(marker[0].points.len(), 4);
    assert!(marker[0].color.alpha < 1.0 && marker[0].color.alpha > 0.9);

    let zoomed = render_to(&data, config.viewport.rect(), 1.0, &config).expect("frame");
    assert_eq!(zoomed.polylines().count(), 0);
}

#[test]
fn narrow_viewports_clamp_bar_width() {
    let config = DayGraphConfig::new(Viewport::new(100, 200));
    let data = one_storm_data();
    let frame = render_to(&data, config.viewport.rect(), 0.0, &config).expect("frame");

    assert!(frame.rects().all(|rect| rect.width >= 0.0));
    frame.validate().expect("valid frame");
}

#[test]
fn header_must_leave_room_for_the_plot() {
    let err = plot_rect(Rect::from_xywh(0.0, 0.0, 400.0, 30.0), 30.0).expect_err("empty plot");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn null_renderer_counts_each_primitive_kind() {
    let config = config();
    let frame = render_to(&one_storm_data(), config.viewport.rect(), 0.0, &config)
        .expect("frame");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 372);
    assert_eq!(renderer.last_line_count, 4);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_text_count, 16);
    assert_eq!(renderer.last_frame.as_ref(), Some(&frame));
}

#[test]
fn invalid_primitives_fail_validation() {
    let viewport = Viewport::new(100, 100);
    let black = Color::rgb(0.0, 0.0, 0.0);

    let negative = RenderFrame::new(viewport).with_rect(RectPrimitive::new(0.0, 0.0, -1.0, 5.0, black));
    assert!(negative.validate().is_err());

    let single_point =
        RenderFrame::new(viewport).with_polyline(PolylinePrimitive::new(vec![(0.0, 0.0)], 1.0, black));
    assert!(single_point.validate().is_err());

    let bad_alpha = RenderFrame::new(viewport).with_line(LinePrimitive::new(
        0.0,
        0.0,
        1.0,
        1.0,
        1.0,
        black.with_alpha(1.5),
    ));
    assert!(bad_alpha.validate().is_err());

    let mut renderer = NullRenderer::default();
    let err = renderer
        .render(&RenderFrame::new(Viewport::new(0, 10)))
        .expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(renderer.frames_rendered, 0);
}
