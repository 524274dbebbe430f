use storm_days::ChartError;
use storm_days::animation::Easing;
use storm_days::api::{DayGraphConfig, DayGraphStyle};
use storm_days::core::{DayWindow, Doy, Moy, Viewport};
use storm_days::render::Color;

#[test]
fn defaults_follow_the_hurricane_season_graph() {
    let config = DayGraphConfig::new(Viewport::new(800, 300));

    assert_eq!(config.season, DayWindow::atlantic_hurricane_season());
    assert_eq!(config.header_height_px, 30.0);
    assert_eq!(config.tick_limit, 5.5);
    assert_eq!(config.transition_duration_ms, 500.0);
    assert_eq!(config.transition_easing, Easing::InOutQuart);
    assert_eq!(config.style, DayGraphStyle::default());
    config.validate().expect("default config is valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let season = DayWindow::new(Doy::from_md(Moy::August, 1), Doy::from_md(Moy::October, 31))
        .expect("valid window");
    let config = DayGraphConfig::new(Viewport::new(1024, 320))
        .with_season(season)
        .with_transition(750.0, Easing::InOutSine)
        .with_tick_limit(4.0);

    let json = config.to_json_pretty().expect("serialize");
    let restored = DayGraphConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored.viewport, config.viewport);
    assert_eq!(restored.season, season);
    assert_eq!(restored.transition_duration_ms, 750.0);
    assert_eq!(restored.transition_easing, Easing::InOutSine);
    assert_eq!(restored.tick_limit, 4.0);
    assert!((restored.style.bar_color.blue - 1.0).abs() < 1e-12);
    assert!(json.contains("\"in_out_sine\""));
}

#[test]
fn minimal_json_fills_defaults() {
    let config = DayGraphConfig::from_json_str(r#"{"viewport":{"width":640,"height":240}}"#)
        .expect("parse");
    assert_eq!(config, DayGraphConfig::new(Viewport::new(640, 240)));
}

#[test]
fn season_is_written_as_month_and_date() {
    let config = DayGraphConfig::from_json_str(
        r#"{
            "viewport": {"width": 640, "height": 240},
            "season": {
                "start": {"month": "July", "date": 1},
                "end": {"month": "September", "date": 30}
            }
        }"#,
    )
    .expect("parse");
    assert_eq!(config.season.start(), Doy::from_md(Moy::July, 1));
    assert_eq!(config.season.len(), 92);
}

#[test]
fn huge_season_dates_are_normalized() {
    let config = DayGraphConfig::from_json_str(
        r#"{
            "viewport": {"width": 640, "height": 240},
            "season": {
                "start": {"month": "June", "date": 9223372036854775807},
                "end": {"month": "December", "date": 31}
            }
        }"#,
    )
    .expect("parse");
    assert_eq!(
        config.season.start(),
        Doy::from_md(Moy::June, i64::MAX.rem_euclid(146_097))
    );
    assert_eq!(config.season.end(), Doy::from_md(Moy::December, 31));
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = DayGraphConfig::from_json_str("{\"viewport\":").expect_err("truncated json");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validation_rejects_unusable_settings() {
    let base = DayGraphConfig::new(Viewport::new(800, 300));

    let err = DayGraphConfig::new(Viewport::new(0, 300))
        .validate()
        .expect_err("empty viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    assert!(base.with_header_height_px(300.0).validate().is_err());
    assert!(base.with_tick_limit(0.0).validate().is_err());
    assert!(base.with_transition(-1.0, Easing::Linear).validate().is_err());

    let mut style = DayGraphStyle::default();
    style.bar_color = Color::rgba(0.0, 0.6, 1.0, 2.0);
    assert!(base.with_style(style).validate().is_err());

    let mut style = DayGraphStyle::default();
    style.tick_label_font_size_px = 0.0;
    assert!(base.with_style(style).validate().is_err());
}
