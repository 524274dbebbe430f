use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use storm_days::animation::QueueState;
use storm_days::api::{DayGraphConfig, DayGraphView};
use storm_days::core::{Storm, TrackEntry, Viewport};
use storm_days::ingest::StormModel;
use storm_days::{ChartError, ChartResult};
use storm_days::render::{NullRenderer, RenderFrame, Renderer};

fn storms() -> Vec<Storm> {
    let track = [(8, 20), (8, 25)]
        .iter()
        .map(|&(month, day)| {
            TrackEntry::at(
                Utc.with_ymd_and_hms(2021, month, day, 0, 0, 0)
                    .single()
                    .expect("valid time"),
            )
        })
        .collect();
    vec![Storm::new("AL062021", Some("FRED".to_owned()), 2021, track)]
}

#[derive(Default)]
struct RejectingRenderer {
    attempts: usize,
}

impl Renderer for RejectingRenderer {
    fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
        self.attempts += 1;
        Err(ChartError::InvalidData("surface lost".to_owned()))
    }
}

fn view() -> DayGraphView<NullRenderer> {
    DayGraphView::new(
        NullRenderer::default(),
        DayGraphConfig::new(Viewport::new(732, 300)),
    )
    .expect("view init")
}

#[test]
fn invalid_config_is_rejected() {
    let result = DayGraphView::new(
        NullRenderer::default(),
        DayGraphConfig::new(Viewport::new(732, 20)),
    );
    assert!(result.is_err());
}

#[test]
fn clicks_before_data_are_ignored() {
    let mut view = view();
    assert!(!view.click(0.0));
    assert!(!view.needs_frame());
    assert_eq!(view.renderer().frames_rendered, 0);
}

#[test]
fn loading_data_renders_once() {
    let mut view = view();
    view.set_storms(storms()).expect("load");

    assert_eq!(view.renderer().frames_rendered, 1);
    assert_eq!(view.data().map(|data| data.max_count()), Some(1));
    assert_eq!(view.zoom(), 0.0);
}

#[test]
fn click_animates_zoom_to_the_season_and_back() {
    let mut view = view();
    view.set_storms(storms()).expect("load");

    assert!(view.click(0.0));
    assert!(view.needs_frame());
    assert_eq!(view.zoom(), 0.0);

    assert_eq!(view.frame(250.0).expect("frame"), QueueState::Running);
    assert!((view.zoom() - 0.5).abs() < 1e-12);

    assert_eq!(view.frame(500.0).expect("frame"), QueueState::Idle);
    assert_eq!(view.zoom(), 1.0);
    assert!(!view.needs_frame());

    assert!(view.click(1_000.0));
    assert_eq!(view.zoom(), 1.0);
    view.frame(1_500.0).expect("frame");
    assert_eq!(view.zoom(), 0.0);
}

#[test]
fn queued_clicks_toggle_from_the_zoom_they_start_at() {
    let mut view = view();
    view.set_storms(storms()).expect("load");

    view.click(0.0);
    view.click(100.0);
    assert_eq!(view.queue().pending_len(), 1);

    assert_eq!(view.frame(500.0).expect("frame"), QueueState::Running);
    assert_eq!(view.zoom(), 1.0);

    view.frame(750.0).expect("frame");
    assert!((view.zoom() - 0.5).abs() < 1e-12);
    view.frame(1_000.0).expect("frame");
    assert_eq!(view.zoom(), 0.0);
    assert_eq!(view.queue().completed_count(), 2);
}

#[test]
fn every_animation_frame_renders() {
    let mut view = view();
    view.set_storms(storms()).expect("load");
    view.click(0.0);
    view.frame(100.0).expect("frame");
    view.frame(500.0).expect("frame");

    // load, click, two frames
    assert_eq!(view.renderer().frames_rendered, 4);
    assert_eq!(view.frame(600.0).expect("frame"), QueueState::Idle);
    assert_eq!(view.renderer().frames_rendered, 4);

    let renderer = view.into_renderer();
    let last = renderer.last_frame.expect("rendered frame");
    assert_eq!(last.polylines().count(), 0);
}

#[test]
fn resizing_rerenders_at_the_new_size() {
    let mut view = view();
    view.set_storms(storms()).expect("load");
    view.set_viewport(Viewport::new(400, 200)).expect("resize");

    assert_eq!(view.config().viewport, Viewport::new(400, 200));
    let frame = view.build_frame().expect("frame").expect("data loaded");
    assert_eq!(frame.viewport, Viewport::new(400, 200));
    assert!(view.set_viewport(Viewport::new(400, 0)).is_err());
    assert_eq!(view.config().viewport, Viewport::new(400, 200));
}

#[test]
fn views_follow_the_storm_model_signal() {
    let view = Rc::new(RefCell::new(view()));
    let mut model = StormModel::new();
    DayGraphView::tap_storms(&view, &mut model.storms_did_load);

    model
        .load_json(r#"[{"id":"AL012021","name":"ANA","track":[
            {"time":1621641600000,"status":"SS","location":[34.0,-63.0],"max_wind":40,"min_pressure":1004}
        ]}]"#)
        .expect("load");

    let view = view.borrow();
    assert_eq!(view.data().map(|data| data.storms().len()), Some(1));
    assert_eq!(view.renderer().frames_rendered, 1);
}

#[test]
fn click_keeps_the_transition_when_rendering_fails() {
    let mut view = DayGraphView::new(
        RejectingRenderer::default(),
        DayGraphConfig::new(Viewport::new(732, 300)),
    )
    .expect("view init");
    assert!(view.set_storms(storms()).is_err());

    assert!(view.click(0.0));
    assert!(view.needs_frame());
    assert_eq!(view.renderer().attempts, 2);

    assert!(view.frame(500.0).is_err());
    assert_eq!(view.zoom(), 1.0);
    assert!(!view.needs_frame());
}

#[test]
fn state_updates_without_rendering() {
    let mut view = view();
    view.set_storms(storms()).expect("load");
    assert_eq!(view.renderer().frames_rendered, 1);

    assert!(view.toggle_zoom(0.0));
    assert_eq!(view.advance(250.0), QueueState::Running);
    assert!((view.zoom() - 0.5).abs() < 1e-12);
    assert_eq!(view.advance(500.0), QueueState::Idle);
    assert_eq!(view.zoom(), 1.0);
    view.resize(Viewport::new(400, 200)).expect("resize");
    assert!(view.resize(Viewport::new(400, 0)).is_err());

    assert_eq!(view.renderer().frames_rendered, 1);
    assert_eq!(view.config().viewport, Viewport::new(400, 200));
    assert_eq!(view.advance(600.0), QueueState::Idle);
}
