use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::animation::{AnimationQueue, QueueState, Transition};
use crate::core::{DayGraphData, Storm, Viewport};
use crate::error::ChartResult;
use crate::extensions::{Signal, SubscriptionId};
use crate::render::{RenderFrame, Renderer};

use super::{DayGraphConfig, render_to};

/// Animated zoom parameter, 0 for the full window and 1 for the season.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomState {
    pub zoom: f64,
}

/// Day graph bound to a renderer.
///
/// The view owns its data, zoom and animation queue. Hosts forward three
/// events: data arrival, clicks and display frames.
pub struct DayGraphView<R: Renderer> {
    renderer: R,
    config: DayGraphConfig,
    data: Option<DayGraphData>,
    zoom: ZoomState,
    queue: AnimationQueue<ZoomState>,
}

impl<R: Renderer> DayGraphView<R> {
    pub fn new(renderer: R, config: DayGraphConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            data: None,
            zoom: ZoomState::default(),
            queue: AnimationQueue::new(),
        })
    }

    /// Bins `storms` over the full year and renders.
    pub fn set_storms(&mut self, storms: Vec<Storm>) -> ChartResult<()> {
        let data = DayGraphData::full_year(storms, self.config.season);
        self.data_did_load(data)
    }

    /// Replaces the laid-out data and renders.
    pub fn data_did_load(&mut self, data: DayGraphData) -> ChartResult<()> {
        debug!(
            days = data.days().len(),
            max_count = data.max_count(),
            "day graph data loaded"
        );
        self.data = Some(data);
        self.render()
    }

    /// Queues a zoom toggle and renders.
    ///
    /// Returns whether a transition was queued. A failed render is logged
    /// and does not undo the queued transition.
    pub fn click(&mut self, now_ms: f64) -> bool {
        let queued = self.toggle_zoom(now_ms);
        if queued {
            if let Err(err) = self.render() {
                warn!(error = %err, "day graph render after click failed");
            }
        }
        queued
    }

    /// Queues a zoom toggle toward the other endpoint without rendering.
    ///
    /// Returns `false` without queueing anything while no data is loaded.
    pub fn toggle_zoom(&mut self, now_ms: f64) -> bool {
        if self.data.is_none() {
            debug!("click ignored, no data loaded");
            return false;
        }

        let transition = Transition::new(
            self.config.transition_duration_ms,
            self.config.transition_easing,
            |state: &ZoomState| state.zoom,
            |state: &mut ZoomState, p, initial: &mut f64| {
                state.zoom = if *initial < 0.5 { p } else { 1.0 - p };
            },
        );
        self.queue.enqueue(&mut self.zoom, transition, now_ms);
        true
    }

    /// Advances the zoom animation to `now_ms` and renders the result.
    pub fn frame(&mut self, now_ms: f64) -> ChartResult<QueueState> {
        if self.queue.is_idle() {
            return Ok(QueueState::Idle);
        }
        let state = self.advance(now_ms);
        self.render()?;
        Ok(state)
    }

    /// Advances the zoom animation to `now_ms` without rendering.
    pub fn advance(&mut self, now_ms: f64) -> QueueState {
        self.queue.frame(&mut self.zoom, now_ms)
    }

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.queue.needs_frame()
    }

    /// Frame for the current data and zoom, `None` before data arrives.
    pub fn build_frame(&self) -> ChartResult<Option<RenderFrame>> {
        let Some(data) = self.data.as_ref() else {
            return Ok(None);
        };
        render_to(data, self.config.viewport.rect(), self.zoom.zoom, &self.config).map(Some)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        if let Some(frame) = self.build_frame()? {
            self.renderer.render(&frame)?;
        }
        Ok(())
    }

    /// Resizes the drawing area and renders.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.resize(viewport)?;
        self.render()
    }

    /// Resizes the drawing area without rendering.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut config = self.config;
        config.viewport = viewport;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.zoom
    }

    #[must_use]
    pub fn data(&self) -> Option<&DayGraphData> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &DayGraphConfig {
        &self.config
    }

    #[must_use]
    pub fn queue(&self) -> &AnimationQueue<ZoomState> {
        &self.queue
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer + 'static> DayGraphView<R> {
    /// Loads every storm list raised on `signal` into `view`.
    ///
    /// The handler holds a weak reference, so dropping the view silently
    /// disconnects it.
    pub fn tap_storms(view: &Rc<RefCell<Self>>, signal: &mut Signal<Vec<Storm>>) -> SubscriptionId {
        let view = Rc::downgrade(view);
        signal.tap(move |storms: &Vec<Storm>| {
            let Some(view) = view.upgrade() else {
                return;
            };
            let Ok(mut view) = view.try_borrow_mut() else {
                warn!("day graph busy, storms dropped");
                return;
            };
            if let Err(err) = view.set_storms(storms.clone()) {
                warn!(error = %err, "failed to render loaded storms");
            }
        })
    }
}
