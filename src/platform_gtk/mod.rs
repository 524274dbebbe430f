//! GTK4 embedding of a [`DayGraphView`] drawn with Cairo.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::DayGraphView;
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, CairoRenderer};

type SharedView = Rc<RefCell<DayGraphView<CairoRenderer>>>;

/// Owns a `DrawingArea` wired to a day graph view.
///
/// Clicks toggle the zoom and a frame-clock tick callback drives the
/// animation until the queue drains. Only the draw function renders, straight
/// onto the widget's Cairo context.
pub struct GtkDayGraphAdapter {
    view: SharedView,
    drawing_area: gtk::DrawingArea,
    ticking: Rc<Cell<bool>>,
}

impl GtkDayGraphAdapter {
    #[must_use]
    pub fn new(view: DayGraphView<CairoRenderer>) -> Self {
        let viewport = view.config().viewport;
        let view = Rc::new(RefCell::new(view));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let adapter = Self {
            view,
            drawing_area,
            ticking: Rc::new(Cell::new(false)),
        };
        adapter.connect_draw();
        adapter.connect_click();
        adapter
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn view(&self) -> SharedView {
        Rc::clone(&self.view)
    }

    fn connect_draw(&self) {
        let view = Rc::clone(&self.view);
        self.drawing_area
            .set_draw_func(move |_area, context, width, height| {
                let mut view = view.borrow_mut();
                if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
                    let viewport = Viewport::new(width, height);
                    if viewport.is_valid() && viewport != view.config().viewport {
                        if let Err(err) = view.resize(viewport) {
                            warn!(error = %err, "day graph resize rejected");
                        }
                    }
                }
                let frame = match view.build_frame() {
                    Ok(Some(frame)) => frame,
                    Ok(None) => return,
                    Err(err) => {
                        warn!(error = %err, "day graph frame failed");
                        return;
                    }
                };
                if let Err(err) = view.renderer_mut().render_on_cairo_context(context, &frame) {
                    warn!(error = %err, "day graph draw failed");
                }
            });
    }

    fn connect_click(&self) {
        let view = Rc::clone(&self.view);
        let ticking = Rc::clone(&self.ticking);
        let area = self.drawing_area.downgrade();
        let gesture = gtk::GestureClick::new();
        gesture.connect_pressed(move |_gesture, _n_press, _x, _y| {
            let Some(area) = area.upgrade() else {
                return;
            };
            let queued = view.borrow_mut().toggle_zoom(now_ms(&area));
            if queued {
                area.queue_draw();
                start_ticking(&area, &view, &ticking);
            }
        });
        self.drawing_area.add_controller(gesture);
    }
}

fn start_ticking(area: &gtk::DrawingArea, view: &SharedView, ticking: &Rc<Cell<bool>>) {
    if ticking.replace(true) {
        return;
    }
    let view = Rc::clone(view);
    let ticking = Rc::clone(ticking);
    area.add_tick_callback(move |area, clock| {
        let now_ms = clock.frame_time() as f64 / 1_000.0;
        let mut view = view.borrow_mut();
        view.advance(now_ms);
        area.queue_draw();
        if view.needs_frame() {
            glib::ControlFlow::Continue
        } else {
            ticking.set(false);
            glib::ControlFlow::Break
        }
    });
}

fn now_ms(area: &gtk::DrawingArea) -> f64 {
    let micros = area
        .frame_clock()
        .map_or_else(glib::monotonic_time, |clock| clock.frame_time());
    micros as f64 / 1_000.0
}
