//! Host-facing day graph: configuration, zoom geometry, frame building and
//! the event-driven view.

mod config;
mod frame_builder;
mod label_format;
mod view;
mod zoom_geometry;

pub use config::{DEFAULT_GRAPH_HEIGHT_PX, DayGraphConfig, DayGraphStyle};
pub use frame_builder::{plot_rect, render_to};
pub use label_format::format_tick_label;
pub use view::{DayGraphView, ZoomState};
pub use zoom_geometry::{ZoomGeometry, lerp};
