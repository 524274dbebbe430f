//! storm-days: day-of-year storm activity histogram.
//!
//! Storm tracks are binned into one bucket per calendar day, scaled with a
//! nice-number count axis and drawn as bars that zoom between the full year
//! and a season window. Drawing goes through the backend-agnostic
//! [`render::Renderer`] trait; the zoom is animated by a frame-driven
//! [`animation::AnimationQueue`].

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod ingest;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{DayGraphConfig, DayGraphView};
pub use error::{ChartError, ChartResult};
