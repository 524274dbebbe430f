//! Glue that sits outside the core pipeline.

pub mod signal;

pub use signal::{Signal, SubscriptionId};
