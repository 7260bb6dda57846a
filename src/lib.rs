//! stream-charts: axis ranges and coordinate transforms for interactive
//! streaming charts.
//!
//! The crate keeps zoom/pan state per axis, maps between data space and pixel
//! space, and keeps every axis a gesture reaches consistent while streamed
//! data keeps extending the time domain. Drawing is left to a [`render::Renderer`]
//! backend fed with backend-agnostic frames.

pub mod api;
pub mod axes;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
