//! plotkit: backend-agnostic 2D plotting engine.
//!
//! The crate models a chart as axes plus series, renders it through an
//! abstract vector-graphics contract, and drives pan/zoom/tracker behavior
//! from numeric input deltas. Concrete backends (canvas, SVG, PDF) implement
//! [`render::RenderContext`] and receive a deterministic draw-call sequence.

pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod model;
pub mod render;
pub mod series;
pub mod telemetry;

pub use error::{PlotError, PlotResult};
pub use model::PlotModel;
