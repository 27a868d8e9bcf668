pub mod clipping;
pub mod markers;
pub mod reduction;
pub mod spline;

pub use clipping::{clip_polyline, clip_segment};
pub use markers::{draw_markers, MarkerKind};
pub use reduction::{reduce_line_points, resample_points};
pub use spline::canonical_spline;
