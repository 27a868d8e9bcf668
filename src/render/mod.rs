mod clip;
mod context;
mod recording;

pub use clip::ClippingContext;
pub use context::{
    FontSpec, FontWeight, HorizontalAlignment, LineStyle, PlotImage, RenderContext, Stroke,
    TextSize, VerticalAlignment,
};
pub use recording::{DrawCommand, RecordingContext};
