pub mod axis;
pub mod category;
pub mod color;
pub mod color_axis;
pub mod primitives;
pub mod rect;
pub mod ticks;
pub mod types;

pub use axis::{Axis, AxisChangeType, AxisChangedEvent, AxisKind, AxisPosition, AxisTicks};
pub use category::CategoryRegistry;
pub use color::{Color, Palette};
pub use color_axis::{LinearColorAxis, PaletteSlot};
pub use rect::PlotRect;
pub use ticks::{
    calculate_major_interval, calculate_minor_interval, create_tick_values,
    create_tick_values_capped, filter_redundant_minor_ticks, DEFAULT_MAX_TICKS,
};
pub use types::{DataPoint, DataVector, ScreenPoint, ScreenVector, Thickness};
