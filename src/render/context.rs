use serde::{Deserialize, Serialize};

use crate::core::{Color, PlotRect, ScreenPoint};
use crate::error::{PlotError, PlotResult};

/// Dash cadence of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    /// Suppresses the stroke entirely.
    None,
}

impl LineStyle {
    /// Dash pattern in multiples of the stroke width.
    #[must_use]
    pub fn dash_array(self) -> Option<&'static [f64]> {
        match self {
            Self::Solid | Self::None => None,
            Self::Dash => Some(&[4.0, 1.0]),
            Self::Dot => Some(&[1.0, 1.0]),
            Self::DashDot => Some(&[4.0, 1.0, 1.0, 1.0]),
        }
    }
}

/// Stroke settings for line and outline drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    #[must_use]
    pub const fn styled(color: Color, width: f64, style: LineStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    /// Stroke that draws nothing; used for fill-only shapes.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            color: Color::UNDEFINED,
            width: 0.0,
            style: LineStyle::None,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.color.is_visible() && self.width > 0.0 && self.style != LineStyle::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font request passed to text drawing and measuring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            weight: FontWeight::Normal,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 12.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Measured extent of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// RGBA8 raster payload for `draw_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PlotImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> PlotResult<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(PlotError::InvalidData(format!(
                "image payload must hold {expected} bytes for {width}x{height}, got {}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }
}

/// Contract implemented by any rendering backend.
///
/// The engine issues only these calls; canvas, SVG and PDF writers plug in
/// behind this surface. Calls are strictly ordered (painter's algorithm) and
/// every coordinate is already in screen space. `set_clip`/`reset_clip` are
/// low-level hooks driven by `ClippingContext`; series code scopes drawing
/// with `push_clip`/`pop_clip` instead.
pub trait RenderContext {
    fn draw_line(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()>;

    /// Draws independent segments from consecutive point pairs.
    fn draw_line_segments(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()> {
        for pair in points.chunks_exact(2) {
            self.draw_line(pair, stroke)?;
        }
        Ok(())
    }

    fn draw_polygon(
        &mut self,
        points: &[ScreenPoint],
        fill: Color,
        stroke: &Stroke,
    ) -> PlotResult<()>;

    fn draw_rectangle(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()>;

    fn draw_ellipse(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        position: ScreenPoint,
        text: &str,
        color: Color,
        font: &FontSpec,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    ) -> PlotResult<()>;

    fn draw_image(
        &mut self,
        image: &PlotImage,
        dest: PlotRect,
        opacity: f64,
        interpolate: bool,
    ) -> PlotResult<()>;

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextSize>;

    fn set_clip(&mut self, rect: PlotRect) -> PlotResult<()>;

    fn reset_clip(&mut self) -> PlotResult<()>;
}
