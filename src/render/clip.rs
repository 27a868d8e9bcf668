use crate::core::{Color, PlotRect, ScreenPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    FontSpec, HorizontalAlignment, PlotImage, RenderContext, Stroke, TextSize, VerticalAlignment,
};

/// Clip-rectangle stack decorating a concrete backend.
///
/// `push_clip` intersects the requested rectangle with the current top of the
/// stack, and only tells the backend about the new effective rectangle when
/// it actually differs. Nested clips compose by intersection, never union,
/// and redundant backend clip churn is avoided. Every `push_clip` must be
/// matched by exactly one `pop_clip`.
pub struct ClippingContext<'a> {
    backend: &'a mut dyn RenderContext,
    stack: Vec<PlotRect>,
}

impl<'a> ClippingContext<'a> {
    #[must_use]
    pub fn new(backend: &'a mut dyn RenderContext) -> Self {
        Self {
            backend,
            stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.stack.len()
    }

    pub fn push_clip(&mut self, rect: PlotRect) -> PlotResult<()> {
        let effective = match self.stack.last() {
            Some(top) => rect
                .intersect(*top)
                .unwrap_or_else(|| PlotRect::new(rect.left, rect.top, 0.0, 0.0)),
            None => rect,
        };

        let changed = self.stack.last() != Some(&effective);
        self.stack.push(effective);
        if changed {
            self.backend.set_clip(effective)?;
        }
        Ok(())
    }

    pub fn pop_clip(&mut self) -> PlotResult<()> {
        let removed = self.stack.pop().ok_or(PlotError::ClipStackUnderflow)?;
        match self.stack.last().copied() {
            Some(top) if top != removed => self.backend.set_clip(top),
            Some(_) => Ok(()),
            None => self.backend.reset_clip(),
        }
    }
}

impl RenderContext for ClippingContext<'_> {
    fn draw_line(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()> {
        self.backend.draw_line(points, stroke)
    }

    fn draw_line_segments(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()> {
        self.backend.draw_line_segments(points, stroke)
    }

    fn draw_polygon(
        &mut self,
        points: &[ScreenPoint],
        fill: Color,
        stroke: &Stroke,
    ) -> PlotResult<()> {
        self.backend.draw_polygon(points, fill, stroke)
    }

    fn draw_rectangle(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()> {
        self.backend.draw_rectangle(rect, fill, stroke)
    }

    fn draw_ellipse(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()> {
        self.backend.draw_ellipse(rect, fill, stroke)
    }

    fn draw_text(
        &mut self,
        position: ScreenPoint,
        text: &str,
        color: Color,
        font: &FontSpec,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    ) -> PlotResult<()> {
        self.backend
            .draw_text(position, text, color, font, h_align, v_align)
    }

    fn draw_image(
        &mut self,
        image: &PlotImage,
        dest: PlotRect,
        opacity: f64,
        interpolate: bool,
    ) -> PlotResult<()> {
        self.backend.draw_image(image, dest, opacity, interpolate)
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextSize> {
        self.backend.measure_text(text, font)
    }

    fn set_clip(&mut self, rect: PlotRect) -> PlotResult<()> {
        self.backend.set_clip(rect)
    }

    fn reset_clip(&mut self) -> PlotResult<()> {
        self.backend.reset_clip()
    }
}
