use serde::{Deserialize, Serialize};

use crate::core::{Color, PlotRect, ScreenPoint};
use crate::error::PlotResult;
use crate::render::{
    FontSpec, HorizontalAlignment, PlotImage, RenderContext, Stroke, TextSize, VerticalAlignment,
};

/// One recorded backend call.
///
/// Image payloads are summarized by their dimensions so logs stay small and
/// comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line {
        points: Vec<ScreenPoint>,
        stroke: Stroke,
    },
    LineSegments {
        points: Vec<ScreenPoint>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<ScreenPoint>,
        fill: Color,
        stroke: Stroke,
    },
    Rectangle {
        rect: PlotRect,
        fill: Color,
        stroke: Stroke,
    },
    Ellipse {
        rect: PlotRect,
        fill: Color,
        stroke: Stroke,
    },
    Text {
        position: ScreenPoint,
        text: String,
        color: Color,
        font_size_px: f64,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    },
    Image {
        source_width: u32,
        source_height: u32,
        dest: PlotRect,
        opacity: f64,
    },
    SetClip(PlotRect),
    ResetClip,
}

/// Backend that records every draw call instead of rasterizing.
///
/// Used by tests to assert deterministic output: two renders of equivalent
/// model state must produce equal command logs. Text measurement is a fixed
/// per-character estimate so logs never depend on platform font metrics.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderContext for RecordingContext {
    fn draw_line(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()> {
        self.commands.push(DrawCommand::Line {
            points: points.to_vec(),
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_line_segments(&mut self, points: &[ScreenPoint], stroke: &Stroke) -> PlotResult<()> {
        self.commands.push(DrawCommand::LineSegments {
            points: points.to_vec(),
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_polygon(
        &mut self,
        points: &[ScreenPoint],
        fill: Color,
        stroke: &Stroke,
    ) -> PlotResult<()> {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_rectangle(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()> {
        self.commands.push(DrawCommand::Rectangle {
            rect,
            fill,
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_ellipse(&mut self, rect: PlotRect, fill: Color, stroke: &Stroke) -> PlotResult<()> {
        self.commands.push(DrawCommand::Ellipse {
            rect,
            fill,
            stroke: *stroke,
        });
        Ok(())
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
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            color,
            font_size_px: font.size_px,
            h_align,
            v_align,
        });
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &PlotImage,
        dest: PlotRect,
        opacity: f64,
        _interpolate: bool,
    ) -> PlotResult<()> {
        self.commands.push(DrawCommand::Image {
            source_width: image.width,
            source_height: image.height,
            dest,
            opacity,
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextSize> {
        Ok(TextSize {
            width: text.chars().count() as f64 * font.size_px * 0.6,
            height: font.size_px * 1.2,
        })
    }

    fn set_clip(&mut self, rect: PlotRect) -> PlotResult<()> {
        self.commands.push(DrawCommand::SetClip(rect));
        Ok(())
    }

    fn reset_clip(&mut self) -> PlotResult<()> {
        self.commands.push(DrawCommand::ResetClip);
        Ok(())
    }
}
