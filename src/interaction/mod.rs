//! Pointer-driven pan/zoom/tracker state machines.
//!
//! These manipulators own only numeric state; host applications translate
//! native input events into the calls below and re-render when a step
//! reports a change. Axis mutation happens synchronously through
//! `PlotModel`, so a manipulator step is atomic relative to a render pass.

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;
use crate::model::PlotModel;
use crate::series::TrackerHit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Panning,
}

/// Pan gesture: remembers the previous pointer position and shifts all
/// pan-enabled axes by each movement delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanManipulator {
    mode: InteractionMode,
    last_point: Option<ScreenPoint>,
}

impl PanManipulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    pub fn started(&mut self, at: ScreenPoint) {
        self.mode = InteractionMode::Panning;
        self.last_point = Some(at);
    }

    /// Applies one pointer movement. Returns `true` when axes changed and a
    /// re-render should be requested.
    pub fn delta(&mut self, model: &mut PlotModel, at: ScreenPoint) -> bool {
        if self.mode != InteractionMode::Panning {
            return false;
        }
        let Some(previous) = self.last_point else {
            self.last_point = Some(at);
            return false;
        };
        self.last_point = Some(at);
        model.pan_all(previous, at);
        true
    }

    pub fn completed(&mut self) {
        self.mode = InteractionMode::Idle;
        self.last_point = None;
    }
}

/// Wheel/pinch zoom around the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStepManipulator {
    /// Zoom factor applied per wheel step.
    pub step_factor: f64,
}

impl Default for ZoomStepManipulator {
    fn default() -> Self {
        Self { step_factor: 1.2 }
    }
}

impl ZoomStepManipulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one zoom step; `delta > 0` zooms in toward `at`.
    pub fn step(&self, model: &mut PlotModel, at: ScreenPoint, delta: f64) {
        let factor = if delta > 0.0 {
            self.step_factor
        } else {
            1.0 / self.step_factor
        };
        model.zoom_all_at(factor, at);
    }
}

/// Tracker overlay state fed by hit testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackerState {
    pub visible: bool,
    pub position: Option<ScreenPoint>,
    pub hit: Option<TrackerHit>,
}

impl TrackerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tracker from a pointer position, snapping to the nearest
    /// series point.
    pub fn pointer_moved(&mut self, model: &PlotModel, at: ScreenPoint, interpolate: bool) {
        self.position = Some(at);
        self.hit = model.nearest_point(at, interpolate);
        self.visible = self.hit.is_some();
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
        self.position = None;
        self.hit = None;
    }
}
