pub const STROKE_WIDTH: f64 = 2.0;
pub const STROKE_CAP: &str = "round";
pub const STROKE_COLOR: &str = "#000";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    /// Mouse events already carry element-local offsets.
    pub fn from_offset(offset_x: f64, offset_y: f64) -> Self {
        Self {
            x: offset_x,
            y: offset_y,
        }
    }

    /// Touch coordinates are viewport-relative; shift them into surface space.
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }
}

/// Backing bitmap size for an on-screen rectangle.
pub fn backing_size(rect_width: f64, rect_height: f64) -> (u32, u32) {
    let width = if rect_width.is_finite() { rect_width.max(0.0) } else { 0.0 };
    let height = if rect_height.is_finite() { rect_height.max(0.0) } else { 0.0 };
    (width as u32, height as u32)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeStep {
    Ignored,
    LineTo {
        point: SurfacePoint,
        unlocks_submit: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PadState {
    Idle,
    Drawing,
}

#[derive(Clone, Debug)]
pub struct SignaturePad {
    state: PadState,
    signed: bool,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self {
            state: PadState::Idle,
            signed: false,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state == PadState::Drawing
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Starts a stroke; the caller opens a path and moves to `point`.
    pub fn begin(&mut self, point: SurfacePoint) -> SurfacePoint {
        self.state = PadState::Drawing;
        point
    }

    pub fn extend(&mut self, point: SurfacePoint) -> StrokeStep {
        if self.state != PadState::Drawing {
            return StrokeStep::Ignored;
        }
        let unlocks_submit = !self.signed;
        self.signed = true;
        StrokeStep::LineTo {
            point,
            unlocks_submit,
        }
    }

    pub fn end(&mut self) {
        self.state = PadState::Idle;
    }

    pub fn can_submit(&self) -> bool {
        self.signed
    }
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}
