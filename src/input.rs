use crate::constants::TOUCH_PAN_GAIN;

/// Latest pointer position in normalized device coordinates, [-1, 1] on both
/// axes. Overwritten on every move event (last-write-wins, no queue) and read
/// once per rendered frame.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn set_from_client(&mut self, client_x: f32, client_y: f32, vw: f32, vh: f32) {
        self.x = normalized_x(client_x, vw);
        self.y = normalized_y(client_y, vh);
    }
}

#[inline]
pub fn normalized_x(client_x: f32, viewport_w: f32) -> f32 {
    ((client_x / viewport_w.max(1.0)) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

#[inline]
pub fn normalized_y(client_y: f32, viewport_h: f32) -> f32 {
    (-(client_y / viewport_h.max(1.0)) * 2.0 + 1.0).clamp(-1.0, 1.0)
}

/// Relative camera panning for touch devices: each move accumulates the delta
/// from the previous sample (scaled by `TOUCH_PAN_GAIN`) into a persistent
/// offset, so dragging pans the camera instead of mapping it to an absolute
/// position. The last sample is seeded on touch-start and cleared on
/// touch-end so a new gesture never inherits a stale delta.
#[derive(Default, Clone, Copy)]
pub struct TouchPan {
    pub offset_x: f32,
    pub offset_y: f32,
    last: Option<(f32, f32)>,
}

impl TouchPan {
    pub fn begin(&mut self, nx: f32, ny: f32) {
        self.last = Some((nx, ny));
    }

    pub fn push(&mut self, nx: f32, ny: f32) {
        if let Some((lx, ly)) = self.last {
            self.offset_x += (nx - lx) * TOUCH_PAN_GAIN;
            self.offset_y += (ny - ly) * TOUCH_PAN_GAIN;
        }
        self.last = Some((nx, ny));
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}
