use crate::constants::{
    CAMERA_BASE_HEIGHT, CAMERA_LERP_FACTOR, CAMERA_TARGET_Z, DESKTOP_EYE, DESKTOP_FOV_DEG,
    DESKTOP_GROUP_Y, DESKTOP_MODEL_SCALE, DESKTOP_PIXEL_RATIO_MAX, MOBILE_EYE, MOBILE_FOV_DEG,
    MOBILE_GROUP_Y, MOBILE_MODEL_SCALE, MOBILE_PIXEL_RATIO_MAX, POINTER_GAIN_X, POINTER_GAIN_Y,
    VIEWPORT_BREAKPOINT_PX,
};
use crate::input::{PointerState, TouchPan};
use glam::Vec3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    #[inline]
    pub fn classify(viewport_w: f32) -> Self {
        if viewport_w <= VIEWPORT_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Per-breakpoint render-surface and scene parameters. Selected at mount and
/// re-selected on every resize.
#[derive(Clone, Copy)]
pub struct CameraPreset {
    pub eye: Vec3,
    pub fov_deg: f32,
    pub pixel_ratio_max: f32,
    pub group_y: f32,
    pub model_scale: f32,
}

impl CameraPreset {
    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Desktop => Self {
                eye: DESKTOP_EYE,
                fov_deg: DESKTOP_FOV_DEG,
                pixel_ratio_max: DESKTOP_PIXEL_RATIO_MAX,
                group_y: DESKTOP_GROUP_Y,
                model_scale: DESKTOP_MODEL_SCALE,
            },
            ViewportClass::Mobile => Self {
                eye: MOBILE_EYE,
                fov_deg: MOBILE_FOV_DEG,
                pixel_ratio_max: MOBILE_PIXEL_RATIO_MAX,
                group_y: MOBILE_GROUP_Y,
                model_scale: MOBILE_MODEL_SCALE,
            },
        }
    }

    pub fn for_viewport(viewport_w: f32) -> Self {
        Self::for_class(ViewportClass::classify(viewport_w))
    }
}

/// Where the camera is headed this frame.
///
/// Desktop maps the pointer absolutely through fixed gains; touch devices use
/// the accumulated pan offset instead. Depth and base height are fixed.
#[inline]
pub fn camera_target(pointer: &PointerState, pan: &TouchPan, touch_controls: bool) -> Vec3 {
    let (tx, ty) = if touch_controls {
        (pan.offset_x, pan.offset_y)
    } else {
        (pointer.x * POINTER_GAIN_X, pointer.y * POINTER_GAIN_Y)
    };
    Vec3::new(tx, CAMERA_BASE_HEIGHT + ty, CAMERA_TARGET_Z)
}

/// Camera position advanced once per rendered frame by an exponential lerp
/// toward the current target. For a static target the distance shrinks by a
/// constant factor each frame, so the approach is monotonic and never
/// overshoots. View and projection matrices are built by the renderer from
/// this position.
pub struct CameraRig {
    pub position: Vec3,
}

impl CameraRig {
    pub fn new(preset: &CameraPreset) -> Self {
        Self {
            position: preset.eye,
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec3) {
        self.position += (target - self.position) * CAMERA_LERP_FACTOR;
    }
}
