/// Camera, input and layout tuning constants.
///
/// These express intended behavior (gains, breakpoints, lerp rates) and keep
/// magic numbers out of the per-frame code.
use glam::Vec3;

// Viewport breakpoint separating the two presets (CSS px)
pub const VIEWPORT_BREAKPOINT_PX: f32 = 768.0;

// Pointer-to-target gains (desktop absolute mapping)
pub const POINTER_GAIN_X: f32 = 10.0;
pub const POINTER_GAIN_Y: f32 = 5.0;

// Touch drag accumulation gain (relative panning on touch devices)
pub const TOUCH_PAN_GAIN: f32 = 5.0;

// Per-frame interpolation factor toward the camera target.
// Exponential easing, frame-rate dependent by design.
pub const CAMERA_LERP_FACTOR: f32 = 0.1;

// Camera target: fixed depth and base height
pub const CAMERA_TARGET_Z: f32 = 14.0;
pub const CAMERA_BASE_HEIGHT: f32 = 3.0;

// World point the camera re-aims at every frame
pub const LOOK_AT_POINT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

// Projection clip planes
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 200.0;

// Desktop preset: far-away eye gives the slow dolly-in on first frames
pub const DESKTOP_EYE: Vec3 = Vec3::new(0.0, 3.0, 100.0);
pub const DESKTOP_FOV_DEG: f32 = 15.0;
pub const DESKTOP_PIXEL_RATIO_MAX: f32 = 1.5;
pub const DESKTOP_GROUP_Y: f32 = -1.0;
pub const DESKTOP_MODEL_SCALE: f32 = 0.26;

// Mobile preset
pub const MOBILE_EYE: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const MOBILE_FOV_DEG: f32 = 25.0;
pub const MOBILE_PIXEL_RATIO_MAX: f32 = 1.0;
pub const MOBILE_GROUP_Y: f32 = -0.5;
pub const MOBILE_MODEL_SCALE: f32 = 0.15;

// User-agent substrings that select the touch input branch
pub const MOBILE_UA_MARKERS: [&str; 7] = [
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

// Scene layout (group space)
pub const MODEL_POSITION: Vec3 = Vec3::new(-1.2, 0.0, 0.6);
pub const MODEL_ROTATION_Y: f32 = std::f32::consts::PI - 0.4;
pub const TEXT_POSITION: Vec3 = Vec3::new(0.0, 2.0, -5.0);
pub const TEXT_HEIGHT: f32 = 2.5;
pub const GROUND_EXTENT: f32 = 20.0;

// Floor reflection mix (0 = matte, 1 = perfect mirror)
pub const MIRROR_STRENGTH: f32 = 0.4;

// Page background, #0f0f0f (linear values for the sRGB surface)
pub const BACKGROUND_COLOR: [f64; 3] = [0.0048, 0.0048, 0.0048];
