//! Interaction and animation tuning for the project floor.
//!
//! These constants express intended behaviour (spring feel, mapping ranges,
//! layer depths, durations) and keep magic numbers out of the step code.
use crate::spring::SpringConfig;

// Pointer smoothing (normalized units, so tight rest thresholds)
pub const POINTER_SPRING: SpringConfig = SpringConfig::new(30.0, 25.0, 1.0).with_rest(0.0005, 0.001);
pub const POINTER_DOMAIN: (f32, f32) = (-0.5, 0.5);

// Stage tilt ranges, indexed by the pointer domain
pub const STAGE_ROTATE_X_DEG: (f32, f32) = (45.0, 35.0);
pub const STAGE_ROTATE_Y_DEG: (f32, f32) = (-5.0, 5.0);
pub const STAGE_TRANSLATE_X_PCT: (f32, f32) = (-2.0, 2.0);

// Layer depths along Z; floor is farthest, preview nearest
pub const DEPTH_FLOOR_PX: f32 = -300.0;
pub const DEPTH_CARDS_PX: f32 = -50.0;
pub const DEPTH_MARQUEE_PX: f32 = DEPTH_CARDS_PX - 40.0;
pub const DEPTH_PREVIEW_PX: f32 = DEPTH_CARDS_PX + 150.0;

// Cards
pub const CARD_SPRING: SpringConfig = SpringConfig::new(50.0, 14.0, 1.0);
pub const CARD_HOVER_SCALE: f32 = 1.15;
pub const CARD_DIMMED_SCALE: f32 = 0.9;
pub const CARD_DIMMED_OPACITY: f32 = 0.7;
pub const CARD_HOVER_LIFT_PX: f32 = -40.0;
pub const CARD_ENTRANCE_OFFSET_X_PX: f32 = -300.0;
pub const CARD_ENTRANCE_ROTATE_JITTER_DEG: f32 = 10.0;

// Preview panel
pub const PREVIEW_SPRING: SpringConfig = SpringConfig::new(120.0, 18.0, 1.2);
pub const PREVIEW_ENTRANCE_SCALE: f32 = 0.85;
pub const PREVIEW_EXIT_SECS: f32 = 0.25;
pub const PREVIEW_EXIT_SCALE: f32 = 0.95;
pub const PREVIEW_EXIT_X_PX: f32 = 150.0;
pub const PREVIEW_EXIT_ROTATE_Y_DEG: f32 = 10.0;
pub const PREVIEW_EXIT_BLUR_PX: f32 = 10.0;

// Tool icons inside the preview panel
pub const TOOL_ICON_SPRING: SpringConfig = SpringConfig::new(180.0, 15.0, 1.0);
pub const TOOL_ICON_BASE_DELAY_SECS: f32 = 0.1;
pub const TOOL_ICON_STAGGER_SECS: f32 = 0.08;
pub const TOOL_ICON_ENTRANCE_Y_PX: f32 = 30.0;
pub const TOOL_ICON_ENTRANCE_ROTATE_DEG: f32 = 10.0;
pub const TOOL_ICON_ROTATE_JITTER_DEG: f32 = 10.0;

// Modal body and backdrop
pub const MODAL_SPRING: SpringConfig = SpringConfig::new(180.0, 24.0, 0.8);
pub const MODAL_OFFSCREEN_Y_PCT: f32 = 110.0;
pub const MODAL_ENTER_OPACITY: f32 = 0.5;
pub const MODAL_CLOSED_SCALE: f32 = 0.95;
pub const BACKDROP_SECS: f32 = 0.8;
pub const BACKDROP_CLOSED_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.0];
pub const BACKDROP_OPEN_RGBA: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 0.95];

// Scroll mapping
pub const FLOOR_Y_PCT: (f32, f32) = (-10.0, -280.0);
pub const MARQUEE_PARALLAX: f32 = 0.35;

// Marquee drift
pub const MARQUEE_TEXT: &str = "PROJECTS";
pub const MARQUEE_REPEAT: usize = 6;
pub const MARQUEE_LOOP_SECS: f32 = 50.0;
pub const MARQUEE_TRAVEL_PCT: f32 = -50.0;
pub const MARQUEE_ROTATE_DEG: f32 = -10.0;

// Gallery design space
pub const GALLERY_DESIGN_WIDTH: f32 = 1920.0;
pub const GALLERY_MODAL_WIDTH_VW: f32 = 95.0;

// 3D carousel
pub const CAROUSEL_SPACING: f32 = 3.2;
pub const CAROUSEL_WHEEL_TO_WORLD: f32 = 0.004;
pub const CAROUSEL_WHEEL_SPIN_RAD: f32 = 0.0025;
pub const CAROUSEL_IDLE_SPIN_RAD_PER_SEC: f32 = 0.35;
pub const CAROUSEL_WOBBLE_AMPLITUDE_RAD: f32 = 0.18;
pub const CAROUSEL_WOBBLE_HZ: f32 = 0.25;
pub const CAROUSEL_CAMERA_TAU_SEC: f32 = 0.25;
pub const CAROUSEL_CAMERA_Y: f32 = 0.6;
pub const CAROUSEL_CAMERA_Z: f32 = 6.0;
pub const CAROUSEL_FOVY_DEG: f32 = 45.0;
pub const CAROUSEL_MODEL_ALPHA: f32 = 0.55;
pub const CAROUSEL_LABEL_OFFSET_Y: f32 = -1.4;

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
