/// DOM ids, class names and CSS used by the web front-end.
///
/// Kept free of web-sys so the host-side tests can include it directly.
// Mount points
pub const ROOT_ID: &str = "projects-root";
pub const STYLE_ID: &str = "vinyl-floor-style";

// Section structure
pub const SECTION_CLASS: &str = "vf-section";
pub const STICKY_CLASS: &str = "vf-sticky";
pub const STAGE_CLASS: &str = "vf-stage";
pub const FLOOR_CLASS: &str = "vf-floor";
pub const MARQUEE_CLASS: &str = "vf-marquee";
pub const MARQUEE_TRACK_CLASS: &str = "vf-marquee-track";
pub const CARDS_CLASS: &str = "vf-cards";
pub const CARD_CLASS: &str = "vf-card";
pub const CARD_SLEEVE_CLASS: &str = "vf-card-sleeve";
pub const CARD_LABEL_CLASS: &str = "vf-card-label";

// Preview panel
pub const PREVIEW_LAYER_CLASS: &str = "vf-preview-layer";
pub const PREVIEW_CLASS: &str = "vf-preview";
pub const PREVIEW_GLOW_CLASS: &str = "vf-preview-glow";
pub const PREVIEW_DOT_CLASS: &str = "vf-preview-dot";
pub const TOOL_ICON_CLASS: &str = "vf-tool-icon";

// Modal
pub const BACKDROP_CLASS: &str = "vf-backdrop";
pub const MODAL_CLASS: &str = "vf-modal";
pub const MODAL_SCROLL_CLASS: &str = "vf-modal-scroll";
pub const CLOSE_CLASS: &str = "vf-close";
pub const CLOSE_LIGHT_CLASS: &str = "vf-close-light";
pub const CLOSE_DARK_CLASS: &str = "vf-close-dark";
pub const HERO_CLASS: &str = "vf-hero";
pub const HERO_PLACEHOLDER_TEXT: &str = "Project Image";
pub const OVERVIEW_HEADING: &str = "Project Overview";
pub const TOOLS_HEADING: &str = "Tools";
pub const GALLERY_CLASS: &str = "vf-gallery";
pub const GALLERY_IMAGE_CLASS: &str = "vf-gallery-image";
pub const GALLERY_OVERLAY_CLASS: &str = "vf-gallery-overlay";
pub const GALLERY_FOOTER_TEXT: &str = "End of Project Gallery";
pub const READOUT_CLASS: &str = "vf-readout";
pub const CAROUSEL_CLASS: &str = "vf-carousel";
pub const CAROUSEL_CANVAS_CLASS: &str = "vf-carousel-canvas";
pub const CAROUSEL_LABEL_CLASS: &str = "vf-carousel-label";
pub const CAROUSEL_HINT_TEXT: &str = "Scroll to explore";

// Sizes
pub const CARD_WIDTH_PX: f32 = 220.0;
pub const PREVIEW_WIDTH_PX: f32 = 750.0;
pub const TOOL_ICON_PX: f32 = 44.0;
pub const GLOW_RADIUS_PX: f32 = 260.0;

/// Clear colour behind the carousel models.
pub const CAROUSEL_CLEAR_RGBA: [f64; 4] = [0.04, 0.04, 0.05, 1.0];

pub const STYLE_SHEET: &str = r#"
.vf-section { position: relative; height: 550vh; }
.vf-sticky { position: sticky; top: 0; height: 100vh; overflow: hidden; perspective: 2000px; }
.vf-stage { position: relative; margin: 0 auto; max-width: 1600px; aspect-ratio: 16 / 9; transform-style: preserve-3d; }
.vf-floor { position: absolute; inset: 0; transform-style: preserve-3d; }
.vf-marquee { position: absolute; left: -50%; width: 200%; top: 40%; overflow: hidden; pointer-events: none; }
.vf-marquee-track { display: flex; white-space: nowrap; font-size: 18vw; font-weight: 900; opacity: 0.08; }
.vf-marquee-track span { padding: 0 0.25em; }
.vf-cards { position: absolute; inset: 0; transform-style: preserve-3d; }
.vf-card { position: absolute; width: 220px; aspect-ratio: 1; cursor: pointer; will-change: transform, opacity; }
.vf-card-sleeve { width: 100%; height: 100%; background-size: cover; background-position: center; box-shadow: 0 20px 40px rgba(0,0,0,0.35); }
.vf-card-label { margin-top: 8px; font: 600 12px/1.2 sans-serif; letter-spacing: 0.08em; text-transform: uppercase; }
.vf-preview-layer { position: absolute; inset: 0; pointer-events: none; transform-style: preserve-3d; }
.vf-preview { position: absolute; right: 1%; top: 25%; width: 750px; height: 280px; box-sizing: border-box; padding: 28px; z-index: 50; border-radius: 18px; background: rgba(20,20,20,0.92); color: #fff; overflow: hidden; pointer-events: auto; will-change: transform, opacity, filter; }
.vf-preview-glow { position: absolute; inset: 0; pointer-events: none; }
.vf-preview-dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 8px; }
.vf-tool-icon { position: absolute; width: 44px; height: 44px; border-radius: 10px; background: #fff center / 70% no-repeat; }
.vf-backdrop { position: fixed; inset: 0; z-index: 1000; }
.vf-modal { position: fixed; left: 2.5vw; right: 2.5vw; top: 4vh; bottom: 0; z-index: 1001; border-radius: 24px 24px 0 0; background: #fff; overflow: hidden; will-change: transform, opacity; }
.vf-modal-scroll { position: absolute; inset: 0; overflow-y: auto; }
.vf-close { position: absolute; top: 20px; right: 20px; z-index: 2; width: 44px; height: 44px; border-radius: 50%; border: none; cursor: pointer; font-size: 20px; }
.vf-close-light { background: #fff; color: #111; }
.vf-close-dark { background: rgba(0,0,0,0.45); color: #fff; }
.vf-hero { width: 100%; aspect-ratio: 16 / 7; background-size: cover; background-position: center; display: flex; align-items: center; justify-content: center; color: #999; }
.vf-gallery { position: relative; background: #111; }
.vf-gallery-image { display: block; width: 100%; }
.vf-gallery-overlay { position: absolute; color: #fff; white-space: nowrap; pointer-events: none; will-change: transform, opacity; }
.vf-readout { position: absolute; left: 20px; bottom: 20px; z-index: 2; font: 12px monospace; color: #0f0; background: rgba(0,0,0,0.6); padding: 6px 8px; }
.vf-carousel { position: absolute; inset: 0; background: #0a0a0c; }
.vf-carousel-canvas { width: 100%; height: 100%; display: block; }
.vf-carousel-label { position: absolute; transform: translate(-50%, 0); color: #fff; font: 600 14px sans-serif; letter-spacing: 0.2em; pointer-events: none; }
"#;
