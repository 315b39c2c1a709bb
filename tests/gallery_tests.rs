// Gallery overlay placement and one-shot reveals.

use floor_core::gallery::{overlays_for, DesignSpace, GallerySession, OverlayFont, RevealTracker};
use floor_core::ProjectId;

#[test]
fn design_space_scales_with_width() {
    let space = DesignSpace::default();
    assert_eq!(space.left_pct(960.0), 50.0);
    assert!((space.top_vw(1920.0) - 95.0).abs() < 1e-4);
    assert!((space.size_vw(OverlayFont::Display.design_size()) - 240.0 / 1920.0 * 95.0).abs() < 1e-4);
    assert_eq!(space.to_px(200.0, 960.0), 100.0);
    assert_eq!(space.point_px(1920.0, 3840.0, 480.0), (480.0, 960.0));
}

#[test]
fn overlay_table_belongs_to_first_project() {
    let overlays = overlays_for(ProjectId(1));
    assert_eq!(overlays.len(), 15);
    assert!(overlays.windows(3).step_by(3).all(|w| {
        w[0].font == OverlayFont::Display
            && w[1].font == OverlayFont::Caption
            && w[2].font == OverlayFont::Script
    }));
    assert!(overlays_for(ProjectId(2)).is_empty());
}

#[test]
fn reveal_fires_once_per_index() {
    let mut t = RevealTracker::default();
    assert!(!t.observe(0, false));
    assert!(t.observe(0, true));
    assert!(!t.observe(0, true));
    assert!(!t.observe(0, false));
    assert!(t.is_revealed(0));
    assert!(t.observe(1, true));
    assert_eq!(t.count(), 2);
}

#[test]
fn session_starts_overlays_as_they_scroll_in() {
    let mut s = GallerySession::new(ProjectId(1));
    let width = 1920.0;
    let vh = 1000.0;

    assert!(s.on_scroll(0.0, width, vh).is_empty());
    let hidden = s.visuals();
    assert!(hidden.iter().all(|v| v.opacity == 0.0));
    assert_eq!(hidden[0].x_px, -100.0);
    assert_eq!(hidden[2].x_px, 100.0);

    let started = s.on_scroll(2500.0, width, vh);
    assert_eq!(started.as_slice(), &[0, 1, 2]);
    assert!(s.on_scroll(2500.0, width, vh).is_empty());
    assert!(s.on_scroll(0.0, width, vh).is_empty());
    assert_eq!(s.tracker().count(), 3);

    s.step(2.0);
    let shown = s.visuals();
    assert_eq!(shown[0].opacity, 1.0);
    assert_eq!(shown[0].x_px, 0.0);
    assert_eq!(shown[3].opacity, 0.0);
}

#[test]
fn readout_tracks_scroll_and_pointer() {
    let mut s = GallerySession::new(ProjectId(1));
    s.on_scroll(1234.4, 1600.0, 900.0);
    s.on_pointer(77.6);
    let r = s.readout();
    assert_eq!(r.scroll_y, 1234);
    assert_eq!(r.mouse_x, 78);
}

#[test]
fn project_without_overlays_has_empty_session() {
    let mut s = GallerySession::new(ProjectId(2));
    assert!(s.on_scroll(5000.0, 1920.0, 1000.0).is_empty());
    assert!(s.visuals().is_empty());
}
