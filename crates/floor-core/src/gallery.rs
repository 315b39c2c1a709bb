//! Long-image gallery: design-space placement of text overlays and the
//! once-per-session reveal of each overlay.

use crate::catalog::ProjectId;
use crate::constants::{GALLERY_DESIGN_WIDTH, GALLERY_MODAL_WIDTH_VW};
use crate::easing::{Easing, Tween};
use crate::scroll::intersects_viewport;
use fnv::FnvHashSet;
use smallvec::SmallVec;

/// Maps coordinates authored on a fixed-width canvas onto the rendered width.
///
/// Vertical positions scale with the width too, because the long images keep
/// their aspect ratio and so grow with the container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignSpace {
    pub design_width: f32,
    pub container_vw: f32,
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self {
            design_width: GALLERY_DESIGN_WIDTH,
            container_vw: GALLERY_MODAL_WIDTH_VW,
        }
    }
}

impl DesignSpace {
    /// Left edge as percent of the container width.
    pub fn left_pct(&self, design_x: f32) -> f32 {
        design_x / self.design_width * 100.0
    }

    /// Top edge in viewport-width units.
    pub fn top_vw(&self, design_y: f32) -> f32 {
        design_y / self.design_width * self.container_vw
    }

    pub fn size_vw(&self, design_size: f32) -> f32 {
        design_size / self.design_width * self.container_vw
    }

    /// Scale a design-space length to pixels for a measured container width.
    pub fn to_px(&self, design: f32, container_width_px: f32) -> f32 {
        design / self.design_width * container_width_px
    }

    pub fn point_px(&self, design_x: f32, design_y: f32, container_width_px: f32) -> (f32, f32) {
        (
            self.to_px(design_x, container_width_px),
            self.to_px(design_y, container_width_px),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayFont {
    Display,
    Caption,
    Script,
}

impl OverlayFont {
    pub fn family(self) -> &'static str {
        match self {
            OverlayFont::Display => "'Franklin Gothic Medium Cond', sans-serif",
            OverlayFont::Caption => "'OPPOSans H', sans-serif",
            OverlayFont::Script => "'Arizonia', cursive",
        }
    }

    pub fn weight(self) -> &'static str {
        match self {
            OverlayFont::Caption => "900",
            OverlayFont::Display | OverlayFont::Script => "normal",
        }
    }

    /// Font size in design pixels.
    pub fn design_size(self) -> f32 {
        match self {
            OverlayFont::Display => 240.0,
            OverlayFont::Caption => 14.0,
            OverlayFont::Script => 80.0,
        }
    }
}

/// A text label drawn over a gallery image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryOverlay {
    pub text: &'static str,
    pub design_x: f32,
    pub design_y: f32,
    pub font: OverlayFont,
    pub enter_from_x_px: f32,
    pub duration: f32,
    pub delay: f32,
}

impl GalleryOverlay {
    const fn display(text: &'static str, design_x: f32, design_y: f32) -> Self {
        Self {
            text,
            design_x,
            design_y,
            font: OverlayFont::Display,
            enter_from_x_px: -100.0,
            duration: 0.6,
            delay: 0.0,
        }
    }

    const fn caption(text: &'static str, design_x: f32, design_y: f32) -> Self {
        Self {
            text,
            design_x,
            design_y,
            font: OverlayFont::Caption,
            enter_from_x_px: -50.0,
            duration: 0.6,
            delay: 0.1,
        }
    }

    const fn script(text: &'static str, design_x: f32, design_y: f32) -> Self {
        Self {
            text,
            design_x,
            design_y,
            font: OverlayFont::Script,
            enter_from_x_px: 100.0,
            duration: 0.8,
            delay: 0.0,
        }
    }
}

static PROJECT_1_OVERLAYS: [GalleryOverlay; 15] = [
    GalleryOverlay::display("Fehn", 200.0, 2675.0),
    GalleryOverlay::caption("创意工程师    CREATIVE ENGINEER", 213.0, 2900.0),
    GalleryOverlay::script("Fehn", 1450.0, 2820.0),
    GalleryOverlay::display("Rabbi", 200.0, 4695.0),
    GalleryOverlay::caption("好奇心先锋 CURIOSITY PIONEER", 213.0, 4908.0),
    GalleryOverlay::script("Rabbi", 1200.0, 4820.0),
    GalleryOverlay::display("Carro", 200.0, 6710.0),
    GalleryOverlay::caption("环保监督员  ENVIRONMENTAL SUPERVISOR", 215.0, 6932.0),
    GalleryOverlay::script("Carro", 1400.0, 6855.0),
    GalleryOverlay::display("Ollie", 200.0, 8735.0),
    GalleryOverlay::caption("情感纽带  EMOTIONAL BOND", 215.0, 8952.0),
    GalleryOverlay::script("Ollie", 1425.0, 8875.0),
    GalleryOverlay::display("Oliver", 200.0, 10755.0),
    GalleryOverlay::caption("智慧守护者  THE WISDOM GUIDE", 215.0, 10977.0),
    GalleryOverlay::script("Oliver", 1410.0, 10900.0),
];

/// Overlays authored for a project; most projects have none.
pub fn overlays_for(project: ProjectId) -> &'static [GalleryOverlay] {
    match project.0 {
        1 => &PROJECT_1_OVERLAYS,
        _ => &[],
    }
}

/// Remembers which overlays have already played their entrance.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: FnvHashSet<usize>,
}

impl RevealTracker {
    /// True exactly once per index: the first time it is seen in view.
    pub fn observe(&mut self, index: usize, in_view: bool) -> bool {
        in_view && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.revealed.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayVisual {
    pub left_pct: f32,
    pub top_vw: f32,
    pub font_size_vw: f32,
    pub x_px: f32,
    pub opacity: f32,
}

/// Live SCROLL Y / MOUSE X readout shown over the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryReadout {
    pub scroll_y: i32,
    pub mouse_x: i32,
}

#[derive(Clone, Copy, Debug)]
struct OverlayReveal {
    x: Tween,
    opacity: Tween,
}

/// Gallery state for one modal session. Dropped when the modal unmounts.
#[derive(Clone, Debug)]
pub struct GallerySession {
    space: DesignSpace,
    overlays: &'static [GalleryOverlay],
    tracker: RevealTracker,
    reveals: Vec<Option<OverlayReveal>>,
    readout: GalleryReadout,
}

impl GallerySession {
    pub fn new(project: ProjectId) -> Self {
        let overlays = overlays_for(project);
        Self {
            space: DesignSpace::default(),
            overlays,
            tracker: RevealTracker::default(),
            reveals: vec![None; overlays.len()],
            readout: GalleryReadout::default(),
        }
    }

    pub fn overlays(&self) -> &'static [GalleryOverlay] {
        self.overlays
    }

    /// Check every overlay against the scrolled viewport; returns the indices
    /// that started their entrance on this call.
    pub fn on_scroll(
        &mut self,
        scroll_top: f32,
        container_width: f32,
        viewport_height: f32,
    ) -> SmallVec<[usize; 4]> {
        self.readout.scroll_y = scroll_top.round() as i32;
        let mut started = SmallVec::new();
        for (i, overlay) in self.overlays.iter().enumerate() {
            let top = self.space.to_px(overlay.design_y, container_width) - scroll_top;
            let height = self.space.to_px(overlay.font.design_size(), container_width);
            let in_view = intersects_viewport(top, top + height, viewport_height);
            if self.tracker.observe(i, in_view) {
                self.reveals[i] = Some(OverlayReveal {
                    x: Tween::new(overlay.enter_from_x_px, 0.0, overlay.duration, Easing::EaseOut)
                        .with_delay(overlay.delay),
                    opacity: Tween::new(0.0, 1.0, overlay.duration, Easing::EaseOut)
                        .with_delay(overlay.delay),
                });
                started.push(i);
            }
        }
        started
    }

    pub fn on_pointer(&mut self, client_x: f32) {
        self.readout.mouse_x = client_x.round() as i32;
    }

    pub fn readout(&self) -> GalleryReadout {
        self.readout
    }

    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }

    pub fn step(&mut self, dt: f32) {
        for reveal in self.reveals.iter_mut().flatten() {
            reveal.x.step(dt);
            reveal.opacity.step(dt);
        }
    }

    pub fn visuals(&self) -> Vec<OverlayVisual> {
        self.overlays
            .iter()
            .zip(&self.reveals)
            .map(|(overlay, reveal)| {
                let (x_px, opacity) = match reveal {
                    Some(r) => (r.x.value(), r.opacity.value()),
                    None => (overlay.enter_from_x_px, 0.0),
                };
                OverlayVisual {
                    left_pct: self.space.left_pct(overlay.design_x),
                    top_vw: self.space.top_vw(overlay.design_y),
                    font_size_vw: self.space.size_vw(overlay.font.design_size()),
                    x_px,
                    opacity,
                }
            })
            .collect()
    }
}
