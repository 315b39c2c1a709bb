//! The whole projects section as one state machine.
//!
//! Event handlers only mutate input state (pointer, scroll, hover, selection,
//! wheel). Everything visual is derived in [`Section::tick`].

use crate::carousel::{Carousel, CarouselFrame};
use crate::catalog::{Catalog, Layout, ProjectId};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::depth::{compose_stage, StageTransform};
use crate::gallery::{GalleryReadout, GallerySession, OverlayVisual};
use crate::hover::{HoverArbitrator, HoverState};
use crate::layout::{card_target, CardAnimator, CardVisual};
use crate::marquee::{Marquee, MarqueeDirection};
use crate::modal::{ClickTarget, ModalController, ModalVisual};
use crate::pointer::PointerTracker;
use crate::presence::{ExitMode, Presence, PresenceEvent};
use crate::preview::{PreviewAnimator, PreviewVisual, ToolIconVisual};
use crate::scroll::{ScrollMapping, ScrollProgressMapper};
use smallvec::SmallVec;

/// Mount lifecycle changes the renderer has to mirror in the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEvent {
    Preview(PresenceEvent<ProjectId>),
    Modal(PresenceEvent<ProjectId>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub id: ProjectId,
    pub z_index: u32,
    pub visual: CardVisual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewFrame {
    pub project: ProjectId,
    pub interactive: bool,
    pub visual: PreviewVisual,
    pub tool_icons: SmallVec<[ToolIconVisual; 6]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalFrame {
    pub project: ProjectId,
    /// False once the close has been requested.
    pub interactive: bool,
    pub visual: ModalVisual,
}

/// Everything the renderer needs for one animation frame.
#[derive(Clone, Debug)]
pub struct SectionFrame {
    pub stage: StageTransform,
    pub scroll: ScrollMapping,
    pub marquee_offset_pct: f32,
    pub cards: Vec<CardFrame>,
    pub preview: Option<PreviewFrame>,
    pub modal: Option<ModalFrame>,
    pub overlays: Vec<OverlayVisual>,
    pub readout: Option<GalleryReadout>,
    pub carousel: Option<CarouselFrame>,
    pub events: SmallVec<[SectionEvent; 4]>,
}

pub struct Section {
    catalog: Catalog,
    pointer: PointerTracker,
    scroll: ScrollProgressMapper,
    hover: HoverArbitrator,
    preview: Presence<ProjectId>,
    preview_anim: Option<PreviewAnimator>,
    modal: ModalController,
    cards: Vec<CardAnimator>,
    marquee: Marquee,
    gallery: Option<GallerySession>,
    carousel: Option<Carousel>,
}

impl Default for Section {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Section {
    pub fn new(catalog: Catalog) -> Self {
        let cards = catalog
            .cards()
            .map(|(project, position)| CardAnimator::new(position, u64::from(project.id.0)))
            .collect();
        Self {
            catalog,
            pointer: PointerTracker::default(),
            scroll: ScrollProgressMapper::default(),
            hover: HoverArbitrator::default(),
            preview: Presence::new(ExitMode::Timed(crate::constants::PREVIEW_EXIT_SECS)),
            preview_anim: None,
            modal: ModalController::default(),
            cards,
            marquee: Marquee::new(MarqueeDirection::Left),
            gallery: None,
            carousel: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn hover(&self) -> HoverState {
        self.hover.state()
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.modal.selected()
    }

    pub fn preview_mounted(&self) -> Option<ProjectId> {
        self.preview.mounted()
    }

    pub fn modal_mounted(&self) -> Option<ProjectId> {
        self.modal.mounted()
    }

    pub fn gallery(&self) -> Option<&GallerySession> {
        self.gallery.as_ref()
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll.progress()
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.pointer.on_move(client_x, client_y, viewport_w, viewport_h);
    }

    pub fn on_scroll(&mut self, rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
        self.scroll.on_scroll(rect_top, rect_height, viewport_height)
    }

    /// First time card `index` intersects the viewport.
    pub fn reveal_card(&mut self, index: usize) -> bool {
        self.cards.get_mut(index).map_or(false, CardAnimator::reveal)
    }

    pub fn on_card_enter(&mut self, id: ProjectId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        self.hover.enter(id)
    }

    pub fn on_card_leave(&mut self) -> bool {
        self.hover.leave()
    }

    /// Pointer entered the preview panel. Ignored while the panel exits.
    pub fn on_preview_enter(&mut self, id: ProjectId) -> bool {
        if self.preview.interactive() != Some(id) {
            return false;
        }
        self.hover.enter(id)
    }

    pub fn on_preview_leave(&mut self, id: ProjectId) -> bool {
        if self.preview.interactive() != Some(id) {
            return false;
        }
        self.hover.leave()
    }

    /// Card click. Unknown ids are ignored.
    pub fn on_click(&mut self, id: ProjectId) -> bool {
        if self.catalog.get(id).is_none() {
            log::warn!("[section] click on unknown project {}", id);
            return false;
        }
        self.modal.select(id);
        true
    }

    /// Preview panel click. Only the live panel opens the modal; a panel
    /// that is still exiting ignores clicks.
    pub fn on_preview_click(&mut self, id: ProjectId) -> bool {
        if self.preview.interactive() != Some(id) {
            return false;
        }
        self.on_click(id)
    }

    pub fn on_modal_click(&mut self, target: ClickTarget) -> bool {
        self.modal.handle_click(target)
    }

    pub fn close(&mut self) -> Option<ProjectId> {
        self.modal.close()
    }

    pub fn on_wheel(&mut self, delta_y: f32) -> Option<f32> {
        self.carousel.as_mut().map(|c| c.on_wheel(delta_y))
    }

    pub fn set_carousel_aspect(&mut self, aspect: f32) {
        if let Some(carousel) = &mut self.carousel {
            carousel.set_aspect(aspect);
        }
    }

    /// Scroll inside the gallery modal; returns overlays that started revealing.
    pub fn on_gallery_scroll(
        &mut self,
        scroll_top: f32,
        container_width: f32,
        viewport_height: f32,
    ) -> SmallVec<[usize; 4]> {
        match &mut self.gallery {
            Some(g) => g.on_scroll(scroll_top, container_width, viewport_height),
            None => SmallVec::new(),
        }
    }

    pub fn on_gallery_pointer(&mut self, client_x: f32) {
        if let Some(g) = &mut self.gallery {
            g.on_pointer(client_x);
        }
    }

    pub fn tick(&mut self, dt: f32) -> SectionFrame {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        let mut events = SmallVec::new();

        self.pointer.step(dt);
        self.marquee.step(dt);

        let hover = self.hover.state();
        for (animator, (project, position)) in self.cards.iter_mut().zip(self.catalog.cards()) {
            animator.retarget(&card_target(position, hover, project.id));
            animator.step(dt);
        }

        let mut preview_events = self.preview.sync(hover.hovered());
        preview_events.extend(self.preview.tick(dt));
        for ev in preview_events {
            self.apply_preview(ev);
            events.push(SectionEvent::Preview(ev));
        }
        if let Some(anim) = &mut self.preview_anim {
            anim.step(dt);
        }

        for ev in self.modal.tick(dt) {
            self.apply_modal(ev);
            events.push(SectionEvent::Modal(ev));
        }
        if let Some(g) = &mut self.gallery {
            g.step(dt);
        }
        if let Some(c) = &mut self.carousel {
            c.step(dt);
        }

        self.frame(events)
    }

    fn apply_preview(&mut self, ev: PresenceEvent<ProjectId>) {
        match ev {
            PresenceEvent::Mounted(id) => {
                self.preview_anim = self.catalog.get(id).map(PreviewAnimator::enter);
            }
            PresenceEvent::ExitStarted(_) => {
                if let Some(anim) = &mut self.preview_anim {
                    anim.exit();
                }
            }
            PresenceEvent::Reentered(_) => {
                if let Some(anim) = &mut self.preview_anim {
                    anim.reenter();
                }
            }
            PresenceEvent::Unmounted(_) => self.preview_anim = None,
        }
    }

    fn apply_modal(&mut self, ev: PresenceEvent<ProjectId>) {
        match ev {
            PresenceEvent::Mounted(id) => {
                let layout = self.catalog.get(id).map(|p| &p.layout);
                self.gallery = match layout {
                    Some(Layout::Gallery { .. }) => Some(GallerySession::new(id)),
                    _ => None,
                };
                self.carousel = match layout {
                    Some(Layout::ThreeD { models }) => Some(Carousel::new(models)),
                    _ => None,
                };
                log::debug!("[section] modal session {} started", id);
            }
            PresenceEvent::Unmounted(id) => {
                self.gallery = None;
                self.carousel = None;
                log::debug!("[section] modal session {} ended", id);
            }
            PresenceEvent::ExitStarted(_) | PresenceEvent::Reentered(_) => {}
        }
    }

    fn frame(&self, events: SmallVec<[SectionEvent; 4]>) -> SectionFrame {
        let cards = self
            .cards
            .iter()
            .zip(self.catalog.cards())
            .map(|(animator, (project, position))| CardFrame {
                id: project.id,
                z_index: position.z_index,
                visual: animator.visual(),
            })
            .collect();
        let preview = self.preview_anim.as_ref().map(|anim| PreviewFrame {
            project: anim.project(),
            interactive: self.preview.interactive() == Some(anim.project()),
            visual: anim.visual(),
            tool_icons: anim.tool_icons(),
        });
        let modal = self
            .modal
            .mounted()
            .zip(self.modal.visual())
            .map(|(project, visual)| ModalFrame {
                project,
                interactive: self.modal.selected() == Some(project),
                visual,
            });
        SectionFrame {
            stage: compose_stage(self.pointer.smoothed()),
            scroll: self.scroll.mapping(),
            marquee_offset_pct: self.marquee.offset_pct(),
            cards,
            preview,
            modal,
            overlays: self.gallery.as_ref().map(GallerySession::visuals).unwrap_or_default(),
            readout: self.gallery.as_ref().map(GallerySession::readout),
            carousel: self.carousel.as_ref().map(Carousel::frame),
            events,
        }
    }
}
