//! Selection and the full-screen detail modal.

use crate::catalog::{LayoutKind, ModelDescriptor, Project, ProjectId};
use crate::constants::*;
use crate::easing::{Easing, Tween};
use crate::gallery::{self, GalleryOverlay};
use crate::presence::{ExitMode, Presence, PresenceEvent, PresenceEvents};
use crate::spring::Spring;

/// Where a click inside the modal layer landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    CloseButton,
    /// Inside the modal body; never closes.
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalVisual {
    pub translate_y_pct: f32,
    pub opacity: f32,
    pub scale: f32,
    pub backdrop_opacity: f32,
    pub backdrop_rgba: [f32; 4],
}

/// Body spring plus an independent backdrop tween.
#[derive(Clone, Debug)]
pub struct ModalAnimator {
    y: Spring,
    opacity: Spring,
    scale: Spring,
    backdrop: Tween,
    closing: bool,
}

impl ModalAnimator {
    pub fn opening() -> Self {
        let fine = MODAL_SPRING.with_rest(0.001, 0.001);
        Self {
            y: Spring::from_to(MODAL_SPRING, MODAL_OFFSCREEN_Y_PCT, 0.0),
            opacity: Spring::from_to(fine, MODAL_ENTER_OPACITY, 1.0),
            scale: Spring::from_to(fine, MODAL_CLOSED_SCALE, 1.0),
            backdrop: Tween::new(0.0, 1.0, BACKDROP_SECS, Easing::EaseInOut),
            closing: false,
        }
    }

    pub fn close(&mut self) {
        self.closing = true;
        self.y.set_target(MODAL_OFFSCREEN_Y_PCT);
        self.opacity.set_target(0.0);
        self.scale.set_target(MODAL_CLOSED_SCALE);
        self.backdrop.retarget(0.0);
    }

    pub fn reopen(&mut self) {
        self.closing = false;
        self.y.set_target(0.0);
        self.opacity.set_target(1.0);
        self.scale.set_target(1.0);
        self.backdrop.retarget(1.0);
    }

    pub fn step(&mut self, dt: f32) {
        self.y.step(dt);
        self.opacity.step(dt);
        self.scale.step(dt);
        self.backdrop.step(dt);
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn is_exit_complete(&self) -> bool {
        self.closing
            && self.backdrop.is_finished()
            && self.y.is_settled()
            && self.opacity.is_settled()
            && self.scale.is_settled()
    }

    pub fn visual(&self) -> ModalVisual {
        let t = self.backdrop.value().clamp(0.0, 1.0);
        let mut rgba = [0.0; 4];
        for (i, c) in rgba.iter_mut().enumerate() {
            *c = BACKDROP_CLOSED_RGBA[i] + (BACKDROP_OPEN_RGBA[i] - BACKDROP_CLOSED_RGBA[i]) * t;
        }
        ModalVisual {
            translate_y_pct: self.y.value(),
            opacity: self.opacity.value().clamp(0.0, 1.0),
            scale: self.scale.value(),
            backdrop_opacity: t,
            backdrop_rgba: rgba,
        }
    }
}

/// Owns SelectedProject and the modal's mount lifecycle.
#[derive(Clone, Debug)]
pub struct ModalController {
    selected: Option<ProjectId>,
    presence: Presence<ProjectId>,
    animator: Option<ModalAnimator>,
}

impl Default for ModalController {
    fn default() -> Self {
        Self {
            selected: None,
            presence: Presence::new(ExitMode::Manual),
            animator: None,
        }
    }
}

impl ModalController {
    pub fn select(&mut self, id: ProjectId) {
        log::debug!("[modal] select {}", id);
        self.selected = Some(id);
    }

    /// Clear the selection; content unmounts once the exit has played.
    pub fn close(&mut self) -> Option<ProjectId> {
        let prev = self.selected.take();
        if prev.is_some() {
            log::debug!("[modal] close");
        }
        prev
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Returns true when the click closed the modal.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close().is_some(),
            ClickTarget::Content => false,
        }
    }

    pub fn tick(&mut self, dt: f32) -> PresenceEvents<ProjectId> {
        let mut events = self.presence.sync(self.selected);
        self.apply(&events);
        if let Some(animator) = &mut self.animator {
            animator.step(dt);
        }
        let exit_done = self
            .animator
            .as_ref()
            .map_or(true, ModalAnimator::is_exit_complete);
        if self.presence.is_exiting() && exit_done {
            let finished = self.presence.complete_exit();
            self.apply(&finished);
            events.extend(finished);
        }
        events
    }

    fn apply(&mut self, events: &[PresenceEvent<ProjectId>]) {
        for ev in events {
            match ev {
                PresenceEvent::Mounted(_) => self.animator = Some(ModalAnimator::opening()),
                PresenceEvent::ExitStarted(_) => {
                    if let Some(a) = &mut self.animator {
                        a.close();
                    }
                }
                PresenceEvent::Reentered(_) => {
                    if let Some(a) = &mut self.animator {
                        a.reopen();
                    }
                }
                PresenceEvent::Unmounted(_) => self.animator = None,
            }
        }
    }

    /// Project whose modal content is currently in the tree.
    pub fn mounted(&self) -> Option<ProjectId> {
        self.presence.mounted()
    }

    pub fn visual(&self) -> Option<ModalVisual> {
        self.animator.as_ref().map(ModalAnimator::visual)
    }
}

/// Renderer chosen by a project's layout discriminant.
#[derive(Clone, Copy, Debug)]
pub enum ModalContent<'a> {
    Default(&'a Project),
    Gallery {
        project: &'a Project,
        images: &'a [String],
        overlays: &'static [GalleryOverlay],
    },
    ThreeD {
        project: &'a Project,
        models: &'a [ModelDescriptor],
    },
}

pub fn content_for(project: &Project) -> ModalContent<'_> {
    match project.layout.kind() {
        LayoutKind::Default => ModalContent::Default(project),
        LayoutKind::Gallery => ModalContent::Gallery {
            project,
            images: project.layout.detail_images(),
            overlays: gallery::overlays_for(project.id),
        },
        LayoutKind::ThreeD => ModalContent::ThreeD {
            project,
            models: project.layout.models(),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseButtonTheme {
    /// Opaque white button for light pages.
    Light,
    /// Translucent button over dark media.
    Dark,
}

impl CloseButtonTheme {
    pub fn for_layout(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Default => CloseButtonTheme::Light,
            LayoutKind::Gallery | LayoutKind::ThreeD => CloseButtonTheme::Dark,
        }
    }
}

pub const CLIENT_FALLBACK: &str = "Client";

pub fn client_label(project: &Project) -> &str {
    project.client.as_deref().unwrap_or(CLIENT_FALLBACK)
}
