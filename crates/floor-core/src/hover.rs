//! Single-select hover arbitration.
//!
//! Exit is immediate: `leave()` never schedules anything.

use crate::catalog::ProjectId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(ProjectId),
}

impl HoverState {
    pub fn hovered(self) -> Option<ProjectId> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(id),
        }
    }

    /// The global "any-hover" flag that dims every other card.
    pub fn is_any(self) -> bool {
        matches!(self, HoverState::Hovering(_))
    }

    pub fn is(self, id: ProjectId) -> bool {
        self == HoverState::Hovering(id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HoverArbitrator {
    state: HoverState,
}

impl HoverArbitrator {
    /// Last enter wins. Returns true when the state changed.
    pub fn enter(&mut self, id: ProjectId) -> bool {
        let next = HoverState::Hovering(id);
        let changed = self.state != next;
        if changed {
            log::debug!("[hover] enter {}", id);
        }
        self.state = next;
        changed
    }

    /// Back to idle, immediately. Returns true when the state changed.
    pub fn leave(&mut self) -> bool {
        let changed = self.state != HoverState::Idle;
        if changed {
            log::debug!("[hover] leave");
        }
        self.state = HoverState::Idle;
        changed
    }

    pub fn state(&self) -> HoverState {
        self.state
    }
}
