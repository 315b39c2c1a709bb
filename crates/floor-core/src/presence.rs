//! Exclusive mount/unmount transitions for keyed overlay elements.
//!
//! At most one key is mounted. A new key waits until the current one has
//! finished exiting; the same key coming back mid-exit simply re-enters.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceEvent<K> {
    Mounted(K),
    ExitStarted(K),
    Reentered(K),
    Unmounted(K),
}

pub type PresenceEvents<K> = SmallVec<[PresenceEvent<K>; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExitMode {
    /// Exit completes after a fixed number of seconds.
    Timed(f32),
    /// Exit completes when the owner calls [`Presence::complete_exit`].
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase<K> {
    Absent,
    Present(K),
    Exiting {
        key: K,
        elapsed: f32,
        pending: Option<K>,
    },
}

#[derive(Clone, Debug)]
pub struct Presence<K> {
    phase: Phase<K>,
    exit: ExitMode,
}

impl<K: Copy + PartialEq + std::fmt::Debug> Presence<K> {
    pub fn new(exit: ExitMode) -> Self {
        Self {
            phase: Phase::Absent,
            exit,
        }
    }

    pub fn phase(&self) -> Phase<K> {
        self.phase
    }

    /// Reconcile with the desired key.
    pub fn sync(&mut self, target: Option<K>) -> PresenceEvents<K> {
        let mut events = PresenceEvents::new();
        match (self.phase, target) {
            (Phase::Absent, Some(k)) => {
                self.phase = Phase::Present(k);
                events.push(PresenceEvent::Mounted(k));
            }
            (Phase::Absent, None) => {}
            (Phase::Present(cur), Some(k)) if cur == k => {}
            (Phase::Present(cur), next) => {
                self.phase = Phase::Exiting {
                    key: cur,
                    elapsed: 0.0,
                    pending: next,
                };
                events.push(PresenceEvent::ExitStarted(cur));
            }
            (Phase::Exiting { key, .. }, Some(k)) if key == k => {
                self.phase = Phase::Present(key);
                events.push(PresenceEvent::Reentered(key));
            }
            (Phase::Exiting { key, elapsed, .. }, next) => {
                self.phase = Phase::Exiting {
                    key,
                    elapsed,
                    pending: next,
                };
            }
        }
        if !events.is_empty() {
            log::debug!("[presence] {:?}", events);
        }
        events
    }

    /// Advance a timed exit.
    pub fn tick(&mut self, dt: f32) -> PresenceEvents<K> {
        if let Phase::Exiting {
            key,
            elapsed,
            pending,
        } = self.phase
        {
            let elapsed = elapsed + dt.max(0.0);
            self.phase = Phase::Exiting {
                key,
                elapsed,
                pending,
            };
            if let ExitMode::Timed(duration) = self.exit {
                if elapsed >= duration {
                    return self.complete_exit();
                }
            }
        }
        PresenceEvents::new()
    }

    /// Finish the running exit and mount whatever was queued behind it.
    pub fn complete_exit(&mut self) -> PresenceEvents<K> {
        let mut events = PresenceEvents::new();
        if let Phase::Exiting { key, pending, .. } = self.phase {
            events.push(PresenceEvent::Unmounted(key));
            match pending {
                Some(next) => {
                    self.phase = Phase::Present(next);
                    events.push(PresenceEvent::Mounted(next));
                }
                None => self.phase = Phase::Absent,
            }
            log::debug!("[presence] {:?}", events);
        }
        events
    }

    /// Key whose element is in the tree, entering, shown or exiting.
    pub fn mounted(&self) -> Option<K> {
        match self.phase {
            Phase::Absent => None,
            Phase::Present(k) | Phase::Exiting { key: k, .. } => Some(k),
        }
    }

    /// Key whose element accepts input. Exiting elements never do.
    pub fn interactive(&self) -> Option<K> {
        match self.phase {
            Phase::Present(k) => Some(k),
            _ => None,
        }
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }
}
