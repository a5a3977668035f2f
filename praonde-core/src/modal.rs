//! Event details overlay.

use crate::event::Event;

/// Whether the vibe question was answered for the open event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VibeReport {
    #[default]
    Pending,
    Submitted,
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dimmed background around the details box. Closes the modal.
    Overlay,
    /// The details box itself. Does not close the modal.
    Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open { event: Event, vibe: VibeReport },
}

impl Modal {
    /// Open `event`, replacing whatever was open. The vibe answer starts over.
    pub fn open(&mut self, event: Event) {
        *self = Modal::Open {
            event,
            vibe: VibeReport::Pending,
        };
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    /// Returns true if the click closed the modal.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match (target, self.is_open()) {
            (ClickTarget::Overlay, true) => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Returns false when nothing is open. Answering twice is allowed and
    /// keeps the report submitted.
    pub fn submit_vibe(&mut self) -> bool {
        match self {
            Modal::Open { vibe, .. } => {
                *vibe = VibeReport::Submitted;
                true
            }
            Modal::Closed => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    pub fn event(&self) -> Option<&Event> {
        match self {
            Modal::Open { event, .. } => Some(event),
            Modal::Closed => None,
        }
    }

    pub fn vibe(&self) -> Option<VibeReport> {
        match self {
            Modal::Open { vibe, .. } => Some(*vibe),
            Modal::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn sample(id: u32) -> Event {
        Seed::builtin().get(id).cloned().unwrap()
    }

    #[test]
    fn overlay_click_closes_content_click_does_not() {
        let mut modal = Modal::default();
        modal.open(sample(1));

        assert!(!modal.click(ClickTarget::Content));
        assert!(modal.is_open());

        assert!(modal.click(ClickTarget::Overlay));
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn click_on_closed_modal_is_noop() {
        let mut modal = Modal::Closed;
        assert!(!modal.click(ClickTarget::Overlay));
        assert!(!modal.submit_vibe());
        assert_eq!(modal.vibe(), None);
    }

    #[test]
    fn reopening_resets_vibe() {
        let mut modal = Modal::default();
        modal.open(sample(2));
        assert!(modal.submit_vibe());
        assert_eq!(modal.vibe(), Some(VibeReport::Submitted));

        modal.open(sample(4));
        assert_eq!(modal.event().map(|e| e.id), Some(4));
        assert_eq!(modal.vibe(), Some(VibeReport::Pending));
    }
}
