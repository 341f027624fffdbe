//! Presentation-side collaborators of the panel manager
//!
//! The manager never renders anything. It tells a [`Presentation`] which
//! surfaces exist, whether they are visible and in which order they are
//! drawn, and a [`Backdrop`] whether the dimming overlay is needed.
//! Implementations must be synchronous and idempotent.

use crate::model::{DrawIndex, PanelId, PanelKind};

/// Opaque handle to a presentation surface created for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresentationHandle(pub u64);

/// Creates, orders and destroys the on-screen surface of each panel
pub trait Presentation {
    fn create(&mut self, id: &PanelId, kind: PanelKind) -> PresentationHandle;
    fn destroy(&mut self, handle: PresentationHandle);
    fn set_visible(&mut self, handle: PresentationHandle, visible: bool);
    fn set_draw_index(&mut self, handle: PresentationHandle, index: DrawIndex);
}

/// The overlay drawn beneath modal (or backdrop-requesting) panels
pub trait Backdrop {
    fn show(&mut self);
    fn hide(&mut self);
}

// ============================================================================
// Headless
// ============================================================================

/// No-op host for running the stacking logic without a rendering surface
#[derive(Debug, Clone, Default)]
pub struct Headless {
    next_handle: u64,
}

impl Presentation for Headless {
    fn create(&mut self, _id: &PanelId, _kind: PanelKind) -> PresentationHandle {
        self.next_handle += 1;
        PresentationHandle(self.next_handle)
    }

    fn destroy(&mut self, _handle: PresentationHandle) {}

    fn set_visible(&mut self, _handle: PresentationHandle, _visible: bool) {}

    fn set_draw_index(&mut self, _handle: PresentationHandle, _index: DrawIndex) {}
}

impl Backdrop for Headless {
    fn show(&mut self) {}

    fn hide(&mut self) {}
}

// ============================================================================
// Recording hosts
// ============================================================================

/// A call made by the manager on its presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationCall {
    Create(PresentationHandle),
    Destroy(PresentationHandle),
    SetVisible(PresentationHandle, bool),
    SetDrawIndex(PresentationHandle, DrawIndex),
}

/// Presentation that records every call, for tests and scenario replay
#[derive(Debug, Clone, Default)]
pub struct PresentationLog {
    next_handle: u64,
    pub calls: Vec<PresentationCall>,
}

impl PresentationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces created and not yet destroyed
    pub fn live_surfaces(&self) -> usize {
        let created = self
            .calls
            .iter()
            .filter(|c| matches!(c, PresentationCall::Create(_)))
            .count();
        let destroyed = self
            .calls
            .iter()
            .filter(|c| matches!(c, PresentationCall::Destroy(_)))
            .count();
        created.saturating_sub(destroyed)
    }

    /// Last draw index pushed for a handle
    pub fn draw_index_of(&self, handle: PresentationHandle) -> Option<DrawIndex> {
        self.calls.iter().rev().find_map(|c| match c {
            PresentationCall::SetDrawIndex(h, index) if *h == handle => Some(*index),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Presentation for PresentationLog {
    fn create(&mut self, _id: &PanelId, _kind: PanelKind) -> PresentationHandle {
        self.next_handle += 1;
        let handle = PresentationHandle(self.next_handle);
        self.calls.push(PresentationCall::Create(handle));
        handle
    }

    fn destroy(&mut self, handle: PresentationHandle) {
        self.calls.push(PresentationCall::Destroy(handle));
    }

    fn set_visible(&mut self, handle: PresentationHandle, visible: bool) {
        self.calls.push(PresentationCall::SetVisible(handle, visible));
    }

    fn set_draw_index(&mut self, handle: PresentationHandle, index: DrawIndex) {
        self.calls.push(PresentationCall::SetDrawIndex(handle, index));
    }
}

/// Backdrop that tracks its visibility and how often it was toggled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackdropLog {
    pub visible: bool,
    pub shown: usize,
    pub hidden: usize,
}

impl Backdrop for BackdropLog {
    fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hidden += 1;
    }
}
