//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use panelstack::host::{BackdropLog, PresentationLog};
use panelstack::model::{DrawIndex, PanelConfig, PanelId, PanelState};
use panelstack::{PanelManager, StackConfig};

pub type TestManager = PanelManager<PresentationLog, BackdropLog>;

/// Manager with default config and recording collaborators
pub fn test_manager() -> TestManager {
    PanelManager::new(
        StackConfig::default(),
        PresentationLog::new(),
        BackdropLog::default(),
    )
}

pub fn id(name: &str) -> PanelId {
    PanelId::new(name)
}

pub fn open_non_modal(manager: &mut TestManager, name: &str) -> PanelId {
    manager
        .open(PanelConfig::non_modal().with_id(name))
        .expect("open non-modal panel")
}

pub fn open_modal(manager: &mut TestManager, name: &str) -> PanelId {
    manager
        .open(PanelConfig::modal().with_id(name))
        .expect("open modal panel")
}

pub fn state(manager: &TestManager, id: &PanelId) -> PanelState {
    manager.find_by_id(id).expect("panel registered").state()
}

pub fn z(manager: &TestManager, id: &PanelId) -> DrawIndex {
    manager
        .find_by_id(id)
        .and_then(|p| p.draw_index())
        .expect("panel shown")
}

pub fn frontmost(manager: &TestManager) -> Option<String> {
    manager.frontmost().map(|p| p.id().as_str().to_string())
}

/// Check the stacking invariants over the whole registry
///
/// - at most one active panel while a modal is shown, and it is the top modal
/// - every shown modal draws above every shown non-modal
/// - draw indices are unique and packed from the base index
/// - hidden panels carry no draw index
/// - the backdrop is down when nothing is shown
pub fn assert_invariants(manager: &TestManager) {
    let shown: Vec<_> = manager.panels().filter(|p| p.is_available()).collect();

    for panel in manager.panels().filter(|p| !p.is_available()) {
        assert_eq!(panel.state(), PanelState::Hidden);
        assert_eq!(panel.draw_index(), None);
    }

    let mut indices: Vec<DrawIndex> = shown.iter().filter_map(|p| p.draw_index()).collect();
    indices.sort_unstable();
    let base = manager.config().base_index;
    let expected: Vec<DrawIndex> = (0..shown.len() as DrawIndex).map(|i| base + i).collect();
    assert_eq!(indices, expected, "draw indices not packed from base");

    for modal in shown.iter().filter(|p| p.is_modal()) {
        for other in shown.iter().filter(|p| !p.is_modal()) {
            assert!(
                modal.draw_index() > other.draw_index(),
                "modal {} below non-modal {}",
                modal.id(),
                other.id()
            );
        }
    }

    let active: Vec<_> = shown
        .iter()
        .filter(|p| p.state() == PanelState::Active)
        .collect();
    if shown.iter().any(|p| p.is_modal()) {
        assert_eq!(active.len(), 1, "exactly one active panel under a modal");
        assert!(active[0].is_modal());
        let top = shown.iter().max_by_key(|p| p.draw_index()).unwrap();
        assert_eq!(active[0].id(), top.id());
    } else {
        assert_eq!(active.len(), shown.len(), "all non-modal panels active");
    }

    assert_eq!(manager.backdrop().visible, manager.backdrop_visible());
    if shown.is_empty() {
        assert!(!manager.backdrop_visible(), "backdrop left up with no panel shown");
    }

    assert_eq!(
        manager.frontmost().map(|p| p.id().clone()),
        shown
            .iter()
            .max_by_key(|p| p.draw_index())
            .map(|p| p.id().clone())
    );
}
