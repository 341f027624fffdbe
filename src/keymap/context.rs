//! Context system for conditional keybindings
//!
//! Lets a binding apply only in some stack states, such as "Escape closes the
//! frontmost panel, but only when it has a close button".

use crate::host::{Backdrop, Presentation};
use crate::manager::PanelManager;

/// Stack state relevant to key handling, extracted from the manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// At least one panel is shown
    pub panel_open: bool,
    /// The frontmost panel exists and has a close affordance
    pub frontmost_closable: bool,
    /// A modal panel is shown
    pub modal_active: bool,
}

impl KeyContext {
    pub fn from_manager<P: Presentation, B: Backdrop>(manager: &PanelManager<P, B>) -> Self {
        let front = manager.frontmost();
        Self {
            panel_open: front.is_some(),
            frontmost_closable: front.is_some_and(|p| p.closable()),
            modal_active: manager.registry().has_available_modal(),
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    PanelOpen,
    FrontmostClosable,
    ModalActive,
    ModalInactive,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::PanelOpen => ctx.panel_open,
            Condition::FrontmostClosable => ctx.frontmost_closable,
            Condition::ModalActive => ctx.modal_active,
            Condition::ModalInactive => !ctx.modal_active,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
