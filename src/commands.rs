//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::model::PanelId;

/// Follow-up work requested by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// The stack changed; redraw panels and backdrop
    Redraw,
    /// Move keyboard focus into this panel
    Focus(PanelId),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Focus(_) => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Panel that should receive focus, if any
    pub fn focus_target(&self) -> Option<&PanelId> {
        match self {
            Cmd::Focus(id) => Some(id),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.focus_target()),
            _ => None,
        }
    }
}
