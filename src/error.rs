//! Error types for the panel manager
//!
//! A vetoed close is not an error: it is reported as
//! [`CloseOutcome::Cancelled`](crate::manager::CloseOutcome). Everything here is
//! caller misuse or a refused best-effort request, resolved without touching
//! the rest of the registry.

use thiserror::Error;

use crate::model::PanelId;

/// Errors returned by [`PanelManager`](crate::manager::PanelManager) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// No panel with this id is registered
    #[error("Unknown panel: {0}")]
    UnknownPanel(PanelId),

    /// A panel with this id is already registered
    #[error("Panel already registered: {0}")]
    DuplicatePanel(PanelId),

    /// The panel is registered but hidden
    #[error("Panel is not shown: {0}")]
    NotShown(PanelId),

    /// A modal panel is showing, so a non-modal panel cannot be raised
    #[error("Cannot raise {panel}: modal panel {blocking} is in front")]
    ModalInFront { panel: PanelId, blocking: PanelId },
}

pub type Result<T, E = PanelError> = std::result::Result<T, E>;
