//! Message types for the Elm-style architecture
//!
//! All stacking changes requested by a UI flow through these messages.

use crate::model::{PanelConfig, PanelId};

/// Panel stacking messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Register and show a new panel
    Open(PanelConfig),
    /// Show a registered panel (again)
    Show(PanelId),
    /// Close and destroy a panel
    Close(PanelId),
    /// Hide a panel, keeping it registered
    Hide(PanelId),
    /// A panel received pointer or keyboard focus; raise it if allowed
    Focus(PanelId),
    /// Explicitly raise a non-modal panel
    BringToFront(PanelId),
    /// Global cancel key: close the frontmost panel if it is closable
    CancelFrontmost,
    /// Hide the frontmost panel if it is closable
    HideFrontmost,
    /// Destroy every panel without consulting listeners
    CloseAll,
}
