//! Panel value objects: identity, configuration and stacking slot

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::PresentationHandle;
use crate::notification::{AfterClose, AfterShow, BeforeClose, CancelableNotification, Notification};

/// Draw order of a shown panel; higher draws on top
pub type DrawIndex = u32;

/// Stable identity of a panel, unique within one manager
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether a panel claims exclusive interactivity while shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Disables every other panel while it is the topmost modal; always wants a backdrop
    Modal,
    /// Coexists with other non-modal panels
    NonModal { backdrop: bool },
}

impl PanelKind {
    pub fn is_modal(self) -> bool {
        matches!(self, PanelKind::Modal)
    }

    pub fn wants_backdrop(self) -> bool {
        match self {
            PanelKind::Modal => true,
            PanelKind::NonModal { backdrop } => backdrop,
        }
    }
}

impl Default for PanelKind {
    fn default() -> Self {
        PanelKind::NonModal { backdrop: false }
    }
}

/// Interactivity of a registered panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Active,
    Disabled,
    Hidden,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelState::Active => "active",
            PanelState::Disabled => "disabled",
            PanelState::Hidden => "hidden",
        };
        f.pad(name)
    }
}

/// An action button shown in the panel footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub id: String,
    pub label: String,
    /// Receives keyboard focus when the panel becomes active
    #[serde(default)]
    pub autofocus: bool,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            autofocus: false,
        }
    }

    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }
}

/// Everything needed to register a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Caller-supplied id; the manager generates one when absent
    pub id: Option<PanelId>,
    pub title: Option<String>,
    pub kind: PanelKind,
    /// Whether an explicit close affordance exists (also gates the cancel key)
    pub closable: bool,
    pub buttons: Vec<Button>,
}

impl PanelConfig {
    pub fn modal() -> Self {
        Self {
            kind: PanelKind::Modal,
            ..Self::default()
        }
    }

    pub fn non_modal() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<PanelId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Request a backdrop for a non-modal panel (modal panels always get one)
    pub fn with_backdrop(mut self, backdrop: bool) -> Self {
        if let PanelKind::NonModal { .. } = self.kind {
            self.kind = PanelKind::NonModal { backdrop };
        }
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            kind: PanelKind::default(),
            closable: true,
            buttons: Vec::new(),
        }
    }
}

/// Where a panel sits in the stack. A hidden panel has no draw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Hidden,
    Shown { draw_index: DrawIndex, active: bool },
}

/// A registered panel
///
/// Stacking state is read-only from outside the crate; only
/// [`PanelManager`](crate::manager::PanelManager) moves panels around.
#[derive(Debug)]
pub struct Panel {
    id: PanelId,
    title: Option<String>,
    kind: PanelKind,
    closable: bool,
    buttons: Vec<Button>,
    slot: Slot,
    handle: PresentationHandle,
    pub(crate) before_close: CancelableNotification<BeforeClose>,
    pub(crate) after_show: Notification<AfterShow>,
    pub(crate) after_close: Notification<AfterClose>,
}

impl Panel {
    pub(crate) fn new(id: PanelId, config: PanelConfig, handle: PresentationHandle) -> Self {
        Self {
            id,
            title: config.title,
            kind: config.kind,
            closable: config.closable,
            buttons: config.buttons,
            slot: Slot::Hidden,
            handle,
            before_close: CancelableNotification::new(),
            after_show: Notification::new(),
            after_close: Notification::new(),
        }
    }

    pub fn id(&self) -> &PanelId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn is_modal(&self) -> bool {
        self.kind.is_modal()
    }

    pub fn wants_backdrop(&self) -> bool {
        self.kind.wants_backdrop()
    }

    pub fn closable(&self) -> bool {
        self.closable
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn handle(&self) -> PresentationHandle {
        self.handle
    }

    pub fn state(&self) -> PanelState {
        match self.slot {
            Slot::Hidden => PanelState::Hidden,
            Slot::Shown { active: true, .. } => PanelState::Active,
            Slot::Shown { active: false, .. } => PanelState::Disabled,
        }
    }

    /// `None` while hidden
    pub fn draw_index(&self) -> Option<DrawIndex> {
        match self.slot {
            Slot::Hidden => None,
            Slot::Shown { draw_index, .. } => Some(draw_index),
        }
    }

    /// Shown, whether active or disabled
    pub fn is_available(&self) -> bool {
        matches!(self.slot, Slot::Shown { .. })
    }

    pub(crate) fn place(&mut self, draw_index: DrawIndex, active: bool) {
        self.slot = Slot::Shown { draw_index, active };
    }

    pub(crate) fn hide(&mut self) {
        self.slot = Slot::Hidden;
    }
}
