//! Scripted panel sessions
//!
//! A scenario is a YAML list of steps replayed against a manager through
//! [`update`](crate::update::update), the same path a UI would take:
//!
//! ```yaml
//! steps:
//!   - open: { id: settings }
//!   - open: { id: confirm, modal: true, veto: true }
//!   - key: escape
//!   - close: confirm
//!   - close_all
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::commands::Cmd;
use crate::host::{Backdrop, Presentation};
use crate::keymap::{parse_key_string, Keymap};
use crate::manager::PanelManager;
use crate::messages::PanelMsg;
use crate::model::{Button, PanelConfig, PanelId, PanelKind};
use crate::notification::Propagation;
use crate::update::{update, update_key};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Steps are written as single-key maps (`- close: a`) rather than YAML tags
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Open(OpenStep),
    Show(PanelId),
    Close(PanelId),
    Hide(PanelId),
    /// Interaction focus (best-effort raise)
    Focus(PanelId),
    /// Explicit bring-to-front
    Front(PanelId),
    /// A key press such as `escape` or `ctrl+shift+w`
    Key(String),
    CloseAll,
}

/// Panel description inside an `open` step
#[derive(Debug, Clone, Deserialize)]
pub struct OpenStep {
    #[serde(default)]
    pub id: Option<PanelId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub modal: bool,
    #[serde(default)]
    pub backdrop: bool,
    #[serde(default = "default_closable")]
    pub closable: bool,
    #[serde(default)]
    pub buttons: Vec<Button>,
    /// Install a before-close listener that refuses every close
    #[serde(default)]
    pub veto: bool,
}

fn default_closable() -> bool {
    true
}

impl OpenStep {
    pub fn to_config(&self) -> PanelConfig {
        PanelConfig {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: if self.modal {
                PanelKind::Modal
            } else {
                PanelKind::NonModal {
                    backdrop: self.backdrop,
                }
            },
            closable: self.closable,
            buttons: self.buttons.clone(),
        }
    }
}

/// What one replayed step produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub index: usize,
    pub step: String,
    pub cmd: Option<Cmd>,
}

impl Scenario {
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In scenario {}", path.display()))
    }

    /// Replay every step in order
    ///
    /// Stacking failures (unknown panels, refused raises) are part of the
    /// session and only logged; malformed steps such as unparsable keys
    /// abort the replay.
    pub fn replay<P: Presentation, B: Backdrop>(
        &self,
        manager: &mut PanelManager<P, B>,
        keymap: &Keymap,
    ) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            let cmd = match step {
                Step::Open(open) if open.veto => open_with_veto(manager, open),
                Step::Open(open) => update(manager, PanelMsg::Open(open.to_config())),
                Step::Show(id) => update(manager, PanelMsg::Show(id.clone())),
                Step::Close(id) => update(manager, PanelMsg::Close(id.clone())),
                Step::Hide(id) => update(manager, PanelMsg::Hide(id.clone())),
                Step::Focus(id) => update(manager, PanelMsg::Focus(id.clone())),
                Step::Front(id) => update(manager, PanelMsg::BringToFront(id.clone())),
                Step::Key(key) => {
                    let keystroke = parse_key_string(key)
                        .with_context(|| format!("Step {}: bad key {:?}", index + 1, key))?;
                    update_key(manager, keymap, keystroke)
                }
                Step::CloseAll => update(manager, PanelMsg::CloseAll),
            };

            tracing::debug!(step = index + 1, ?step, ?cmd, "Replayed scenario step");
            reports.push(StepReport {
                index,
                step: describe(step),
                cmd,
            });
        }

        Ok(reports)
    }
}

/// Register, attach a refusing before-close listener, then show
///
/// Failures are logged like any other step handled by `update`.
fn open_with_veto<P: Presentation, B: Backdrop>(
    manager: &mut PanelManager<P, B>,
    open: &OpenStep,
) -> Option<Cmd> {
    let id = match manager.register(open.to_config()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Panel update failed: {}", e);
            return None;
        }
    };
    if let Err(e) = manager.on_before_close(&id, |_| Propagation::Veto) {
        tracing::warn!("Could not install veto on {}: {}", id, e);
    }
    update(manager, PanelMsg::Show(id))
}

fn describe(step: &Step) -> String {
    match step {
        Step::Open(open) => {
            let kind = if open.modal { "modal" } else { "panel" };
            match &open.id {
                Some(id) => format!("open {} {}", kind, id),
                None => format!("open {}", kind),
            }
        }
        Step::Show(id) => format!("show {}", id),
        Step::Close(id) => format!("close {}", id),
        Step::Hide(id) => format!("hide {}", id),
        Step::Focus(id) => format!("focus {}", id),
        Step::Front(id) => format!("front {}", id),
        Step::Key(key) => format!("key {}", key),
        Step::CloseAll => "close all".to_string(),
    }
}
