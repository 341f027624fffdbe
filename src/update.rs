//! Update function for the Elm-style architecture
//!
//! All stacking changes requested through messages flow through [`update`].
//! Failures are resolved here: they are logged and simply produce no command.

use crate::commands::Cmd;
use crate::error::PanelError;
use crate::host::{Backdrop, Presentation};
use crate::keymap::{KeyContext, Keymap, Keystroke};
use crate::manager::{CloseOutcome, PanelManager};
use crate::messages::PanelMsg;
use crate::model::PanelId;

/// Apply a message to the manager
///
/// Returns `Cmd::Redraw` when the stack changed, batched with `Cmd::Focus`
/// when a different panel became frontmost.
pub fn update<P: Presentation, B: Backdrop>(
    manager: &mut PanelManager<P, B>,
    msg: PanelMsg,
) -> Option<Cmd> {
    let before = manager.snapshot();
    let front_before = frontmost_id(manager);

    let result = match msg {
        PanelMsg::Open(config) => manager.open(config).map(|id| {
            tracing::debug!(panel = %id, "Opened panel");
        }),
        PanelMsg::Show(id) => manager.show(&id),
        PanelMsg::Close(id) => close(manager, &id, true),
        PanelMsg::Hide(id) => close(manager, &id, false),
        PanelMsg::Focus(id) => match manager.bring_to_front(&id) {
            // Focus inside a disabled or hidden panel is routine, not a failure
            Err(PanelError::ModalInFront { .. } | PanelError::NotShown(_)) => Ok(()),
            other => other,
        },
        PanelMsg::BringToFront(id) => manager.bring_to_front(&id),
        PanelMsg::CancelFrontmost => cancel_frontmost(manager, true),
        PanelMsg::HideFrontmost => cancel_frontmost(manager, false),
        PanelMsg::CloseAll => {
            manager.close_all();
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::warn!("Panel update failed: {}", e);
        return None;
    }

    if manager.snapshot() == before {
        return None;
    }

    match frontmost_id(manager) {
        Some(front) if Some(&front) != front_before.as_ref() => {
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::Focus(front)]))
        }
        _ => Some(Cmd::Redraw),
    }
}

/// Resolve a keystroke through the keymap and apply the resulting messages
///
/// Returns `None` when the key is unbound in the current stack state.
pub fn update_key<P: Presentation, B: Backdrop>(
    manager: &mut PanelManager<P, B>,
    keymap: &Keymap,
    keystroke: Keystroke,
) -> Option<Cmd> {
    let ctx = KeyContext::from_manager(manager);
    let command = keymap.lookup(keystroke, &ctx)?;
    tracing::debug!(key = %keystroke, ?command, "Key bound to panel command");

    let cmds: Vec<Cmd> = command
        .to_msgs()
        .into_iter()
        .filter_map(|msg| update(manager, msg))
        .collect();

    match cmds.len() {
        0 => None,
        1 => cmds.into_iter().next(),
        _ => Some(Cmd::Batch(cmds)),
    }
}

fn frontmost_id<P: Presentation, B: Backdrop>(manager: &PanelManager<P, B>) -> Option<PanelId> {
    manager.frontmost().map(|p| p.id().clone())
}

fn close<P: Presentation, B: Backdrop>(
    manager: &mut PanelManager<P, B>,
    id: &PanelId,
    destroy: bool,
) -> Result<(), PanelError> {
    if manager.close(id, destroy)? == CloseOutcome::Cancelled {
        tracing::debug!(panel = %id, "Close cancelled");
    }
    Ok(())
}

/// Global cancel-key handling: close the frontmost panel when it is closable
///
/// No frontmost panel, or a frontmost panel without a close affordance,
/// means there is nothing to do.
fn cancel_frontmost<P: Presentation, B: Backdrop>(
    manager: &mut PanelManager<P, B>,
    destroy: bool,
) -> Result<(), PanelError> {
    let Some(front) = manager.frontmost() else {
        return Ok(());
    };
    if !front.closable() {
        tracing::debug!(panel = %front.id(), "Frontmost panel is not closable");
        return Ok(());
    }
    let id = front.id().clone();
    close(manager, &id, destroy)
}
