//! The panel stacking manager
//!
//! Decides, across every open panel, which one is frontmost, which panels are
//! interactive, and the draw order of all of them.
//!
//! Stacking rules kept after every operation:
//! - Draw indices of shown panels are packed from `base_index` upward: the
//!   non-modal group first, then the modal group, each in recency order.
//!   Modal panels therefore always draw above non-modal ones.
//! - While any modal panel is shown, exactly one panel is active: the topmost
//!   modal. Otherwise every shown non-modal panel is active.
//!
//! All operations run to completion synchronously. The manager is the only
//! mutator of panel state and draw order.

use crate::config::{StackConfig, MAX_BASE_INDEX};
use crate::error::{PanelError, Result};
use crate::host::{Backdrop, Headless, Presentation};
use crate::model::{DrawIndex, Panel, PanelConfig, PanelId, PanelRegistry};
use crate::notification::{AfterClose, AfterShow, BeforeClose, ListenerId, Propagation};
use crate::tracing::StackSnapshot;

/// Result of a close request that reached the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The panel was hidden or destroyed
    Closed,
    /// A before-close listener vetoed; nothing changed
    Cancelled,
}

impl CloseOutcome {
    pub fn is_closed(self) -> bool {
        self == CloseOutcome::Closed
    }
}

/// Stacking manager for one presentation context
pub struct PanelManager<P = Headless, B = Headless> {
    registry: PanelRegistry,
    config: StackConfig,
    presentation: P,
    backdrop: B,
    backdrop_visible: bool,
    generated_ids: u64,
}

impl PanelManager {
    /// Manager with default config and no rendering surface
    pub fn headless() -> Self {
        Self::new(StackConfig::default(), Headless::default(), Headless::default())
    }
}

impl<P: Presentation, B: Backdrop> PanelManager<P, B> {
    /// Build a manager; a `base_index` above [`MAX_BASE_INDEX`] is clamped
    pub fn new(mut config: StackConfig, presentation: P, backdrop: B) -> Self {
        if config.base_index > MAX_BASE_INDEX {
            tracing::warn!(
                base_index = config.base_index,
                "base_index too large, clamping to {}",
                MAX_BASE_INDEX
            );
            config.base_index = MAX_BASE_INDEX;
        }
        Self {
            registry: PanelRegistry::new(),
            config,
            presentation,
            backdrop,
            backdrop_visible: false,
            generated_ids: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn backdrop(&self) -> &B {
        &self.backdrop
    }

    pub fn backdrop_visible(&self) -> bool {
        self.backdrop_visible
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.registry.iter()
    }

    /// Number of registered panels, hidden ones included
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of shown panels
    pub fn available_count(&self) -> usize {
        self.registry.available().count()
    }

    /// Shown panel ids from bottom to top
    pub fn stack(&self) -> Vec<PanelId> {
        self.registry.stack()
    }

    pub fn find_by_id(&self, id: &PanelId) -> Option<&Panel> {
        self.registry.find(id)
    }

    /// The shown panel drawn on top, if any
    ///
    /// When a modal panel is shown this is always the topmost modal.
    pub fn frontmost(&self) -> Option<&Panel> {
        let modal = self.registry.group(true, None);
        let top = match modal.last() {
            Some(&pos) => Some(pos),
            None => self.registry.group(false, None).last().copied(),
        };
        top.map(|pos| self.registry.get(pos))
    }

    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot::capture(&self.registry, self.backdrop_visible)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Add a hidden panel to the registry
    ///
    /// Other panels are untouched. Fails if the id is already registered.
    pub fn register(&mut self, mut config: PanelConfig) -> Result<PanelId> {
        let id = match config.id.take() {
            Some(id) if self.registry.contains(&id) => {
                tracing::warn!(panel = %id, "Refusing to register duplicate panel");
                return Err(PanelError::DuplicatePanel(id));
            }
            Some(id) => id,
            None => self.generate_id(),
        };

        let handle = self.presentation.create(&id, config.kind);
        tracing::debug!(
            panel = %id,
            modal = config.kind.is_modal(),
            "Registered panel"
        );
        self.registry.insert(Panel::new(id.clone(), config, handle));
        Ok(id)
    }

    /// Register and immediately show a panel
    pub fn open(&mut self, config: PanelConfig) -> Result<PanelId> {
        let id = self.register(config)?;
        self.show(&id)?;
        Ok(id)
    }

    /// Make a panel available and restack the whole registry
    ///
    /// A modal panel goes on top of everything and disables every other
    /// panel. A non-modal panel goes on top of the non-modal group but below
    /// any modal panel, and is only active when no modal panel is shown.
    /// Showing an already shown panel raises it within its group.
    pub fn show(&mut self, id: &PanelId) -> Result<()> {
        let pos = self.position(id)?;
        let before = self.trace_snapshot();
        let was_hidden = !self.registry.get(pos).is_available();

        let mut non_modal = self.registry.group(false, Some(id));
        let mut modal = self.registry.group(true, Some(id));
        if self.registry.get(pos).is_modal() {
            modal.push(pos);
        } else {
            non_modal.push(pos);
        }
        self.restack(&non_modal, &modal);

        let panel = self.registry.get(pos);
        let handle = panel.handle();
        let wants_backdrop = self.config.wants_backdrop(panel.wants_backdrop());
        if was_hidden {
            self.presentation.set_visible(handle, true);
        }
        if wants_backdrop && !self.backdrop_visible {
            self.backdrop.show();
            self.backdrop_visible = true;
        }

        let panel = self.registry.get_mut(pos);
        let event = AfterShow {
            id: id.clone(),
            draw_index: panel.draw_index().unwrap_or(self.config.base_index),
            state: panel.state(),
        };
        panel.after_show.fire(&event);

        self.trace_restack("show", id, before);
        Ok(())
    }

    /// Close a panel, destroying it or only hiding it
    ///
    /// Before-close listeners run first; a veto leaves the registry exactly as
    /// it was and returns [`CloseOutcome::Cancelled`]. Otherwise the remaining
    /// panels are restacked and the next most senior panel becomes active.
    /// Hiding an already hidden panel is a no-op.
    pub fn close(&mut self, id: &PanelId, destroy: bool) -> Result<CloseOutcome> {
        let pos = self.position(id)?;
        if !destroy && !self.registry.get(pos).is_available() {
            return Ok(CloseOutcome::Closed);
        }

        let event = BeforeClose {
            id: id.clone(),
            destroy,
        };
        if self.registry.get_mut(pos).before_close.fire(&event).is_veto() {
            tracing::debug!(panel = %id, destroy, "Close vetoed by listener");
            return Ok(CloseOutcome::Cancelled);
        }

        let before = self.trace_snapshot();
        let non_modal = self.registry.group(false, Some(id));
        let modal = self.registry.group(true, Some(id));
        self.restack(&non_modal, &modal);

        let event = AfterClose {
            id: id.clone(),
            destroyed: destroy,
        };
        if destroy {
            let mut panel = self.registry.remove(pos);
            self.presentation.destroy(panel.handle());
            panel.after_close.fire(&event);
        } else {
            let panel = self.registry.get_mut(pos);
            let was_shown = panel.is_available();
            panel.hide();
            if was_shown {
                self.presentation.set_visible(panel.handle(), false);
            }
            panel.after_close.fire(&event);
        }

        self.release_backdrop();
        self.trace_restack(if destroy { "close" } else { "hide" }, id, before);
        Ok(CloseOutcome::Closed)
    }

    /// Hide a panel without destroying it; it can be shown again later
    pub fn hide(&mut self, id: &PanelId) -> Result<CloseOutcome> {
        self.close(id, false)
    }

    /// Raise a non-modal panel above its non-modal peers
    ///
    /// Best effort: succeeds without changes if the panel is already
    /// frontmost, and refuses while any modal panel is shown.
    pub fn bring_to_front(&mut self, id: &PanelId) -> Result<()> {
        let pos = self.position(id)?;
        if !self.registry.get(pos).is_available() {
            return Err(PanelError::NotShown(id.clone()));
        }

        if let Some(front) = self.frontmost() {
            if front.id() == id {
                return Ok(());
            }
            if front.is_modal() {
                let blocking = front.id().clone();
                tracing::debug!(panel = %id, %blocking, "Refusing to raise panel under modal");
                return Err(PanelError::ModalInFront {
                    panel: id.clone(),
                    blocking,
                });
            }
        }

        let before = self.trace_snapshot();
        let mut non_modal = self.registry.group(false, Some(id));
        non_modal.push(pos);
        self.restack(&non_modal, &[]);
        self.trace_restack("bring_to_front", id, before);
        Ok(())
    }

    /// Destroy every panel without consulting before-close listeners
    ///
    /// Returns the number of panels destroyed.
    pub fn close_all(&mut self) -> usize {
        let count = self.registry.len();
        for mut panel in self.registry.drain() {
            self.presentation.destroy(panel.handle());
            panel.after_close.fire(&AfterClose {
                id: panel.id().clone(),
                destroyed: true,
            });
        }
        self.release_backdrop();

        if count > 0 {
            tracing::debug!(target: "stack", count, "Closed all panels");
        }
        count
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Listen for close requests; returning [`Propagation::Veto`] cancels the close
    pub fn on_before_close(
        &mut self,
        id: &PanelId,
        listener: impl FnMut(&BeforeClose) -> Propagation + 'static,
    ) -> Result<ListenerId> {
        Ok(self.panel_mut(id)?.before_close.subscribe(listener))
    }

    pub fn on_after_show(
        &mut self,
        id: &PanelId,
        listener: impl FnMut(&AfterShow) + 'static,
    ) -> Result<ListenerId> {
        Ok(self.panel_mut(id)?.after_show.subscribe(listener))
    }

    pub fn on_after_close(
        &mut self,
        id: &PanelId,
        listener: impl FnMut(&AfterClose) + 'static,
    ) -> Result<ListenerId> {
        Ok(self.panel_mut(id)?.after_close.subscribe(listener))
    }

    /// Remove a listener from a panel; `Ok(false)` if it was not subscribed
    pub fn unsubscribe(&mut self, id: &PanelId, listener: ListenerId) -> Result<bool> {
        let panel = self.panel_mut(id)?;
        Ok(panel.before_close.unsubscribe(listener)
            || panel.after_show.unsubscribe(listener)
            || panel.after_close.unsubscribe(listener))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn position(&self, id: &PanelId) -> Result<usize> {
        self.registry.position(id).ok_or_else(|| {
            tracing::warn!(panel = %id, "Operation on unregistered panel");
            PanelError::UnknownPanel(id.clone())
        })
    }

    fn panel_mut(&mut self, id: &PanelId) -> Result<&mut Panel> {
        let pos = self.position(id)?;
        Ok(self.registry.get_mut(pos))
    }

    fn generate_id(&mut self) -> PanelId {
        loop {
            self.generated_ids += 1;
            let id = PanelId::new(format!("panel-{}", self.generated_ids));
            if !self.registry.contains(&id) {
                return id;
            }
        }
    }

    /// Pack draw indices and assign interactivity
    ///
    /// `non_modal` and `modal` list registry positions bottom to top. Non-modal
    /// panels are active only when `modal` is empty; of the modal panels only
    /// the last one is active.
    fn restack(&mut self, non_modal: &[usize], modal: &[usize]) {
        let base = self.config.base_index;
        let blocked = !modal.is_empty();

        for (offset, &pos) in non_modal.iter().enumerate() {
            self.place(pos, base + offset as DrawIndex, !blocked);
        }

        let modal_base = base + non_modal.len() as DrawIndex;
        let top = modal.len().saturating_sub(1);
        for (offset, &pos) in modal.iter().enumerate() {
            self.place(pos, modal_base + offset as DrawIndex, offset == top);
        }
    }

    fn place(&mut self, pos: usize, draw_index: DrawIndex, active: bool) {
        let panel = self.registry.get_mut(pos);
        let previous = panel.draw_index();
        panel.place(draw_index, active);
        if previous != Some(draw_index) {
            self.presentation.set_draw_index(panel.handle(), draw_index);
        }
    }

    /// Hide the backdrop once no shown panel remains
    fn release_backdrop(&mut self) {
        if self.backdrop_visible && !self.registry.has_available() {
            self.backdrop.hide();
            self.backdrop_visible = false;
        }
    }

    fn trace_snapshot(&self) -> Option<StackSnapshot> {
        tracing::enabled!(target: "stack", tracing::Level::DEBUG).then(|| self.snapshot())
    }

    fn trace_restack(&self, op: &'static str, id: &PanelId, before: Option<StackSnapshot>) {
        let Some(before) = before else {
            return;
        };
        if let Some(diff) = before.diff(&self.snapshot()) {
            tracing::debug!(target: "stack", op, panel = %id, "{}", diff);
        }
    }
}
