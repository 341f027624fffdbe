//! The set of live panels for one presentation context

use super::panel::{Panel, PanelId};

/// Insertion-ordered collection of registered panels
///
/// Group queries return positions into the registry so the manager can
/// rearrange panels in place. Positions stay valid until the next insert or
/// remove.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }

    pub fn find(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Panels that are shown (active or disabled)
    pub fn available(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(|p| p.is_available())
    }

    pub fn has_available(&self) -> bool {
        self.available().next().is_some()
    }

    pub fn has_available_modal(&self) -> bool {
        self.available().any(|p| p.is_modal())
    }

    /// Positions of available panels of one kind, excluding `excluding`,
    /// ordered by draw index ascending
    pub fn group(&self, modal: bool, excluding: Option<&PanelId>) -> Vec<usize> {
        let mut group: Vec<usize> = self
            .panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_available() && p.is_modal() == modal)
            .filter(|(_, p)| Some(p.id()) != excluding)
            .map(|(pos, _)| pos)
            .collect();
        // Stable: ties keep registration order
        group.sort_by_key(|&pos| self.panels[pos].draw_index());
        group
    }

    /// Available panel ids from bottom to top
    pub fn stack(&self) -> Vec<PanelId> {
        let mut stack = self.group(false, None);
        stack.extend(self.group(true, None));
        stack
            .into_iter()
            .map(|pos| self.panels[pos].id().clone())
            .collect()
    }

    pub(crate) fn get(&self, pos: usize) -> &Panel {
        &self.panels[pos]
    }

    pub(crate) fn get_mut(&mut self, pos: usize) -> &mut Panel {
        &mut self.panels[pos]
    }

    pub(crate) fn insert(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub(crate) fn remove(&mut self, pos: usize) -> Panel {
        self.panels.remove(pos)
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Panel> {
        self.panels.drain(..)
    }
}
