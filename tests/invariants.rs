//! Property tests: random operation sequences keep the stack consistent
//!
//! Every sequence is checked twice: against the structural invariants in
//! `common::assert_invariants`, and against a small reference model that
//! tracks recency order per group.

mod common;

use std::collections::{BTreeMap, BTreeSet};

use common::{assert_invariants, id, test_manager, TestManager};
use panelstack::model::{PanelConfig, PanelId};
use panelstack::notification::Propagation;
use proptest::prelude::*;

const SLOTS: usize = 5;

#[derive(Debug, Clone)]
enum Op {
    Open { slot: usize, modal: bool, backdrop: bool },
    Show(usize),
    Hide(usize),
    Close(usize),
    Front(usize),
    Veto(usize),
    CloseAll,
}

fn op() -> impl Strategy<Value = Op> {
    let slot = 0..SLOTS;
    prop_oneof![
        4 => (slot.clone(), any::<bool>(), any::<bool>())
            .prop_map(|(slot, modal, backdrop)| Op::Open { slot, modal, backdrop }),
        2 => slot.clone().prop_map(Op::Show),
        2 => slot.clone().prop_map(Op::Hide),
        2 => slot.clone().prop_map(Op::Close),
        2 => slot.clone().prop_map(Op::Front),
        1 => slot.prop_map(Op::Veto),
        1 => Just(Op::CloseAll),
    ]
}

fn name(slot: usize) -> PanelId {
    id(&format!("p{}", slot))
}

/// Recency-ordered reference of what should be on screen
#[derive(Default)]
struct Model {
    /// Registered panels and whether they are modal
    registered: BTreeMap<PanelId, bool>,
    vetoed: BTreeSet<PanelId>,
    non_modal: Vec<PanelId>,
    modal: Vec<PanelId>,
}

impl Model {
    fn group(&mut self, panel: &PanelId) -> &mut Vec<PanelId> {
        if self.registered[panel] {
            &mut self.modal
        } else {
            &mut self.non_modal
        }
    }

    fn is_shown(&self, panel: &PanelId) -> bool {
        self.non_modal.contains(panel) || self.modal.contains(panel)
    }

    fn raise(&mut self, panel: &PanelId) {
        let group = self.group(panel);
        group.retain(|p| p != panel);
        group.push(panel.clone());
    }

    fn take_down(&mut self, panel: &PanelId) {
        self.non_modal.retain(|p| p != panel);
        self.modal.retain(|p| p != panel);
    }

    fn stack(&self) -> Vec<PanelId> {
        self.non_modal.iter().chain(&self.modal).cloned().collect()
    }

    fn apply(&mut self, op: &Op, manager: &mut TestManager) {
        match *op {
            Op::Open { slot, modal, backdrop } => {
                let panel = name(slot);
                let config = if modal {
                    PanelConfig::modal()
                } else {
                    PanelConfig::non_modal().with_backdrop(backdrop)
                };
                let result = manager.open(config.with_id(panel.clone()));
                if self.registered.contains_key(&panel) {
                    assert!(result.is_err());
                } else {
                    assert_eq!(result.as_ref(), Ok(&panel));
                    self.registered.insert(panel.clone(), modal);
                    self.raise(&panel);
                }
            }
            Op::Show(slot) => {
                let panel = name(slot);
                let result = manager.show(&panel);
                assert_eq!(result.is_ok(), self.registered.contains_key(&panel));
                if result.is_ok() {
                    self.raise(&panel);
                }
            }
            Op::Hide(slot) | Op::Close(slot) => {
                let panel = name(slot);
                let destroy = matches!(op, Op::Close(_));
                let result = manager.close(&panel, destroy);
                if !self.registered.contains_key(&panel) {
                    assert!(result.is_err());
                    return;
                }
                let outcome = result.expect("registered panel");
                let reached = destroy || self.is_shown(&panel);
                if reached && self.vetoed.contains(&panel) {
                    assert!(!outcome.is_closed());
                    return;
                }
                assert!(outcome.is_closed());
                self.take_down(&panel);
                if destroy {
                    self.registered.remove(&panel);
                    self.vetoed.remove(&panel);
                }
            }
            Op::Front(slot) => {
                let panel = name(slot);
                let result = manager.bring_to_front(&panel);
                let top = self.modal.last().or(self.non_modal.last()).cloned();
                let expect_ok = self.is_shown(&panel)
                    && (top.as_ref() == Some(&panel) || self.modal.is_empty());
                assert_eq!(result.is_ok(), expect_ok, "{:?}", result);
                if expect_ok {
                    self.raise(&panel);
                }
            }
            Op::Veto(slot) => {
                let panel = name(slot);
                let result = manager.on_before_close(&panel, |_| Propagation::Veto);
                assert_eq!(result.is_ok(), self.registered.contains_key(&panel));
                if result.is_ok() {
                    self.vetoed.insert(panel);
                }
            }
            Op::CloseAll => {
                assert_eq!(manager.close_all(), self.registered.len());
                *self = Model::default();
            }
        }
    }
}

proptest! {
    #[test]
    fn random_sequences_keep_stack_invariants(ops in prop::collection::vec(op(), 1..60)) {
        let mut manager = test_manager();
        let mut model = Model::default();

        for op in &ops {
            model.apply(op, &mut manager);
            assert_invariants(&manager);
            prop_assert_eq!(manager.stack(), model.stack());
            prop_assert_eq!(manager.len(), model.registered.len());
        }
    }

    #[test]
    fn closing_top_modal_activates_previous_one(count in 2usize..6) {
        let mut manager = test_manager();
        let modals: Vec<PanelId> = (0..count)
            .map(|i| manager.open(PanelConfig::modal().with_id(name(i))).unwrap())
            .collect();

        for (i, modal) in modals.iter().enumerate().rev() {
            prop_assert!(manager.close(modal, true).unwrap().is_closed());
            let front = manager.frontmost().map(|p| p.id().clone());
            prop_assert_eq!(front, i.checked_sub(1).map(|j| modals[j].clone()));
            assert_invariants(&manager);
        }
        prop_assert!(!manager.backdrop_visible());
    }
}
