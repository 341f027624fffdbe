//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// A mapping from one keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to fire
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }
}

/// Stores all keybindings and resolves keystrokes against a context
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; several bindings may share a keystroke
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Find the command bound to a keystroke in this context
    ///
    /// Conditional bindings whose conditions hold win over unconditional
    /// ones; within each kind the first added binding wins.
    pub fn lookup(&self, keystroke: Keystroke, ctx: &KeyContext) -> Option<Command> {
        let indices = self.lookup.get(&keystroke)?;

        let conditional = indices.iter().find_map(|&idx| {
            let binding = &self.bindings[idx];
            match &binding.when {
                Some(conditions) if Condition::evaluate_all(conditions, ctx) => {
                    Some(binding.command)
                }
                _ => None,
            }
        });

        conditional.or_else(|| {
            indices
                .iter()
                .map(|&idx| &self.bindings[idx])
                .find(|binding| binding.when.is_none())
                .map(|binding| binding.command)
        })
    }
}
