//! Configurable global key handling for panels
//!
//! Maps keystrokes delivered by the host to panel commands:
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup(KeyContext) → Command → Vec<PanelMsg>
//! ```
//!
//! Defaults ship as embedded YAML; users override them with
//! `~/.config/panelstack/keymap.yaml`.

mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{default_bindings, load_default_keymap, merge_bindings};
pub use keymap::{Keybinding, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
