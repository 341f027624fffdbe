//! panelstack - stacking manager for overlapping floating panels
//!
//! Decides which panel is frontmost, which panels are interactive, and the
//! draw order of every panel, as panels (modal or not) are opened, hidden,
//! raised and closed. Rendering stays with the host, behind the
//! [`Presentation`] and [`Backdrop`] traits.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod host;
pub mod keymap;
pub mod manager;
pub mod messages;
pub mod model;
pub mod notification;
pub mod scenario;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::StackConfig;
pub use error::PanelError;
pub use host::{Backdrop, Presentation};
pub use manager::{CloseOutcome, PanelManager};
pub use messages::PanelMsg;
pub use model::{Panel, PanelConfig, PanelId, PanelKind, PanelState};
