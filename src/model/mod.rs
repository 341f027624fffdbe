//! Panel state model
//!
//! - `panel`: identity, configuration and stacking slot of one panel
//! - `registry`: the set of live panels, queryable by modal/non-modal group

pub mod panel;
pub mod registry;

pub use panel::{Button, DrawIndex, Panel, PanelConfig, PanelId, PanelKind, PanelState};
pub use registry::PanelRegistry;
