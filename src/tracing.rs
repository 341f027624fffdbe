//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! stacking and state transition issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=stack=debug` - before/after diffs of every restack
//! - `RUST_LOG=panelstack::keymap=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/panelstack/logs/panelstack.log` with daily rotation.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DrawIndex, PanelId, PanelRegistry, PanelState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// debug level to `~/.config/panelstack/logs/panelstack.log`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panelstack.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Serializable view of the registry, used for diff logging and dumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackSnapshot {
    pub backdrop_visible: bool,
    /// In registration order
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelInfo {
    pub id: PanelId,
    pub modal: bool,
    pub closable: bool,
    pub state: PanelState,
    pub draw_index: Option<DrawIndex>,
}

impl StackSnapshot {
    pub fn capture(registry: &PanelRegistry, backdrop_visible: bool) -> Self {
        Self {
            backdrop_visible,
            panels: registry
                .iter()
                .map(|p| PanelInfo {
                    id: p.id().clone(),
                    modal: p.is_modal(),
                    closable: p.closable(),
                    state: p.state(),
                    draw_index: p.draw_index(),
                })
                .collect(),
        }
    }

    /// Shown panels ordered bottom to top
    pub fn stack(&self) -> Vec<&PanelInfo> {
        let mut shown: Vec<&PanelInfo> = self
            .panels
            .iter()
            .filter(|p| p.draw_index.is_some())
            .collect();
        shown.sort_by_key(|p| p.draw_index);
        shown
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StackSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for before in &self.panels {
            match other.panels.iter().find(|p| p.id == before.id) {
                None => changes.push(format!("{}: removed", before.id)),
                Some(after) => {
                    if before.state != after.state {
                        changes.push(format!("{}: {} → {}", before.id, before.state, after.state));
                    }
                    if before.draw_index != after.draw_index {
                        changes.push(format!(
                            "{}: z {} → {}",
                            before.id,
                            fmt_index(before.draw_index),
                            fmt_index(after.draw_index)
                        ));
                    }
                }
            }
        }
        for after in &other.panels {
            if !self.panels.iter().any(|p| p.id == after.id) {
                changes.push(format!("{}: added ({})", after.id, after.state));
            }
        }
        if self.backdrop_visible != other.backdrop_visible {
            let status = if other.backdrop_visible { "shown" } else { "hidden" };
            changes.push(format!("backdrop {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn fmt_index(index: Option<DrawIndex>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}
