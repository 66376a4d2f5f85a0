//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! reducer decisions, tree repairs and layout validation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable (or `-v` on the demo binary):
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,dock::validate=warn` - scoped filtering
//! - `RUST_LOG=dock_manager::reducer=trace` - every no-op and its reason
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dock-manager/logs/dock-manager.log` with
//! daily rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};
use crate::model::DockModel;

/// Console level when RUST_LOG is unset, by number of `-v` flags
fn default_console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing subscriber with console (stderr) and file logging.
///
/// `RUST_LOG` always wins over `verbosity` for the console layer.
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_console_directive(verbosity)));

    // stdout carries the demo output, so diagnostics go to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
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
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Flattened view of the tab groups and maximize state, for diffing
/// before/after an update
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub groups: Vec<GroupInfo>,
    pub maximized: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupInfo {
    pub id: String,
    pub panes: Vec<String>,
    pub active: Option<String>,
}

impl LayoutSnapshot {
    pub fn from_model(model: &DockModel) -> Self {
        let mut groups = Vec::new();
        model.layout().root.for_each_group(&mut |group| {
            groups.push(GroupInfo {
                id: group.id.to_string(),
                panes: group.pane_ids.iter().map(ToString::to_string).collect(),
                active: group.active_pane_id.as_ref().map(ToString::to_string),
            })
        });
        Self {
            groups,
            maximized: model.maximized_pane_id().map(ToString::to_string),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for before in &self.groups {
            match other.groups.iter().find(|g| g.id == before.id) {
                None => changes.push(format!("{}: removed", before.id)),
                Some(after) => {
                    if before.panes != after.panes {
                        changes.push(format!(
                            "{}: [{}] → [{}]",
                            before.id,
                            before.panes.join(", "),
                            after.panes.join(", ")
                        ));
                    }
                    if before.active != after.active {
                        changes.push(format!(
                            "{}: active {} → {}",
                            before.id,
                            before.active.as_deref().unwrap_or("-"),
                            after.active.as_deref().unwrap_or("-")
                        ));
                    }
                }
            }
        }
        for after in &other.groups {
            if !self.groups.iter().any(|g| g.id == after.id) {
                changes.push(format!("{}: added [{}]", after.id, after.panes.join(", ")));
            }
        }

        if self.maximized != other.maximized {
            changes.push(format!(
                "maximized: {} → {}",
                self.maximized.as_deref().unwrap_or("-"),
                other.maximized.as_deref().unwrap_or("-")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
