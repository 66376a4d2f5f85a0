//! Dock Manager - Elm-style docking layout engine
//!
//! This crate maintains a tree of resizable splits and tabbed pane groups and
//! transforms it through a small set of commands (activate, close, reorder,
//! move, restore, resize, maximize) while keeping the tree valid.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod demo;
pub mod messages;
pub mod model;
pub mod reducer;
pub mod tracing;
pub mod update;
pub mod validate;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use messages::Msg;
pub use model::{DockLayout, DockModel};
