//! Command-line argument parsing for the demo binary
//!
//! Commands are given as short lines, e.g.
//! - `close left-group pane-1`
//! - `move pane-3 right-top-group left-group 0`
//! - `resize root-split 30,70`
//! - `restore left-group pane-1 0 --no-activate`
//! - `maximize pane-5` / `restore-max` / `close-max`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::messages::{LayoutMsg, MaximizeMsg, Msg};
use crate::model::{NodeId, PaneId};
use crate::reducer::RestoreOptions;

/// Apply dock layout commands and print the resulting tree
#[derive(Parser, Debug)]
#[command(name = "dock-demo", version, about = "Dock layout engine demo")]
pub struct CliArgs {
    /// Commands to apply, in order (quote each one)
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<String>,

    /// Seed layout as JSON (defaults to the built-in sample workspace)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Read additional commands from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/dock-manager/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the final layout as JSON instead of a tree
    #[arg(long)]
    pub json: bool,

    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// All command lines: positional ones first, then the script file
    pub fn command_lines(&self) -> Result<Vec<String>> {
        let mut lines = self.commands.clone();
        if let Some(path) = &self.script {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            lines.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(String::from),
            );
        }
        Ok(lines)
    }
}

fn arg<'a>(words: &[&'a str], index: usize, name: &str) -> Result<&'a str> {
    words
        .get(index)
        .copied()
        .with_context(|| format!("missing <{}>", name))
}

fn index_arg(words: &[&str], index: usize, name: &str) -> Result<usize> {
    let raw = arg(words, index, name)?;
    raw.parse()
        .with_context(|| format!("<{}> must be a non-negative integer, got {:?}", name, raw))
}

/// Parse one command line into a message
pub fn parse_command(line: &str) -> Result<Msg> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, _)) = words.split_first() else {
        bail!("empty command");
    };

    let msg = match verb {
        "activate" => Msg::Layout(LayoutMsg::SetActivePane {
            group_id: NodeId::from(arg(&words, 1, "group")?),
            pane_id: PaneId::from(arg(&words, 2, "pane")?),
        }),
        "close" => Msg::Layout(LayoutMsg::ClosePane {
            group_id: NodeId::from(arg(&words, 1, "group")?),
            pane_id: PaneId::from(arg(&words, 2, "pane")?),
        }),
        "reorder" => Msg::Layout(LayoutMsg::ReorderPane {
            group_id: NodeId::from(arg(&words, 1, "group")?),
            from_index: index_arg(&words, 2, "from")?,
            to_index: index_arg(&words, 3, "to")?,
        }),
        "move" => Msg::Layout(LayoutMsg::MovePane {
            pane_id: PaneId::from(arg(&words, 1, "pane")?),
            from_group_id: NodeId::from(arg(&words, 2, "from-group")?),
            to_group_id: NodeId::from(arg(&words, 3, "to-group")?),
            to_index: index_arg(&words, 4, "index")?,
        }),
        "restore" => {
            let rest = &words[3.min(words.len())..];
            let activate = !rest.contains(&"--no-activate");
            let index = rest
                .iter()
                .find(|w| !w.starts_with("--"))
                .map(|raw| {
                    raw.parse::<usize>()
                        .with_context(|| format!("<index> must be an integer, got {:?}", raw))
                })
                .transpose()?;
            Msg::Layout(LayoutMsg::RestorePane {
                group_id: NodeId::from(arg(&words, 1, "group")?),
                pane_id: PaneId::from(arg(&words, 2, "pane")?),
                options: RestoreOptions { index, activate },
            })
        }
        "resize" => {
            let raw = arg(&words, 2, "sizes")?;
            let sizes = raw
                .split(',')
                .map(|s| {
                    s.trim()
                        .parse::<f64>()
                        .with_context(|| format!("bad size {:?}", s))
                })
                .collect::<Result<Vec<_>>>()?;
            Msg::Layout(LayoutMsg::ResizeSplit {
                split_id: NodeId::from(arg(&words, 1, "split")?),
                sizes,
            })
        }
        "focus" => Msg::Layout(LayoutMsg::FocusGroup(NodeId::from(arg(&words, 1, "group")?))),
        "maximize" => Msg::Maximize(MaximizeMsg::Maximize(PaneId::from(arg(&words, 1, "pane")?))),
        "restore-max" => Msg::Maximize(MaximizeMsg::ExitRestore),
        "close-max" => Msg::Maximize(MaximizeMsg::ExitClose),
        other => bail!("unknown command {:?}", other),
    };
    Ok(msg)
}
