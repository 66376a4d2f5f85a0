use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use dock_manager::cli::{parse_command, CliArgs};
use dock_manager::config::DockConfig;
use dock_manager::model::{DockLayout, DockModel};
use dock_manager::update::update;

fn load_layout(args: &CliArgs) -> Result<DockLayout> {
    let Some(path) = &args.layout else {
        return Ok(dock_manager::demo::initial_layout());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse layout {}", path.display()))
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    dock_manager::tracing::init(args.verbose);

    let config = match &args.config {
        Some(path) => DockConfig::load_from(path),
        None => DockConfig::load(),
    };

    let layout = load_layout(&args)?;
    let mut model = DockModel::new(layout, config);

    for line in args.command_lines()? {
        let msg = parse_command(&line).with_context(|| format!("Invalid command {:?}", line))?;
        let before = Rc::clone(model.store.layout());
        match update(&mut model, msg) {
            Some(cmd) => {
                let layout_changed = !Rc::ptr_eq(&before, model.store.layout());
                println!("{:<40} -> {:?} (layout changed: {})", line, cmd, layout_changed);
            }
            None => println!("{:<40} -> no-op", line),
        }
    }

    if let Some(pane_id) = model.maximized_pane_id() {
        println!("maximized: {} ({})", pane_id, model.layout().pane_title(pane_id.as_str()));
    }
    if let Some(group_id) = &model.focused_group_id {
        println!("focused group: {}", group_id);
    }

    if args.json {
        let json = serde_json::to_string_pretty(model.layout())
            .context("Failed to serialize layout")?;
        println!("{}", json);
    } else {
        print!("{}", model.layout());
        let closed: Vec<&str> = model
            .layout()
            .closed_pane_ids()
            .into_iter()
            .map(|id| id.as_str())
            .collect();
        if !closed.is_empty() {
            println!("closed panes: {}", closed.join(", "));
        }
    }

    Ok(())
}
