//! Scenario runner: replays a YAML panel session and prints the stack

mod cli;

use anyhow::Result;
use clap::Parser;

use panelstack::config::StackConfig;
use panelstack::host::{BackdropLog, PresentationLog};
use panelstack::keymap::{load_default_keymap, Keymap};
use panelstack::scenario::Scenario;
use panelstack::tracing::StackSnapshot;
use panelstack::PanelManager;

use cli::CliArgs;

fn main() -> Result<()> {
    panelstack::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => StackConfig::load_from(path)?,
        None => StackConfig::load(),
    };
    if args.save_config {
        config.save()?;
    }
    let keymap = Keymap::with_bindings(load_default_keymap());
    let scenario = Scenario::load(&args.scenario)?;

    let mut manager = PanelManager::new(config, PresentationLog::new(), BackdropLog::default());

    if args.verbose {
        // Replay one step at a time so the stack can be printed in between
        for (index, step) in scenario.steps.iter().enumerate() {
            let single = Scenario {
                steps: vec![step.clone()],
            };
            let report = single.replay(&mut manager, &keymap)?;
            if let Some(report) = report.first() {
                println!("#{} {} -> {:?}", index + 1, report.step, report.cmd);
            }
            print_stack(&manager.snapshot());
        }
    } else {
        scenario.replay(&mut manager, &keymap)?;
    }

    let snapshot = manager.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        if args.verbose {
            println!("== final");
        }
        print_stack(&snapshot);
    }

    Ok(())
}

/// Print shown panels top to bottom, then hidden ones
fn print_stack(snapshot: &StackSnapshot) {
    let shown = snapshot.stack();
    if shown.is_empty() {
        println!("  (no panels shown)");
    }
    for panel in shown.iter().rev() {
        println!(
            "  {:>6}  {:<16} {:<9} {}",
            panel.draw_index.unwrap_or_default(),
            panel.id,
            if panel.modal { "modal" } else { "non-modal" },
            panel.state
        );
    }
    for panel in snapshot.panels.iter().filter(|p| p.draw_index.is_none()) {
        println!("  {:>6}  {:<16} {:<9} {}", "-", panel.id, "", panel.state);
    }
    println!(
        "  backdrop: {}",
        if snapshot.backdrop_visible { "shown" } else { "hidden" }
    );
}
