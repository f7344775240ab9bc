use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use tracing::{debug, warn};
use uc_loader_core::{Registry, Scanner};

use crate::display::print_scan_report;
use crate::utils::load_config;

/// Rescan on every change below the scan roots
///
/// Every rescan builds a fresh registry; units from earlier scans are never
/// patched in place.
pub fn watch_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let scanner = Scanner::from_config(&config);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;

    let mut watched = 0;
    for root in scanner.roots() {
        if !root.path.exists() {
            debug!("Not watching missing root {:?}", root.path);
            continue;
        }
        let mode = if root.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&root.path, mode)
            .with_context(|| format!("Failed to watch {}", root.path.display()))?;
        watched += 1;
    }

    if watched == 0 {
        println!("ℹ️  None of the configured scan roots exist, nothing to watch");
        return Ok(());
    }

    print_registry(&scanner, &Registry::from_report(scanner.scan()));
    println!("\n👀 Watching {watched} root(s), press Ctrl-C to stop");

    while let Ok(event) = rx.recv() {
        let changed = match event {
            Ok(event) => !matches!(event.kind, EventKind::Access(_)),
            Err(e) => {
                warn!("Watch error: {}", e);
                false
            }
        };
        // Coalesce bursts of events into one rescan
        while rx.try_recv().is_ok() {}

        if changed {
            println!("\n🔄 Change detected, rescanning");
            print_registry(&scanner, &Registry::from_report(scanner.scan()));
        }
    }

    Ok(())
}

fn print_registry(scanner: &Scanner, registry: &Registry) {
    let units: Vec<_> = registry.iter().map(|unit| &**unit).collect();
    print_scan_report(scanner.roots(), &units, registry.warnings());
}
