use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use uc_loader_core::Scanner;

use crate::display::print_scan_report;
use crate::utils::load_config;

pub fn scan_command(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let scanner = Scanner::from_config(&config);
    debug!("Scanning roots: {:?}", scanner.roots());

    let report = scanner.scan();

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        println!("{output}");
    } else {
        let units: Vec<_> = report.units.iter().collect();
        print_scan_report(scanner.roots(), &units, &report.warnings);
    }

    Ok(())
}
