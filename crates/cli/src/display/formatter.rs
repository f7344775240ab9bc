use uc_loader_core::{OverlayDocument, ScanRoot, ScanWarning, ScriptKind, ScriptUnit};

/// One-line summary of a unit
pub fn format_unit(unit: &ScriptUnit) -> String {
    let icon = match unit.kind() {
        ScriptKind::Executable => "⚡",
        ScriptKind::Overlay => "🧩",
    };
    let mut line = format!("{} {} ({})", icon, unit.relative_path(), unit.kind());
    if unit.display_name() != unit.file_name() {
        line.push_str(&format!(" - {}", unit.display_name()));
    }
    line
}

/// Include/exclude rules of a unit, one per line, indented
pub fn format_rules(unit: &ScriptUnit) -> Vec<String> {
    let metadata = unit.metadata();
    let mut lines = Vec::new();

    if metadata.include.is_empty() {
        lines.push("   ✅ include: main (default)".to_string());
    }
    lines.extend(
        metadata
            .include
            .iter()
            .map(|pattern| format!("   ✅ include: {pattern}")),
    );
    lines.extend(
        metadata
            .exclude
            .iter()
            .map(|pattern| format!("   🚫 exclude: {pattern}")),
    );
    lines.extend(
        metadata
            .description
            .iter()
            .map(|text| format!("   📝 {text}")),
    );
    lines
}

pub fn print_scan_report(roots: &[ScanRoot], units: &[&ScriptUnit], warnings: &[ScanWarning]) {
    println!("📂 Scan roots:");
    for root in roots {
        println!(
            "   • {}{}",
            root.path.display(),
            if root.recursive { " (recursive)" } else { "" }
        );
    }
    println!("{}", "=".repeat(80));

    if units.is_empty() {
        println!("No scripts found");
    }
    for unit in units {
        println!("{}", format_unit(unit));
        for line in format_rules(unit) {
            println!("{line}");
        }
    }

    let executable = units
        .iter()
        .filter(|u| u.kind() == ScriptKind::Executable)
        .count();
    println!(
        "\n📦 {} executable, {} overlay",
        executable,
        units.len() - executable
    );
    print_warnings(warnings);
}

pub fn print_warnings(warnings: &[ScanWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n⚠️  {} entr{} skipped:", warnings.len(), if warnings.len() == 1 { "y" } else { "ies" });
    for warning in warnings {
        println!("   • {warning}");
    }
}

/// Print what the host was asked to execute and load for `url`
pub fn print_injection(url: &str, executed: &[String], overlays: &[OverlayDocument]) {
    println!("🎯 Target: {url}");
    println!("{}", "=".repeat(80));

    if executed.is_empty() && overlays.is_empty() {
        println!("No scripts apply");
        return;
    }

    if !executed.is_empty() {
        println!("\n⚡ Executed ({}):", executed.len());
        for location in executed {
            println!("   • {location}");
        }
    }

    for overlay in overlays {
        println!("\n🧩 Overlay document ({} unit(s)):", overlay.len());
        for directive in overlay.directives() {
            println!("   {directive}");
        }
        println!("   {}", overlay.to_data_uri());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use uc_loader_core::MetadataFields;

    fn unit(root: &Path, name: &str, kind: ScriptKind, metadata: MetadataFields) -> ScriptUnit {
        ScriptUnit::new(root.join(name), root, kind, metadata, None).unwrap()
    }

    #[test]
    fn test_format_unit() {
        let root = std::env::temp_dir();
        let plain = unit(&root, "a.uc.js", ScriptKind::Executable, MetadataFields::default());
        assert_eq!(format_unit(&plain), "⚡ a.uc.js (executable)");

        let named = unit(
            &root,
            "b.uc.xul",
            ScriptKind::Overlay,
            MetadataFields {
                name: vec!["Sidebar".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(format_unit(&named), "🧩 b.uc.xul (overlay) - Sidebar");
    }

    #[test]
    fn test_format_rules() {
        let root = std::env::temp_dir();
        let default_rules = unit(&root, "a.uc.js", ScriptKind::Executable, MetadataFields::default());
        assert_eq!(format_rules(&default_rules), vec!["   ✅ include: main (default)"]);

        let metadata = MetadataFields {
            include: vec!["chrome://x/*".to_string()],
            exclude: vec!["about:*".to_string()],
            ..Default::default()
        };
        let ruled = unit(&root, "c.uc.js", ScriptKind::Executable, metadata);
        assert_eq!(
            format_rules(&ruled),
            vec!["   ✅ include: chrome://x/*", "   🚫 exclude: about:*"]
        );
    }
}
