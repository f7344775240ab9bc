use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::info;
use uc_loader_core::{LoaderConfig, config::CONFIG_FILE_NAMES};

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = match cwd {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to read current directory")?,
    };

    let config_path = root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!(
            "ℹ️  {} already exists, use --force to overwrite",
            config_path.display()
        );
        return Ok(());
    }

    LoaderConfig::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("✅ Created {}", config_path.display());
    println!("\n📌 Next steps:");
    println!("   Add scan roots to 'roots' and drop *.uc.js / *.uc.xul files into them");
    println!("   Run 'uc-loader scan' to see what was found");

    Ok(())
}
