use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use stubsmith_core::config::CONFIG_FILE_NAMES;

use crate::config::create_default_config;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(path) => PathBuf::from(path),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .with_context(|| format!("Directory not found: {}", project_root.display()))?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config = create_default_config()?;
    fs::write(&config_path, config)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Next steps:");
    println!("   • List your classes under \"service_classes\"");
    println!("   • Run: stubsmith scaffold");

    Ok(())
}
