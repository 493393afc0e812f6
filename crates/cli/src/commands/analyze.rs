use anyhow::{Context, Result};
use std::env;
use stubsmith_core::{Classpath, ServiceAnalyzer};
use tracing::debug;

use crate::config::load_config;
use crate::display::format_analysis;

pub fn analyze_command(class_name: &str, classpath: Option<&str>, json: bool) -> Result<()> {
    debug!("Analyzing class: {}", class_name);

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, classpath, None)?;

    let classes = Classpath::from_roots(&config.classpath);
    let analyzer = ServiceAnalyzer::new(&classes).with_markers(config.markers);
    let info = analyzer
        .analyze(class_name)
        .with_context(|| format!("Failed to analyze {class_name}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", format_analysis(&info));
    }

    Ok(())
}
