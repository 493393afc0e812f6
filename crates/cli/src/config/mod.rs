pub mod generators;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stubsmith_core::Config;
use tracing::debug;

pub use generators::create_default_config;

use crate::utils::parse_classpath;

/// Discover the config file above `cwd` and apply command-line overrides
pub fn load_config(cwd: &Path, classpath: Option<&str>, output: Option<&str>) -> Result<Config> {
    let (mut config, path) = Config::discover(cwd)
        .with_context(|| format!("Failed to load configuration near {}", cwd.display()))?;

    match &path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    if let Some(classpath) = classpath {
        config.classpath = parse_classpath(classpath)
            .into_iter()
            .map(|root| anchor(cwd, root))
            .collect();
    }
    if let Some(output) = output {
        config.output_dir = anchor(cwd, PathBuf::from(output));
    }
    if path.is_none() {
        config.output_dir = anchor(cwd, config.output_dir);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn anchor(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { cwd.join(path) }
}
