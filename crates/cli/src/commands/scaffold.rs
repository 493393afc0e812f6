use anyhow::{Context, Result, bail};
use std::env;
use stubsmith_core::{BatchRunner, Classpath, ServiceAnalyzer};
use tracing::{debug, info};

use crate::config::load_config;
use crate::display::print_batch_report;

pub fn scaffold_command(
    classes: &[String],
    classpath: Option<&str>,
    output: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, classpath, output)?;

    let class_names = if classes.is_empty() {
        config.service_classes.clone()
    } else {
        classes.to_vec()
    };

    if class_names.is_empty() {
        bail!("No service classes given. Pass class names or set service_classes in .stubsmith.json");
    }
    if config.classpath.is_empty() {
        bail!("No classpath roots given. Use --classpath or set classpath in .stubsmith.json");
    }

    debug!("Classpath: {:?}", config.classpath);
    info!(
        "Scaffolding {} classes into {}",
        class_names.len(),
        config.output_dir.display()
    );

    let classes = Classpath::from_roots(&config.classpath);
    let analyzer = ServiceAnalyzer::new(&classes).with_markers(config.markers.clone());
    let runner = BatchRunner::new(analyzer, &config.output_dir).with_dry_run(dry_run);

    let report = runner.run(class_names.as_slice());
    print_batch_report(&report);

    if report.has_failures() {
        bail!("{} of {} classes failed", report.failed(), report.classes.len());
    }
    Ok(())
}
