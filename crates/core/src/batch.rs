//! Sequential analyze-then-compose over many service classes

use crate::{
    analyzer::ServiceAnalyzer,
    compose::{TestScaffoldComposer, source_path},
    error::Result,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassOutcome {
    Written { path: PathBuf },
    /// Dry run: composed but not written
    Composed { path: PathBuf, source: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassReport {
    pub class_name: String,
    #[serde(flatten)]
    pub outcome: ClassOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub classes: Vec<ClassReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.classes.len() - self.failed()
    }

    pub fn failed(&self) -> usize {
        self.classes
            .iter()
            .filter(|report| matches!(report.outcome, ClassOutcome::Failed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

pub struct BatchRunner<'a> {
    analyzer: ServiceAnalyzer<'a>,
    composer: TestScaffoldComposer,
    output_dir: PathBuf,
    dry_run: bool,
}

impl<'a> BatchRunner<'a> {
    pub fn new(analyzer: ServiceAnalyzer<'a>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            analyzer,
            composer: TestScaffoldComposer::new(),
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every class in order. A failing class is logged and reported
    /// without stopping the others, and leaves no file behind.
    pub fn run<S: AsRef<str>>(&self, class_names: &[S]) -> BatchReport {
        let mut report = BatchReport::default();

        for class_name in class_names {
            let class_name = class_name.as_ref();
            let outcome = match self.process(class_name) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Failed to generate test scaffold for {}: {}", class_name, e);
                    ClassOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.classes.push(ClassReport {
                class_name: class_name.to_string(),
                outcome,
            });
        }

        info!(
            "Generated {} test scaffold(s), {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    fn process(&self, class_name: &str) -> Result<ClassOutcome> {
        let info = self.analyzer.analyze(class_name)?;
        if self.dry_run {
            let path = source_path(&self.output_dir, &info.package_name, &info.test_class_name);
            return Ok(ClassOutcome::Composed {
                path,
                source: self.composer.compose(&info),
            });
        }
        let path = self.composer.write_to(&info, &self.output_dir)?;
        Ok(ClassOutcome::Written { path })
    }
}
