//! Composers turning analysis results into Kotlin source files

pub mod scaffold;
pub mod stub;

pub use scaffold::TestScaffoldComposer;
pub use stub::StubComposer;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// `<output_dir>/<package path>/<file_stem>.kt`
pub fn source_path(output_dir: &Path, package: &str, file_stem: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{file_stem}.kt"));
    path
}

/// Write fully composed text, creating parent directories
pub(crate) fn write_source(output_dir: &Path, package: &str, file_stem: &str, text: &str) -> Result<PathBuf> {
    let path = source_path(output_dir, package, file_stem);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, text)?;
    info!("Wrote {}", path.display());
    Ok(path)
}
