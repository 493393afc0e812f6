use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use stubsmith_core::{StubComposer, StubInfo};

pub fn stub_command(stub_json: &str, output: Option<&str>) -> Result<()> {
    let path = Path::new(stub_json);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stub description {}", path.display()))?;
    let info: StubInfo = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid stub description {}", path.display()))?;

    let composer = StubComposer::new();
    match output {
        Some(output_dir) => {
            let written = composer
                .write_to(&info, Path::new(output_dir))
                .with_context(|| format!("Failed to write stub {}", info.class_name))?;
            println!("✅ Created stub: {}", written.display());
        }
        None => print!("{}", composer.compose(&info)),
    }

    Ok(())
}
