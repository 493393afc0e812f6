use crate::{
    analyzer::Markers,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAMES: &[&str] = &[".stubsmith.json", "stubsmith.json"];
pub const DEFAULT_OUTPUT_DIR: &str = "generated/stubsmith/tests";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Fully-qualified names of the classes to scaffold
    #[serde(default)]
    pub service_classes: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Source and descriptor roots, searched in order
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
    #[serde(default)]
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_classes: Vec::new(),
            output_dir: default_output_dir(),
            classpath: Vec::new(),
            markers: Markers::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or the defaults
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Using config file {:?}", path);
                let config = Self::load_from_file(&path)?;
                let base = path.parent().unwrap_or(start_path).to_path_buf();
                Ok((config.relative_to(&base), Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Anchor relative paths at `base`, the directory holding the config file
    pub fn relative_to(mut self, base: &Path) -> Self {
        let anchor = |path: PathBuf| if path.is_absolute() { path } else { base.join(path) };
        self.output_dir = anchor(self.output_dir);
        self.classpath = self.classpath.into_iter().map(anchor).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::ConfigError("output_dir must not be empty".to_string()));
        }
        if self.markers.service.iter().all(|marker| marker.trim().is_empty()) {
            return Err(Error::ConfigError(
                "markers.service must name at least one annotation".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{ "service_classes": ["com.example.UserService"] }"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(config.classpath.is_empty());
        assert_eq!(config.markers, Markers::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_load_and_find_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            service_classes: vec!["com.example.UserService".to_string()],
            classpath: vec![PathBuf::from("src/main/java")],
            ..Default::default()
        };
        config.save_to_file(&temp.path().join(".stubsmith.json")).unwrap();

        let nested = temp.path().join("src/main/java/com/example");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::find_config_file(&nested).unwrap();
        assert_eq!(found, temp.path().join(".stubsmith.json"));

        let (loaded, path) = Config::discover(&nested).unwrap();
        assert_eq!(path, Some(found));
        assert_eq!(loaded.service_classes, config.service_classes);
        assert_eq!(loaded.classpath, vec![temp.path().join("src/main/java")]);
        assert_eq!(loaded.output_dir, temp.path().join(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stubsmith.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_service_markers() {
        let mut config = Config::default();
        config.markers.service = vec![" ".to_string()];
        assert!(config.validate().is_err());
    }
}
