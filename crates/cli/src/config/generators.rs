use anyhow::Result;
use serde_json::{Value, json};
use stubsmith_core::Config;

/// Default configuration written by `stubsmith init`
pub fn create_default_config() -> Result<String> {
    let mut config = serde_json::to_value(Config::default())?;

    if let Value::Object(map) = &mut config {
        map.insert("classpath".to_string(), json!(["src/main/java"]));
    }

    Ok(serde_json::to_string_pretty(&config)?)
}
