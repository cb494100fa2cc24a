//! Config command implementation

use crate::{config::Config, config_path, Result};

/// Copy of `config` that is safe to print.
pub fn redacted(config: &Config) -> Config {
    let mut shown = config.clone();
    if !shown.authorization.is_empty() {
        shown.authorization = "<redacted>".to_string();
    }
    shown
}

/// Handle the config command
pub fn handle_config(config: &Config) -> Result<()> {
    println!("Config file: {}", config_path().display());
    println!("{}", serde_json::to_string_pretty(&redacted(config))?);
    Ok(())
}
