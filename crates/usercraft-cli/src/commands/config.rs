//! Config command implementation.

use anyhow::Result;
use usercraft_config::UsercraftConfig;

pub fn show(config: &UsercraftConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
