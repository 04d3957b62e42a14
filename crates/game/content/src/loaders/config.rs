//! Decoder configuration loader.

use std::path::Path;

use gamestate_core::DecoderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for decoder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`DecoderConfig`] from a TOML file. Missing keys keep their
    /// defaults.
    pub fn load(path: &Path) -> LoadResult<DecoderConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<DecoderConfig> {
        let config: DecoderConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.transition_status_min > config.transition_status_max {
            anyhow::bail!(
                "transition_status_min ({}) exceeds transition_status_max ({})",
                config.transition_status_min,
                config.transition_status_max
            );
        }
        Ok(config)
    }
}
