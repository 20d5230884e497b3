//! Optional JSON configuration file.

use algokit::{CodecConfig, SortAlgorithm};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings read from `--config`. Every field may be omitted.
///
/// ```json
/// { "sort": "quick", "codec": { "delimiter": "|", "terminator": ":" } }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub codec: CodecConfig,
    pub sort: SortAlgorithm,
}

impl CliConfig {
    /// Loads `path`, or the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}
