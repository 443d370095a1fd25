use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use streamgen_engine::config::CONFIG_FILE_NAME;
use streamgen_engine::{ExpandOptions, StreamgenConfig};

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Load the configuration the CLI should use.
///
/// An explicit `--config` path must exist. Without one, `./streamgen.toml`
/// is used when present and the defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<(StreamgenConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = StreamgenConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let default_path = PathBuf::from(CONFIG_FILE_NAME);
    match StreamgenConfig::load_optional(&default_path)
        .with_context(|| format!("Failed to load config file: {}", default_path.display()))?
    {
        Some(config) => Ok((config, ConfigSource::File(default_path))),
        None => Ok((StreamgenConfig::default(), ConfigSource::Defaults)),
    }
}

pub fn load_options(explicit: Option<&Path>) -> Result<ExpandOptions> {
    let (config, source) = load(explicit)?;
    tracing::debug!(%source, "using configuration");
    config
        .to_options()
        .with_context(|| format!("Invalid configuration in {}", source))
}
