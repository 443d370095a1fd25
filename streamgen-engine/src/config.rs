//! `streamgen.toml` loading.
//!
//! The file is optional. The proc-macro looks for it next to the
//! `Cargo.toml` of the crate being compiled; the CLI takes an explicit path.

use std::path::{Path, PathBuf};

use proc_macro2::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::ExpansionPolicy;
use crate::syntax::DeclarationKind;

pub const CONFIG_FILE_NAME: &str = "streamgen.toml";
pub const DEFAULT_RUNTIME_PATH: &str = "::streamgen";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CARGO_MANIFEST_DIR not set")]
    ManifestDirNotSet,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("permitted_kinds must name at least one declaration kind")]
    NoPermittedKinds,

    #[error("runtime_path `{0}` is not a valid Rust path")]
    InvalidRuntimePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamgenConfig {
    /// Declaration kinds the annotation may decorate.
    pub permitted_kinds: Vec<DeclarationKind>,

    /// Path under which generated code finds `AsyncStream` and `Continuation`.
    pub runtime_path: String,
}

impl Default for StreamgenConfig {
    fn default() -> Self {
        Self {
            permitted_kinds: ExpansionPolicy::canonical().permitted().to_vec(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl StreamgenConfig {
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: StreamgenConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load `streamgen.toml` from a crate root, falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_optional(&dir.join(CONFIG_FILE_NAME))?.unwrap_or_default())
    }

    /// Load the configuration of the crate currently being compiled.
    pub fn load_for_manifest() -> Result<Self, ConfigError> {
        let manifest_dir =
            std::env::var("CARGO_MANIFEST_DIR").map_err(|_| ConfigError::ManifestDirNotSet)?;
        Self::load_from_dir(&PathBuf::from(manifest_dir))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.permitted_kinds.is_empty() {
            return Err(ConfigError::NoPermittedKinds);
        }
        self.parse_runtime_path()?;
        Ok(())
    }

    pub fn policy(&self) -> ExpansionPolicy {
        ExpansionPolicy::new(self.permitted_kinds.iter().copied())
    }

    pub fn to_options(&self) -> Result<ExpandOptions, ConfigError> {
        self.validate()?;
        Ok(ExpandOptions {
            policy: self.policy(),
            runtime_path: self.parse_runtime_path()?,
        })
    }

    fn parse_runtime_path(&self) -> Result<syn::Path, ConfigError> {
        syn::parse_str::<syn::Path>(&self.runtime_path)
            .map_err(|_| ConfigError::InvalidRuntimePath(self.runtime_path.clone()))
    }
}

/// Everything an expansion needs besides its syntax input.
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    pub policy: ExpansionPolicy,
    pub runtime_path: syn::Path,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        let segment = syn::PathSegment::from(proc_macro2::Ident::new("streamgen", Span::call_site()));
        Self {
            policy: ExpansionPolicy::canonical(),
            runtime_path: syn::Path {
                leading_colon: Some(Default::default()),
                segments: std::iter::once(segment).collect(),
            },
        }
    }
}
