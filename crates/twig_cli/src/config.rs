//! Pipeline configuration.
//!
//! A pipeline file (`.twig.json`) holds traverser settings and the passes to
//! run, in order:
//!
//! ```json
//! {
//!   "traverser": { "maxDepth": 256 },
//!   "passes": ["remove:Nop", "rename:Echo=Print"]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use twig_core::{ConfigError, TraverserConfig};

/// Errors in a pass specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassSpecError {
    #[error("Unknown pass '{0}': expected remove, prune, rename, unwrap or count")]
    UnknownPass(String),
    #[error("Pass '{0}' needs a kind, e.g. '{0}:Nop'")]
    MissingKind(String),
    #[error("Invalid rename '{0}': expected rename:OLD=NEW")]
    InvalidRename(String),
}

/// A built-in pass, as written in config files and on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PassSpec {
    /// `remove:KIND`
    Remove(String),
    /// `prune:KIND`, removal that also hides the subtree from later passes
    Prune(String),
    /// `rename:OLD=NEW`
    Rename { from: String, to: String },
    /// `unwrap:KIND`
    Unwrap(String),
    /// `count`
    Count,
}

impl FromStr for PassSpec {
    type Err = PassSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), arg.trim()),
            None => (s.trim(), ""),
        };

        let kind = || {
            if arg.is_empty() {
                Err(PassSpecError::MissingKind(name.to_string()))
            } else {
                Ok(arg.to_string())
            }
        };

        match name {
            "remove" => Ok(PassSpec::Remove(kind()?)),
            "prune" => Ok(PassSpec::Prune(kind()?)),
            "unwrap" => Ok(PassSpec::Unwrap(kind()?)),
            "count" => Ok(PassSpec::Count),
            "rename" => match arg.split_once('=') {
                Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
                    Ok(PassSpec::Rename {
                        from: from.trim().to_string(),
                        to: to.trim().to_string(),
                    })
                }
                _ => Err(PassSpecError::InvalidRename(s.to_string())),
            },
            _ => Err(PassSpecError::UnknownPass(name.to_string())),
        }
    }
}

impl TryFrom<String> for PassSpec {
    type Error = PassSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PassSpec> for String {
    fn from(spec: PassSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for PassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassSpec::Remove(kind) => write!(f, "remove:{}", kind),
            PassSpec::Prune(kind) => write!(f, "prune:{}", kind),
            PassSpec::Rename { from, to } => write!(f, "rename:{}={}", from, to),
            PassSpec::Unwrap(kind) => write!(f, "unwrap:{}", kind),
            PassSpec::Count => f.write_str("count"),
        }
    }
}

/// Contents of a pipeline file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Engine settings.
    pub traverser: TraverserConfig,

    /// Passes, in registration order.
    pub passes: Vec<PassSpec>,
}

impl PipelineConfig {
    /// Config file names searched in the working directory.
    pub const CONFIG_FILES: &'static [&'static str] = &[".twig.json"];

    /// Loads a pipeline from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parses a pipeline from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::invalid(format!("{}", e)))?;
        config.traverser.validate()?;
        Ok(config)
    }

    /// Finds a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }
}
