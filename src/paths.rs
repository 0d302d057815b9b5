//! XDG-compliant path resolution for nice-lattes.
//!
//! Provides `LattesPaths`, the default locations of the configuration file
//! and site data, following the XDG Base Directory Specification.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from path resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(lattes::paths::no_home),
        help(
            "Set the HOME environment variable, or pass --config with an explicit \
             configuration file."
        )
    )]
    NoHome,
}

pub type PathResult<T> = std::result::Result<T, PathError>;

/// Global XDG-compliant directories for nice-lattes.
#[derive(Debug, Clone)]
pub struct LattesPaths {
    /// `$XDG_CONFIG_HOME/nice-lattes/`
    pub config_dir: PathBuf,
    /// `$XDG_DATA_HOME/nice-lattes/`
    pub data_dir: PathBuf,
}

impl LattesPaths {
    /// Resolve XDG directories from environment variables with standard fallbacks.
    pub fn resolve() -> PathResult<Self> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| PathError::NoHome)?;

        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config"))
            .join("nice-lattes");

        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".local/share"))
            .join("nice-lattes");

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// `config.toml` inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Default curriculum location when no configuration file exists.
    pub fn default_cv_file(&self) -> PathBuf {
        self.data_dir.join("cv.xml")
    }

    /// Default visibility file location when no configuration file exists.
    pub fn default_visibility_file(&self) -> PathBuf {
        self.data_dir.join("visibility.json")
    }
}
