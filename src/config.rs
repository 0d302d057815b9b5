//! Site configuration: where the curriculum and visibility file live, and
//! the administrative PIN.
//!
//! Persisted as TOML. Relative paths are resolved against the directory
//! holding the configuration file, so a site directory can be moved as a
//! whole.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::LattesPaths;

/// Errors from reading the configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(lattes::config::read),
        help("Ensure the config file exists and is readable, or omit --config to use defaults.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(lattes::config::parse),
        help(
            "Check the TOML syntax. Recognized keys are cv_xml_file, visibility_file \
             and admin_pin."
        )
    )]
    Parse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Site configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the Lattes XML export.
    #[serde(default = "default_cv_xml_file")]
    pub cv_xml_file: PathBuf,
    /// Path to the visibility JSON file.
    #[serde(default = "default_visibility_file")]
    pub visibility_file: PathBuf,
    /// PIN required for visibility changes.
    #[serde(default = "default_admin_pin")]
    pub admin_pin: String,
}

fn default_cv_xml_file() -> PathBuf {
    PathBuf::from("cv.xml")
}

fn default_visibility_file() -> PathBuf {
    PathBuf::from("data/visibility.json")
}

fn default_admin_pin() -> String {
    "0000".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cv_xml_file: default_cv_xml_file(),
            visibility_file: default_visibility_file(),
            admin_pin: default_admin_pin(),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.relative_to(base))
    }

    /// Configuration from the XDG location, or data-dir defaults when that
    /// file does not exist.
    pub fn discover(paths: &LattesPaths) -> ConfigResult<Self> {
        let file = paths.config_file();
        if file.exists() {
            tracing::debug!(path = %file.display(), "using site config");
            return Self::load(&file);
        }
        tracing::debug!(path = %file.display(), "no site config, using defaults");
        Ok(Self {
            cv_xml_file: paths.default_cv_file(),
            visibility_file: paths.default_visibility_file(),
            admin_pin: default_admin_pin(),
        })
    }

    /// Anchor relative paths at `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.cv_xml_file.is_relative() {
            self.cv_xml_file = base.join(&self.cv_xml_file);
        }
        if self.visibility_file.is_relative() {
            self.visibility_file = base.join(&self.visibility_file);
        }
        self
    }

    /// Whether `candidate` is the administrative PIN.
    pub fn pin_matches(&self, candidate: &str) -> bool {
        let expected = self.admin_pin.as_bytes();
        let given = candidate.as_bytes();
        expected.len() == given.len()
            && expected
                .iter()
                .zip(given)
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}
