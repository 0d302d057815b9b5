//! File-backed persistence for [`VisibilityConfig`].

use std::path::{Path, PathBuf};

use super::config::VisibilityConfig;
use super::error::{VisibilityError, VisibilityResult};

/// Reads and writes the visibility JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct VisibilityStore {
    path: PathBuf,
}

impl VisibilityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current configuration.
    ///
    /// A missing file means nothing is hidden. An unreadable or unparsable
    /// file (for instance one caught mid-write) is treated the same way and
    /// logged; this never fails.
    pub fn load(&self) -> VisibilityConfig {
        if !self.path.exists() {
            return VisibilityConfig::default();
        }

        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "visibility file unreadable, showing everything"
                );
                return VisibilityConfig::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "visibility file is not valid, showing everything"
                );
                VisibilityConfig::default()
            }
        }
    }

    /// Overwrite the file with `config`.
    ///
    /// The JSON is written to a sibling temp file and renamed into place, so
    /// readers see either the old or the new content. Concurrent saves are
    /// not coordinated: the last rename wins.
    pub fn save(&self, config: &VisibilityConfig) -> VisibilityResult<()> {
        let fail = |message: String| VisibilityError::Persistence {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| fail(format!("create {}: {e}", parent.display())))?;
        }

        let json =
            serde_json::to_string_pretty(config).map_err(|e| fail(format!("serialize: {e}")))?;

        let tmp = self.temp_path();
        std::fs::write(&tmp, json).map_err(|e| fail(format!("write {}: {e}", tmp.display())))?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(fail(format!("rename into place: {e}")));
        }

        tracing::info!(
            path = %self.path.display(),
            hidden_sections = config.hidden_sections.len(),
            hidden_items = config.hidden_items.len(),
            "saved visibility settings"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "visibility.json".into());
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}
