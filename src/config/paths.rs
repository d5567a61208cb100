use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppResult;

/// Hidden working-state directory, relative to the base directory.
pub const STATE_DIR: &str = ".realize";

#[derive(Debug, Clone)]
pub struct StatePaths {
    base_dir: PathBuf,
    state_dir: PathBuf,
}

impl StatePaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let state_dir = base_dir.join(STATE_DIR);
        Self {
            base_dir,
            state_dir,
        }
    }

    pub fn current() -> AppResult<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn state_file(&self, name: &str) -> PathBuf {
        self.state_dir.join(name)
    }

    pub fn fallback_file(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Picks the config document inside the state directory when it exists,
    /// otherwise the bare file in the base directory. Only probes, never
    /// creates, and always yields a path even if neither file is readable.
    pub fn resolve_config(&self, name: &str) -> PathBuf {
        let candidate = self.state_file(name);
        if candidate.exists() {
            debug!(path = %candidate.display(), "using config from state directory");
            return candidate;
        }

        let fallback = self.fallback_file(name);
        debug!(path = %fallback.display(), "state config missing, using base directory");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn prefers_state_directory_copy() {
        let temp = tempfile::tempdir().unwrap();
        let paths = StatePaths::new(temp.path());
        fs::create_dir(paths.state_dir()).unwrap();
        fs::write(paths.state_file("realize.yaml"), "").unwrap();
        fs::write(paths.fallback_file("realize.yaml"), "").unwrap();

        assert_eq!(
            paths.resolve_config("realize.yaml"),
            temp.path().join(".realize").join("realize.yaml")
        );
    }

    #[test]
    fn falls_back_to_base_directory_without_creating_anything() {
        let temp = tempfile::tempdir().unwrap();
        let paths = StatePaths::new(temp.path());

        let resolved = paths.resolve_config("realize.yaml");

        assert_eq!(resolved, temp.path().join("realize.yaml"));
        assert!(!resolved.exists());
        assert!(!paths.state_dir().exists());
    }
}
