use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::flags::{self, FlagSource};
use super::paths::StatePaths;
use super::settings::{Config, Legacy, Server, Settings};
use crate::error::{AppError, AppResult};

#[cfg(unix)]
const STATE_DIR_MODE: u32 = 0o750;

/// Where a `save` call put the document, if anywhere.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Persistence is switched off (`--no-config`).
    Skipped,
    Written(PathBuf),
    /// The state directory could not be created; the document went to the
    /// base directory instead.
    Fallback { path: PathBuf, cause: io::Error },
}

impl SaveOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SaveOutcome::Skipped => None,
            SaveOutcome::Written(path) | SaveOutcome::Fallback { path, .. } => Some(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    paths: StatePaths,
    settings: Settings,
}

impl SettingsStore {
    pub fn new(paths: StatePaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    pub fn paths(&self) -> &StatePaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolve_config_path(&self) -> PathBuf {
        self.paths.resolve_config(&self.settings.resources.config)
    }

    /// Reads the config document into `target`, replacing its value.
    pub fn load<T: DeserializeOwned>(&self, target: &mut T) -> AppResult<()> {
        let path = self.resolve_config_path();
        let raw = fs::read(&path).map_err(|source| AppError::SourceUnreadable {
            path: path.clone(),
            source,
        })?;

        *target = serde_yaml::from_slice(&raw)
            .map_err(|source| AppError::MalformedDocument { path, source })?;
        Ok(())
    }

    /// Loads the document into the store's own settings. Fields that are never
    /// persisted keep their current values.
    pub fn reload(&mut self) -> AppResult<()> {
        let mut loaded = Settings::default();
        self.load(&mut loaded)?;
        self.settings.absorb(loaded);
        Ok(())
    }

    /// Writes `value` as the config document unless persistence is disabled.
    pub fn save<T: Serialize>(&self, value: &T) -> AppResult<SaveOutcome> {
        if !self.settings.config.create {
            return Ok(SaveOutcome::Skipped);
        }

        let payload = serde_yaml::to_string(value).map_err(AppError::SerializationFailed)?;
        let name = &self.settings.resources.config;

        if let Err(cause) = self.ensure_state_dir() {
            let path = self.paths.fallback_file(name);
            write_document(&path, &payload)?;
            return Ok(SaveOutcome::Fallback { path, cause });
        }

        let path = self.paths.state_file(name);
        write_document(&path, &payload)?;
        Ok(SaveOutcome::Written(path))
    }

    pub fn record(&self) -> AppResult<SaveOutcome> {
        self.save(&self.settings)
    }

    /// Deletes the whole state directory, or whatever file occupies its
    /// path. Succeeds when it is already gone.
    pub fn purge(&self) -> AppResult<()> {
        let dir = self.paths.state_dir();
        let delete_failed = |source| AppError::DeleteFailed {
            path: dir.to_path_buf(),
            source,
        };

        let metadata = match fs::symlink_metadata(dir) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %dir.display(), "nothing to purge");
                return Ok(());
            }
            Err(err) => return Err(delete_failed(err)),
        };

        if metadata.is_dir() {
            fs::remove_dir_all(dir).map_err(delete_failed)
        } else {
            fs::remove_file(dir).map_err(delete_failed)
        }
    }

    /// Replaces `config` and `server` with values taken from startup flags.
    pub fn initialize(&mut self, source: &impl FlagSource) {
        self.settings.config = Config {
            create: !source.bool(flags::NO_CONFIG),
            flimit: source.uint64(flags::FILE_LIMIT),
            legacy: Legacy {
                status: source.bool(flags::LEGACY),
                interval: source.duration(flags::LEGACY_DELAY),
            },
        };
        self.settings.server = Server {
            status: !source.bool(flags::NO_SERVER),
            open: source.bool(flags::SERVER_OPEN),
            host: source.string(flags::SERVER_HOST),
            port: source.int(flags::SERVER_PORT),
        };
    }

    fn ensure_state_dir(&self) -> io::Result<()> {
        let dir = self.paths.state_dir();
        if dir.is_dir() {
            return Ok(());
        }

        let mut builder = DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;

            builder.mode(STATE_DIR_MODE);
        }
        builder.create(dir)
    }
}

fn write_document(path: &Path, payload: &str) -> AppResult<()> {
    debug!(path = %path.display(), "writing config");
    fs::write(path, payload).map_err(|source| AppError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
