use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::cli::SettingsFlags;
use crate::config::settings::Resources;
use crate::config::{Settings, SettingsStore, StatePaths};
use crate::error::{AppError, AppResult};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub store: SettingsStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        flags: &SettingsFlags,
        config_file: String,
        dir: Option<PathBuf>,
        json: bool,
        verbose: u8,
    ) -> AppResult<Self> {
        let config_file = validate_config_file(config_file)?;
        let paths = match dir {
            Some(dir) => StatePaths::new(dir),
            None => StatePaths::current()?,
        };

        let settings = Settings {
            resources: Resources {
                config: config_file,
                ..Resources::default()
            },
            ..Settings::default()
        };
        let mut store = SettingsStore::new(paths, settings);
        store.initialize(flags);

        Ok(Self {
            verbose,
            store,
            output: Output::new(json),
        })
    }
}

fn validate_config_file(name: String) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "--config-file must not be empty".to_string(),
        ));
    }

    let bare = Path::new(trimmed)
        .file_name()
        .is_some_and(|file_name| file_name == OsStr::new(trimmed));
    if !bare {
        return Err(AppError::InvalidInput(format!(
            "--config-file must be a bare file name, got `{trimmed}`"
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_file_names() {
        assert_eq!(
            validate_config_file(" realize.yaml ".to_string()).unwrap(),
            "realize.yaml"
        );
    }

    #[test]
    fn rejects_paths_and_empty_names() {
        assert!(validate_config_file(String::new()).is_err());
        assert!(validate_config_file("conf/realize.yaml".to_string()).is_err());
        assert!(validate_config_file("/etc/realize.yaml".to_string()).is_err());
        assert!(validate_config_file("..".to_string()).is_err());
    }
}
