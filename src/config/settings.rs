use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "realize.yaml";
const DEFAULT_OUTPUTS_FILE: &str = "outputs.log";
const DEFAULT_LOGS_FILE: &str = "logs.log";
const DEFAULT_ERRORS_FILE: &str = "errors.log";

/// General settings of the tool, persisted as a YAML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub config: Config,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default, skip_serializing_if = "Server::is_empty")]
    pub server: Server,
}

impl Settings {
    /// Takes the persisted fields from `loaded`, keeping the runtime-only
    /// ones (`config.create` and `resources.config`) of `self`.
    pub fn absorb(&mut self, loaded: Settings) {
        let create = self.config.create;
        let config_file = std::mem::take(&mut self.resources.config);

        *self = loaded;
        self.config.create = create;
        self.resources.config = config_file;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether `save` is allowed to touch the filesystem.
    #[serde(skip)]
    pub create: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub flimit: u64,
    #[serde(default, skip_serializing_if = "Legacy::is_empty")]
    pub legacy: Legacy,
}

/// Polling watcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legacy {
    #[serde(default)]
    pub status: bool,
    #[serde(default, with = "super::duration::nanos")]
    pub interval: Duration,
}

impl Legacy {
    pub fn is_empty(&self) -> bool {
        !self.status && self.interval.is_zero()
    }
}

/// Web panel exposure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: i64,
}

impl Server {
    pub fn is_empty(&self) -> bool {
        !self.status && !self.open && self.host.is_empty() && self.port == 0
    }
}

/// Files generated inside the working-state directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Bare file name of the config document; never a path.
    #[serde(skip)]
    pub config: String,
    #[serde(default)]
    pub outputs: String,
    #[serde(default)]
    pub logs: String,
    #[serde(default)]
    pub errors: String,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            config: DEFAULT_CONFIG_FILE.to_string(),
            outputs: DEFAULT_OUTPUTS_FILE.to_string(),
            logs: DEFAULT_LOGS_FILE.to_string(),
            errors: DEFAULT_ERRORS_FILE.to_string(),
        }
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
