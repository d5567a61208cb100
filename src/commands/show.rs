use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::config::duration::format_duration;
use crate::config::settings::{Legacy, Server};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

/// JSON shape of the settings: `config` nested, `log`/`error` resource keys.
#[derive(Debug, Serialize)]
struct SettingsJson<'a> {
    config: ConfigJson<'a>,
    resources: ResourcesJson<'a>,
    #[serde(skip_serializing_if = "server_is_empty")]
    server: &'a Server,
}

#[derive(Debug, Serialize)]
struct ConfigJson<'a> {
    #[serde(skip_serializing_if = "is_zero")]
    flimit: u64,
    #[serde(skip_serializing_if = "legacy_is_empty")]
    legacy: &'a Legacy,
}

#[derive(Debug, Serialize)]
struct ResourcesJson<'a> {
    outputs: &'a str,
    #[serde(rename = "log")]
    logs: &'a str,
    #[serde(rename = "error")]
    errors: &'a str,
}

impl<'a> From<&'a Settings> for SettingsJson<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            config: ConfigJson {
                flimit: settings.config.flimit,
                legacy: &settings.config.legacy,
            },
            resources: ResourcesJson {
                outputs: &settings.resources.outputs,
                logs: &settings.resources.logs,
                errors: &settings.resources.errors,
            },
            server: &settings.server,
        }
    }
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let settings = current_settings(ctx)?;
    let text = render_text(&settings)?;
    ctx.output.emit(text.trim_end(), &SettingsJson::from(&settings))
}

fn current_settings(ctx: &AppContext) -> AppResult<Settings> {
    let mut settings = ctx.store.settings().clone();
    let mut loaded = Settings::default();

    match ctx.store.load(&mut loaded) {
        Ok(()) => {
            settings.absorb(loaded);
            Ok(settings)
        }
        Err(err) if err.is_source_unreadable() => {
            info!(error = %err, "no readable config, showing defaults");
            Ok(settings)
        }
        Err(err) => Err(err),
    }
}

/// YAML as stored, except the legacy interval reads as `1.5s` rather than
/// nanoseconds.
fn render_text(settings: &Settings) -> AppResult<String> {
    let mut doc = serde_yaml::to_value(settings).map_err(AppError::SerializationFailed)?;
    if let Some(legacy) = doc.get_mut("legacy").and_then(|v| v.as_mapping_mut()) {
        legacy.insert(
            "interval".into(),
            format_duration(settings.config.legacy.interval).into(),
        );
    }
    serde_yaml::to_string(&doc).map_err(AppError::SerializationFailed)
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn server_is_empty(server: &&Server) -> bool {
    server.is_empty()
}

fn legacy_is_empty(legacy: &&Legacy) -> bool {
    legacy.is_empty()
}
