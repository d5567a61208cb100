use serde::Serialize;
use tracing::warn;

use crate::config::SaveOutcome;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct InitReport {
    saved: bool,
    path: Option<String>,
    fallback: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let outcome = ctx.store.record()?;

    if let SaveOutcome::Fallback { path, cause } = &outcome {
        warn!(
            dir = %ctx.store.paths().state_dir().display(),
            path = %path.display(),
            error = %cause,
            "cannot create state directory, config written to fallback location"
        );
    }

    let report = InitReport {
        saved: !matches!(outcome, SaveOutcome::Skipped),
        path: outcome.path().map(|path| path.display().to_string()),
        fallback: matches!(outcome, SaveOutcome::Fallback { .. }),
    };
    let text = match &outcome {
        SaveOutcome::Skipped => "config not saved (--no-config)".to_string(),
        SaveOutcome::Written(path) => format!("saved settings to {}", path.display()),
        SaveOutcome::Fallback { path, .. } => {
            format!("saved settings to {} (fallback)", path.display())
        }
    };
    ctx.output.emit(&text, &report)
}
