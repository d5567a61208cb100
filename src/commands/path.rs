use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ConfigPath {
    path: String,
    exists: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let resolved = ctx.store.resolve_config_path();
    let report = ConfigPath {
        path: resolved.display().to_string(),
        exists: resolved.is_file(),
    };

    let text = if report.exists {
        report.path.clone()
    } else {
        format!("{} (missing)", report.path)
    };
    ctx.output.emit(&text, &report)
}
