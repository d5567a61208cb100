use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct CleanReport {
    removed: String,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let dir = ctx.store.paths().state_dir();
    ctx.store.purge()?;

    let report = CleanReport {
        removed: dir.display().to_string(),
    };
    let text = format!("removed {}", report.removed);
    ctx.output.emit(&text, &report)
}
