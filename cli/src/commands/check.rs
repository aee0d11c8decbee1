use std::io::Write;

use jiratodo_core::api::AppConfig;

use super::cli::CheckArgs;
use crate::error::CliError;
use crate::files::expand_patterns;
use crate::render::render_problems;

pub const EXIT_OK: i32 = 0;
pub const EXIT_PROBLEMS: i32 = 1;

pub async fn run_check(
    mut cfg: AppConfig,
    args: CheckArgs,
    out: &mut dyn Write,
) -> Result<i32, CliError> {
    super::apply_overrides(&mut cfg, &args.overrides);
    if !args.allowed_status.is_empty() {
        cfg.allowed_statuses = args.allowed_status.clone();
    }

    let files = expand_patterns(&args.patterns)?;
    let scanner = jiratodo_plugins::factory::build_scanner(&cfg)?;
    let problems = scanner.process_files(&files).await?;

    render_problems(out, &problems, args.format)?;

    if problems.is_empty() {
        return Ok(EXIT_OK);
    }
    if args.warn_only {
        tracing::warn!(problems = problems.len(), "ticket problems reported (warn-only)");
        return Ok(EXIT_OK);
    }
    Ok(EXIT_PROBLEMS)
}
