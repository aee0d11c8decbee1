use std::io::Write;
use std::sync::Arc;

use jiratodo_core::api::{AppConfig, Extractor, FsSourceReader};

use super::cli::ExtractArgs;
use crate::error::CliError;
use crate::files::expand_patterns;

pub fn run_extract(mut cfg: AppConfig, args: ExtractArgs, out: &mut dyn Write) -> Result<i32, CliError> {
    super::apply_overrides(&mut cfg, &args.overrides);

    let files = expand_patterns(&args.patterns)?;
    let extractor = Extractor::from_config(&cfg, Arc::new(FsSourceReader))?;
    let references = extractor.extract_files(&files)?;

    serde_json::to_writer_pretty(&mut *out, &references).map_err(anyhow::Error::from)?;
    writeln!(out).map_err(anyhow::Error::from)?;
    Ok(0)
}
