use std::io::Write;

use anyhow::Result;
use jiratodo_core::api::Problem;

use crate::commands::cli::OutputFormat;

pub fn render_problems(out: &mut dyn Write, problems: &[Problem], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, problems)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for p in problems {
                writeln!(out, "{}", problem_line(p))?;
            }
            match problems.len() {
                0 => writeln!(out, "No ticket problems found.")?,
                1 => writeln!(out, "1 ticket problem found.")?,
                n => writeln!(out, "{n} ticket problems found.")?,
            }
        }
    }
    Ok(())
}

fn problem_line(p: &Problem) -> String {
    format!(
        "{}: {} has status {} ({})",
        p.issue.file.as_deref().unwrap_or("<text>"),
        p.issue.key,
        p.status.name,
        p.status.id
    )
}
