use clap::Parser;

mod commands;
mod error;
mod files;
mod logging;
mod render;

use commands::cli;
use error::{CliError, EXIT_ERROR};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jiratodo: {}", e.chain_message());
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

async fn run(args: cli::Args) -> Result<i32, CliError> {
    let cfg = commands::load_config(&args)?;
    let _guard = logging::init_logging(&cfg.logging, args.log_level.as_deref());

    let mut stdout = std::io::stdout().lock();
    match args.command {
        cli::Commands::Check(check_args) => {
            commands::check::run_check(cfg, check_args, &mut stdout).await
        }
        cli::Commands::Extract(extract_args) => {
            commands::extract::run_extract(cfg, extract_args, &mut stdout)
        }
    }
}
