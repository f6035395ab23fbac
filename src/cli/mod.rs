pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::process::ExitCode;

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::level_for(cli.debug, cli.quiet));

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Build { toc } => commands::handle_build_command(toc).await,
        types::Commands::Insert { document, output, toc } => {
            commands::handle_insert_command(document, output.as_deref(), toc).await
        }
        types::Commands::Config { settings } => commands::handle_config_command(settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
