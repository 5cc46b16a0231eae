//! What2Cook command-line front end.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, error_message};
use std::process::ExitCode;
use tracing::{debug, error};
use what2cook::{Settings, What2CookResult, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "Parsed arguments");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, category = ?e.category(), "Command failed");
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> What2CookResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => cli::handle_generate(&settings, args).await,
        Commands::Saved(command) => cli::handle_saved_command(&settings, command),
        Commands::ShoppingList { names } => cli::handle_shopping_list(&settings, names).await,
        Commands::Share {
            name,
            shopping_list,
            target,
        } => cli::handle_share(&settings, name, shopping_list, target).await,
    }
}
