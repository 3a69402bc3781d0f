use anyhow::Result;
use clap::Parser;
use petfriends::cli::{Cli, Commands};
use petfriends::client::PetFriendsClient;
use petfriends::config::ClientConfig;
use petfriends::output::print_error;
use petfriends::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("Error: {:#}", e));
            exit_codes::from_error(&e)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Logs go to stderr; RUST_LOG wins unless --verbose is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("petfriends=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    if let Commands::Completion { shell } = cli.command {
        commands::completion::generate_completions(shell)?;
        return Ok(exit_codes::SUCCESS);
    }

    let mut config = ClientConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let client = PetFriendsClient::from_config(&config)?;

    match cli.command {
        Commands::Key(args) => commands::key::execute(&client, args, cli.format, cli.verbose).await,
        Commands::Pets(command) => {
            commands::pets::handle(
                &client,
                cli.auth_key.as_deref(),
                command,
                cli.format,
                cli.verbose,
            )
            .await
        }
        Commands::Completion { .. } => Ok(exit_codes::SUCCESS),
    }
}
