use clap::Parser;
use vscan_cli::errors::ErrorHandler;
use vscan_cli::structs::cli::Cli;
use vscan_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
