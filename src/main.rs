use anyhow::Result;
use clap::Parser;
use takeout_order_cli::{
    cli::{Args, CliApp, Commands},
    services::LineConsole,
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env(args.menu.clone())?;

    // Logs go to stderr; stdout carries the menu and receipt.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🦀 Take-out ordering starting...");

    let app = CliApp::new(&config, args.catalog)?;
    let mut console = LineConsole::stdio();
    app.run(args.command.unwrap_or(Commands::Order), &mut console)?;

    tracing::info!("🦀 Take-out ordering finished");
    Ok(())
}
