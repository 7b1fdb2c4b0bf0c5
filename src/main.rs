use clap::Parser;
use jetreward::cli::Cli;
use jetreward::config::Config;
use jetreward::navigation::Route;
use jetreward::{logging, ui};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Reject a bad route before the terminal is taken over.
    if let Some(path) = cli.open.as_deref() {
        path.parse::<Route>()?;
    }

    let log_path = logging::init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "jetreward {}", env!("CARGO_PKG_VERSION"));

    ui::runtime::run(config, cli.open)
}
