use anyhow::Context;
use clap::Parser;
use listtube::cli::Cli;
use listtube::config::Config;
use listtube::logging::init_tracing;
use listtube::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!(screen = ?config.ui.start_screen, rows = config.numbers.row_count, "starting");
    runtime::run(config, cli.query.clone()).context("terminal UI failed")
}
