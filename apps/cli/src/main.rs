use anyhow::Result;
use clap::Parser;
use ophub_cli::Cli;
use ophub_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ophub_cli::load(&cli)?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging, cli.verbose)?;

    ophub_cli::run(&cli, &config, &mut std::io::stdout().lock())
}
