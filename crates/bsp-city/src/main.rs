use anyhow::{Context, Result};
use bsp_city::cli::{Cli, run};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; -v/-q override RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose > 0 || cli.quiet {
        logger.filter_level(cli.log_level());
    }
    logger.init();

    let report = run(&cli).context("failed to build city geometry")?;

    println!("Initial polygons: {}", report.initial);
    println!("Polygons after explosion: {}", report.remaining);

    Ok(())
}
