use clap::Parser;
use tstamp::utils::logger;
use tstamp::{generate, CliConfig};

fn main() -> anyhow::Result<()> {
    // Unknown format tags never reach this point: clap rejects them with a
    // usage diagnostic on stderr and exit code 2.
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stamp = generate(config.format);
    tracing::debug!(format = ?config.format, "rendered timestamp");

    println!("{stamp}");

    Ok(())
}
