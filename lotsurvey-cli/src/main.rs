use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use lotsurvey_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    log::debug!("lotsurvey v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
