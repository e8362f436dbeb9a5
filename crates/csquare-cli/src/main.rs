use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use csquare_cli::{Cli, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let interactive = io::stdin().is_terminal();
    log::debug!("starting with {:?} (interactive: {})", cli, interactive);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run(&cli, stdin, &mut stdout, interactive)
}
