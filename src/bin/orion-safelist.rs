// src/bin/orion-safelist.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use safelist_core::cli::Cli;
use safelist_core::config::ScanConfig;
use safelist_core::exit::SafelistExit;
use safelist_core::scan;

fn main() -> SafelistExit {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            SafelistExit::Error
        }
    }
}

fn run() -> Result<SafelistExit> {
    let cli = Cli::parse();
    let config = ScanConfig::from_install_dir()?.with_verbose(cli.verbose);

    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();
    Ok(scan::run(&config, &mut out, &mut diag)?)
}
