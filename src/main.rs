// src/main.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use letterfreq::{Args, run};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    run(args)
}
