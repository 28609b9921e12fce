use anyhow::Result;
use clap::Parser;
use market_paths::{Cli, run};

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("market_paths"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}
