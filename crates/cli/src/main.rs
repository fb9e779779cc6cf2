use clap::Parser;
use log::debug;
use objlist_cli::args::Args;
use objlist_cli::config::Config;
use objlist_cli::error::Result;
use objlist_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    debug!("running with {config:?}");

    let listing = objlist_engine::run(&config)?;
    presentation::emit(&listing, &config)
}
