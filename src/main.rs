use clap::Parser;
use draftscope::cli;
use env_logger::Env;
use log::info;
use std::process;

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .target(env_logger::Target::Stderr)
        .init();
    info!("Starting draftscope v{}", env!("CARGO_PKG_VERSION"));

    process::exit(cli::run(args));
}
