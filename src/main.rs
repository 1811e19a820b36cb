use clap::Parser;
use log::{debug, warn, LevelFilter};
use snafu::ErrorCompat;

mod args;
mod convert;

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = args::Args::parse();
    init_logger(args.verbose);
    debug!("args: {:?}", args);

    if let Err(e) = convert::run_conversion(&args) {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured: {}", e);
        for cause in ErrorCompat::iter_chain(&e).skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
