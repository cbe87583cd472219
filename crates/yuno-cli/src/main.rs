//! Yuno Ride - fleet carousel and rental booking from the command line
//!
//! Browse the rental fleet, quote a rental and prepare a WhatsApp booking
//! request link.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "yuno_cli=debug,yuno_app=debug,yuno_domain=debug,yuno_infra=debug"
    } else {
        "yuno_cli=info,yuno_app=info,yuno_domain=warn,yuno_infra=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
