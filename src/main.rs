use clap::Parser;
use tracing_subscriber::EnvFilter;

use paddock::cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = paddock::run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
