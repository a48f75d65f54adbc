use anyhow::Result;
use clap::Parser;
use ll_cli::commands::ports::handle_ports;
use ll_cli::messages::{print_error, suggestions_for};
use ll_cli::{Cli, Command, handle_patterns, handle_stream};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Stream(args) => handle_stream(args),
        Command::Patterns(args) => handle_patterns(args),
        Command::Ports => handle_ports(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        print_error(&format!("{e:#}"), &suggestions_for(&e));
        std::process::exit(1);
    }
}
