use clap::Parser;
use magnificent7::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
