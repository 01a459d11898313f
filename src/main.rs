use clap::Parser;
use std::io::{self, Read, Write};
use std::process::ExitCode;

mod error;
mod filter;
mod input;
mod render;

pub type Result<T> = anyhow::Result<T>;

/// Reads a JSON array of release entries on stdin and prints it back without
/// the `grafana-dev` entries.
#[derive(Parser)]
#[command(name = "filter-grafana-versions")]
#[command(about = "Drop grafana-dev entries from a JSON version list", long_about = None)]
#[command(version)]
struct Cli {}

fn run<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    // 1) Read + parse stdin.
    let doc = input::read_document(input)?;

    // 2) Filter.
    let kept = filter::filter_document(&doc)?;

    // 3) Write.
    render::write_entries(output, &kept)
}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
