use std::process::ExitCode;

use clap::Parser;

use huff_cli::{init_logging, report, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).and_then(|snapshot| report(&snapshot, cli.json)) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("huff: {err:#}");
            ExitCode::FAILURE
        }
    }
}
