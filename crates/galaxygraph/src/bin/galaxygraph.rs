//! galaxygraph command-line interface.
//!
//! Loads a world (the bundled sample, a statement script, or a JSON graph
//! description) and answers shortest-path queries against it.
//!
//! ```text
//! galaxygraph "FIND a.a->b.j"
//! galaxygraph --script world.cypher --list a.a->a.i
//! galaxygraph --graph world.json --json a.a->b.j
//! ```

use clap::Parser;
use galaxygraph::cli::{run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
