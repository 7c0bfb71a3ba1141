mod aggregator;
mod cli;
mod error;
mod parallel;
mod report;
mod source;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Args, Config};
use crate::error::{Error, Result};
use crate::report::Mode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let result = if args.help {
        help(&mut io::stdout().lock())
    } else {
        run(&Config::from(args), &mut io::stdout().lock())
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn help(output: &mut dyn Write) -> Result<()> {
    cli::write_help(output).map_err(Error::Output)?;
    output.flush().map_err(Error::Output)
}

fn run(config: &Config, output: &mut dyn Write) -> Result<()> {
    let reader = source::open(config.input.as_deref())?;
    let buckets = parallel::ingest(reader, config.workers, config.queue_capacity)?;

    report::write_report(&buckets, Mode::from(config.filter), output).map_err(Error::Output)?;
    output.flush().map_err(Error::Output)
}
