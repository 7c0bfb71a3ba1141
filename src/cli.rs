use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// `-f` value meaning "no filter".
const NO_FILTER: i64 = -1;

const HELP: &str = "\
Hyphen Detector Tool (Version 1)
--------------------------------
This tool detects hyphens in a list of subdomains.
It is useful for making things easy to analyze.

Usage:
  cat <filename> | hyphenlu [-h] [-f <hyphen count>]
  hyphenlu [-h] [-f <hyphen count>] <filename>

Flags:
  -h    Show this help message and exit
  -f    Filter subdomains by hyphen count

GitHub: github.com/rezauditore/hyphenlu
";

#[derive(Debug, Parser)]
#[command(name = "hyphenlu", version, disable_help_flag = true)]
pub struct Args {
    /// Show this help message and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Filter subdomains by hyphen count
    #[arg(
        short = 'f',
        value_name = "hyphen count",
        default_value_t = NO_FILTER,
        allow_negative_numbers = true
    )]
    pub filter: i64,

    /// File with one subdomain per line; stdin when omitted
    pub filename: Option<PathBuf>,
}

pub fn write_help(output: &mut dyn Write) -> io::Result<()> {
    output.write_all(HELP.as_bytes())
}

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub filter: Option<i64>,
    pub workers: usize,
    pub queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            filter: None,
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.filename,
            filter: (args.filter != NO_FILTER).then_some(args.filter),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hyphenlu").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.help);
        assert_eq!(args.filter, NO_FILTER);
        assert_eq!(args.filename, None);

        let config = Config::from(args);
        assert_eq!(config, Config::default());
        assert_eq!(config.workers, 8);
        assert_eq!(config.queue_capacity, 100);
    }

    #[test]
    fn test_filter_and_file() {
        let config = Config::from(parse(&["-f", "2", "subs.txt"]));
        assert_eq!(config.filter, Some(2));
        assert_eq!(config.input, Some(PathBuf::from("subs.txt")));
    }

    #[test]
    fn test_filter_zero() {
        let config = Config::from(parse(&["-f", "0"]));
        assert_eq!(config.filter, Some(0));
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_negative_filter() {
        assert_eq!(Config::from(parse(&["-f", "-1"])).filter, None);
        assert_eq!(Config::from(parse(&["-f", "-4"])).filter, Some(-4));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["--help", "-f", "3"]).help);
    }

    #[test]
    fn test_invalid_filter() {
        let args = ["hyphenlu", "-f", "two"];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn test_help_text() {
        let mut output = Vec::new();
        write_help(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("Hyphen Detector Tool"));
        assert!(text.contains("hyphenlu [-h] [-f <hyphen count>] <filename>"));
        assert!(text.contains("-f    Filter subdomains by hyphen count"));
        assert!(text.ends_with("\nGitHub: github.com/rezauditore/hyphenlu\n"));
    }
}
