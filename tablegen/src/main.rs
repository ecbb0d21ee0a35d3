//! # tablegen
//!
//! A CLI tool that turns a directory of courseware files into markdown
//! table rows.
//!
//! ## Overview
//!
//! tablegen is built on top of tablegenlib. Point it at a directory whose
//! files are named `<module>.<section>.<resource>.<slug>.<attribution>.<ext>`
//! and paste the printed rows into a README table.
//!
//! ## Usage
//!
//! ```bash
//! # Rows for the slides directory
//! tablegen "Slides"
//!
//! # Same, with the directory given as an option
//! tablegen -d "Slides"
//!
//! # Links prefixed with the repository URL, with a header row
//! tablegen "Slides" --absolute --header
//!
//! # Skip files that do not follow the naming scheme
//! tablegen "Slides" --exclude "*.md"
//!
//! # Rows as JSON
//! tablegen "Slides" --output json
//! ```

mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tablegenlib::{generate_table, FilterConfig, TableConfig, TablegenError};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tablegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate markdown table rows from courseware filenames")
        .arg(
            Arg::new("path")
                .help("Directory containing the files to list in the table")
                .conflicts_with("directory"),
        )
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("DIR")
                .help("Directory containing the files to list in the table"),
        )
        .arg(
            Arg::new("absolute")
                .long("absolute")
                .action(ArgAction::SetTrue)
                .help("Prefix document links and footnotes with the repository URL"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .action(ArgAction::SetTrue)
                .help("Print the column header and separator rows first"),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip filenames matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["markdown", "json"])
                .default_value("markdown")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (-vv for debug)"),
        )
}

/// Directory from either the positional argument or `--directory`
fn resolve_directory(matches: &ArgMatches) -> Result<&str, TablegenError> {
    matches
        .get_one::<String>("directory")
        .or_else(|| matches.get_one::<String>("path"))
        .map(|s| s.as_str())
        .ok_or(TablegenError::MissingDirectory)
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, TablegenError> {
    let mut filter = FilterConfig::new();

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Generate the table and render it in the requested format
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let dir = resolve_directory(matches)?;
    let filter = build_filter(matches)?;
    let config = TableConfig::new().absolute_paths(matches.get_flag("absolute"));

    let table = generate_table(dir, &filter, &config)?;

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("markdown");

    if output == "json" {
        let json = serde_json::to_string_pretty(&table).context("failed to serialize table")?;
        Ok(format!("{json}\n"))
    } else {
        Ok(table.to_markdown(matches.get_flag("header")))
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
