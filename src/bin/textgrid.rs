//! Command-line interface for textgrid
//! This binary flattens Praat TextGrid files into tabular annotation rows.
//!
//! Usage:
//!   textgrid rows `<path>`... [--format `<format>`]  - Print one row per annotation
//!   textgrid tokens `<path>`                       - Dump the lexed token stream as JSON
//!
//! When given several files, each file is parsed independently: a
//! malformed file is reported on stderr and does not abort the rest of the
//! batch, but the process exits nonzero if any file failed.

use clap::{Arg, Command};
use textgrid::Row;

fn main() {
    let matches = Command::new("textgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for flattening Praat TextGrid files into tabular rows")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("rows")
                .about("Parse TextGrid files and print one row per annotation")
                .arg(
                    Arg::new("paths")
                        .help("Paths to the TextGrid files to parse")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'yaml' or 'tsv')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the lexed token stream of one TextGrid file as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the TextGrid file to lex")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("rows", rows_matches)) => {
            let paths: Vec<&String> = rows_matches.get_many::<String>("paths").unwrap().collect();
            let format = rows_matches.get_one::<String>("format").unwrap();
            handle_rows_command(&paths, format);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the rows command
fn handle_rows_command(paths: &[&String], format: &str) {
    if !matches!(format, "json" | "yaml" | "tsv") {
        eprintln!("Unknown format '{}' (expected 'json', 'yaml' or 'tsv')", format);
        std::process::exit(2);
    }

    let mut failed = false;
    for path in paths {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failed = true;
                continue;
            }
        };
        match textgrid::parse(&source) {
            Ok(rows) => print_rows(&rows, format),
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn print_rows(rows: &[Row], format: &str) {
    match format {
        "json" => {
            let output = serde_json::to_string_pretty(rows).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "yaml" => {
            let output = serde_yaml::to_string(rows).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            print!("{}", output);
        }
        "tsv" => print_rows_tsv(rows),
        _ => unreachable!(),
    }
}

/// The flat row table in tab-separated form, empty cells for absent values.
fn print_rows_tsv(rows: &[Row]) {
    println!(
        "tier_num\ttier_name\ttier_type\ttier_xmin\ttier_xmax\txmin\txmax\ttext\tannotation_num"
    );
    for row in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.tier_num,
            row.tier_name,
            row.tier_type.label(),
            row.tier_xmin,
            row.tier_xmax,
            optional(row.xmin),
            optional(row.xmax),
            row.text.as_deref().unwrap_or(""),
            optional(row.annotation_num),
        );
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    let tokens = textgrid::lexing::lex(&source).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}
