//! `remap` — Rewrite bundler-style import aliases into filesystem paths.
//!
//! Loads the alias table for a project (a `remap.json` declaration file, or
//! the built-in defaults) and rewrites import specifiers the way a module
//! resolver would: registered symbol prefixes become absolute directory
//! paths, everything else passes through untouched.

mod config;
mod error;
mod normalize;
mod output;
mod registry;
mod resolve;

use std::path::Path;

use error::RemapError;
use output::{RegistryListing, ResolutionReport};

struct CliArgs {
    project: Option<String>,
    config: Option<String>,
    list: bool,
    specifiers: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut project: Option<String> = None;
    let mut config: Option<String> = None;
    let mut list = false;
    let mut specifiers = Vec::new();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--list" => list = true,
            "--project" | "-p" => {
                i += 1;
                if i >= args.len() {
                    return Err("--project requires a directory argument".to_string());
                }
                project = Some(args[i].clone());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a file argument".to_string());
                }
                config = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => specifiers.push(args[i].clone()),
        }
        i += 1;
    }

    if list && !specifiers.is_empty() {
        return Err("--list and import specifiers are mutually exclusive".to_string());
    }

    Ok(CliArgs {
        project,
        config,
        list,
        specifiers,
    })
}

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    if raw.is_empty() || raw[0] == "-h" || raw[0] == "--help" {
        print_help();
        std::process::exit(0);
    }

    let args = match parse_args(&raw) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("remap: {msg}");
            std::process::exit(1);
        }
    };

    if !args.list && args.specifiers.is_empty() {
        eprintln!("remap: no import specifiers given");
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("remap: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), RemapError> {
    let registry = match &args.config {
        Some(file) => config::load_file(Path::new(file))?,
        None => {
            let project = args.project.as_deref().unwrap_or(".");
            config::load(Path::new(project))?
        }
    };

    if args.list {
        print!("{}", RegistryListing(&registry));
        return Ok(());
    }

    for specifier in &args.specifiers {
        let outcome = resolve::rewrite(specifier, &registry);
        println!("{}", ResolutionReport { specifier, outcome });
    }
    Ok(())
}

fn print_help() {
    eprintln!("remap — Rewrite bundler-style import aliases into filesystem paths");
    eprintln!("Usage: remap [options] <specifier> [specifier2 ...]");
    eprintln!();
    eprintln!("Rewrites each specifier against the project's alias table:");
    eprintln!("a registered symbol prefix is replaced with its bound absolute");
    eprintln!("path; anything else is reported as pass-through.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --project DIR, -p DIR  Project directory (default: .)");
    eprintln!("  --config FILE          Explicit declaration file, skips discovery");
    eprintln!("  --list                 Print the alias table and exit");
    eprintln!("  -h, --help             Show help");
}
