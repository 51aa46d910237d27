//! Positional Codec Binary Entry Point
//!
//! Parses the command line, applies environment configuration and runs one
//! command, printing its output to stdout and any error to stderr.

use std::process;

use clap::Parser;
use frameworks_cli::{env, run, CliArgs};
use infrastructure_debugging::DebugUtils;

fn main() {
    let args = CliArgs::parse();

    // Environment first so that command-line flags win
    if let Err(e) = DebugUtils::init_from_env() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    if let Some(level) = args.debug_level() {
        DebugUtils::apply_level(level);
    }

    let settings = match env::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    DebugUtils::debug_output(&format!("settings: {:?}", settings));

    match run(&args.command, &settings) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
