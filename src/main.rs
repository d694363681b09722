//! Device Method CLI
//!
//! Entry point for the `device-method` command-line tool.

use clap::{Parser, Subcommand};
use device_method::{check_payload, CheckReport, MethodResponse};
use std::io::Read;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "device-method")]
#[command(about = "Direct method response payload tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a method result payload is empty or valid JSON
    Check {
        /// Status code to build the response with
        #[arg(long, short = 's', default_value_t = 200, allow_hyphen_values = true)]
        status: i32,

        /// Payload file (default: stdin)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Treat an empty payload as a status-only response
        #[arg(long)]
        empty_is_absent: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            status,
            file,
            json,
            empty_is_absent,
        } => {
            run_check(status, file, json, empty_is_absent);
        }
    }
}

fn run_check(status: i32, file: Option<PathBuf>, json: bool, empty_is_absent: bool) {
    let bytes = match read_payload(file.as_ref()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error reading payload: {}", e);
            process::exit(2);
        }
    };

    let report = if empty_is_absent && bytes.is_empty() {
        CheckReport::accepted(&MethodResponse::status_only(status))
    } else {
        check_payload(bytes, status)
    };

    if json {
        match report.to_json() {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(2);
            }
        }
    } else {
        print!("{}", report.to_human());
    }

    if report.ok {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn read_payload(file: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
