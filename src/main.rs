//! Vaunch command line.
//!
//! Usage:
//!   # Run a single command against the saved start page
//!   vaunch touch sites/example example.com
//!
//!   # Read commands from stdin, one per line
//!   vaunch --data-dir /tmp/vaunch < commands.txt

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vaunch_lib::filesystem::Storage;
use vaunch_lib::{Response, ResponseType, Vaunch};

/// Command-driven start page.
#[derive(Parser, Debug)]
#[command(name = "vaunch")]
#[command(about = "Folders of link and query files, driven by commands")]
struct Args {
    /// Directory holding folders.json and config.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// A single line to run; stdin is read when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,
}

fn print_response(response: &Response) {
    if !response.message.is_empty() {
        println!("[{:?}] {}", response.kind, response.message);
    }
    if let Some(navigation) = &response.navigation {
        let target = if navigation.new_context { "new tab" } else { "current tab" };
        println!("-> {} ({})", navigation.url, target);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let storage = match args.data_dir {
        Some(dir) => Storage::new_with_base(&dir),
        None => match Storage::new() {
            Ok(storage) => storage,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut vaunch = match Vaunch::open(storage) {
        Ok(vaunch) => vaunch,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !args.input.is_empty() {
        let response = vaunch.dispatch(&args.input.join(" "));
        print_response(&response);
        return if response.kind == ResponseType::Error {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => print_response(&vaunch.dispatch(&line)),
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
