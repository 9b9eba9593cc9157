use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use pipelang::{parse, render_error};
use tracing::{debug, error};

fn main() -> ExitCode {
    // Structured logging, filtered by RUST_LOG and quiet by default
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map_or("pipelang", String::as_str));
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = file_path, %err, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let result = parse(&source);
    debug!(elapsed = ?start.elapsed(), "parsed {}", file_name);

    match result {
        Ok(program) => {
            println!("{}", program);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_error(&err, &source, file_name));
            ExitCode::FAILURE
        }
    }
}
