//! CLI entry point for etree

use std::process;

use env_logger::Env;
use etree::{Error, JsonFormatter, OutputFormat, StreamingFormatter, parse_args, run};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let invocation = match parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        // Prints usage for --help/--version (exit 0) or the parse error (exit 2).
        Err(Error::ArgumentParse(e)) => e.exit(),
        Err(e) => {
            eprintln!("etree: {}", e);
            process::exit(if e.is_argument_error() { 2 } else { 1 });
        }
    };

    let result = match invocation.format {
        OutputFormat::Tree => {
            let mut formatter = StreamingFormatter::new(invocation.output);
            run(&invocation.options, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(invocation.output);
            run(&invocation.options, &mut formatter)
        }
    };

    match result {
        Ok(report) if report.is_success() => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("etree: {}", e);
            process::exit(1);
        }
    }
}
