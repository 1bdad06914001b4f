use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;

use query_json::{cli, run_query, Args, BuildInfo, QueryJsonError};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return ExitCode::from(parse_error_code(err.use_stderr(), err.print())),
    };

    if args.verbose {
        init_logging();
    }

    if args.version {
        print!("{}", BuildInfo::current());
        return ExitCode::SUCCESS;
    }

    let Some(file) = args.file.as_deref() else {
        eprint!("{}", cli::usage());
        return ExitCode::from(1);
    };

    let result =
        run_query(args.query(), file, args.output_options()).and_then(|output| write_stdout(&output));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}

/// --help goes to stdout and succeeds unless it cannot be written; real
/// parse errors fail with 1
fn parse_error_code(is_error: bool, printed: io::Result<()>) -> u8 {
    if is_error || printed.is_err() {
        1
    } else {
        0
    }
}

fn write_stdout(output: &str) -> Result<(), QueryJsonError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(QueryJsonError::Output)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();
}
