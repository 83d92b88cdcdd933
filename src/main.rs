use std::{
    fs,
    io::{self, Cursor},
    process::ExitCode,
};

use clap::Parser;
use deskcalc::session::Session;

/// deskcalc is an interactive calculator for floating-point arithmetic with
/// variables, powers, roots and factorials.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells deskcalc to read the statements from a file instead of the
    /// command line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Suppresses the greeting and the prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Statements to evaluate. Without them, deskcalc reads from standard
    /// input.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.contents {
        None => Session::new(io::stdin().lock(), io::stdout().lock(), io::stderr()).quiet(args.quiet)
                                                                                 .run(),
        Some(contents) => {
            let script = if args.file {
                match fs::read_to_string(&contents) {
                    Ok(script) => script,
                    Err(_) => {
                        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                        return ExitCode::from(1);
                    },
                }
            } else {
                contents
            };

            Session::new(Cursor::new(script), io::stdout().lock(), io::stderr()).quiet(true)
                                                                                .run()
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        },
    }
}
