use std::{fs, io, process::ExitCode};

use calq::{
    get_result,
    repl::{self, ReplConfig},
};
use clap::Parser;

/// calq evaluates arithmetic, bitwise and boolean expressions, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calq to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Print detailed error messages instead of `invalid expression!`.
    #[arg(short, long)]
    explain: bool,

    /// Prompt shown in interactive mode.
    #[arg(short, long, default_value = ">")]
    prompt: String,

    /// Expression to evaluate, or a path with `--file`. Starts an interactive
    /// prompt when omitted.
    contents: Option<String>,
}

fn report(source: &str, explain: bool) -> bool {
    match get_result(source) {
        Ok(result) => {
            println!("{result}");
            true
        },
        Err(e) if explain => {
            eprintln!("{e:#}");
            false
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let config = ReplConfig { prompt:  args.prompt,
                                  explain: args.explain, };
        return match repl::run(io::stdin().lock(), io::stdout().lock(), &config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    if !args.file {
        return if report(&contents, args.explain) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let Ok(script) = fs::read_to_string(&contents) else {
        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut ok = true;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        ok &= report(line, args.explain);
    }
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
