//! Command-line front end for the MiniMessage parser.
//!
//! ```text
//! minimessage-rs [--tree | --strip | --escape] [--max-depth N] [MARKUP...]
//! ```
//!
//! Markup is taken from the arguments, or from stdin when none are given.

mod log_init;

use std::io::Read;
use std::process::ExitCode;

use minimessage::{MiniMessage, escape_tokens, strip_tokens};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Tree,
    Strip,
    Escape,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    max_depth: Option<usize>,
    markup: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        mode: Mode::Tree,
        max_depth: None,
        markup: Vec::new(),
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tree" => parsed.mode = Mode::Tree,
            "--strip" => parsed.mode = Mode::Strip,
            "--escape" => parsed.mode = Mode::Escape,
            "--max-depth" => {
                let value = args.next().ok_or("--max-depth needs a value")?;
                let depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth: {value}"))?;
                parsed.max_depth = Some(depth);
            }
            _ => parsed.markup.push(arg),
        }
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<String, String> {
    let markup = if args.markup.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| e.to_string())?;
        input
    } else {
        args.markup.join(" ")
    };

    match args.mode {
        Mode::Strip => Ok(strip_tokens(&markup)),
        Mode::Escape => Ok(escape_tokens(&markup)),
        Mode::Tree => {
            let mut mm = MiniMessage::new();
            if let Some(depth) = args.max_depth {
                mm = mm.with_max_depth(depth);
            }
            let node = mm.parse(&markup).map_err(|e| e.to_string())?;
            Ok(node.to_string())
        }
    }
}

/// The one line written to stderr when a run fails.
fn error_line(message: &str) -> String {
    format!("error: {message}")
}

fn main() -> ExitCode {
    log_init::init_logger();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", error_line(&message));
            ExitCode::FAILURE
        }
    }
}
