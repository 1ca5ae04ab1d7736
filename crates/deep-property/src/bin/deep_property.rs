//! `deep-property` — read or write a nested field of a JSON document.
//!
//! Usage:
//!   deep-property <get|has|extract|set> <path> [value] [--log-json]
//!
//! The document is read from stdin. `<path>` is a dot path such as
//! `traits.coat.length`, or a JSON array of keys such as `'["a","b.c"]'`.

use deep_property::json_cli::{run, Command};
use deep_property::logging::{self, Profile};
use std::io::{self, Read, Write};

const USAGE: &str = "Usage: deep-property <get|has|extract|set> <path> [value] [--log-json]";

fn main() {
    let mut profile = Profile::Human;
    let mut positional: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--log-json" => profile = Profile::Json,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            _ => positional.push(arg),
        }
    }
    logging::init(profile);

    let (command, path) = match (positional.first(), positional.get(1)) {
        (Some(command), Some(path)) => (command, path),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    let command: Command = match command.parse() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(command, path, positional.get(2).map(String::as_str), buf.trim()) {
        Ok(out) => {
            let mut stdout = io::stdout();
            if let Err(e) = stdout
                .write_all(out.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
            {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
