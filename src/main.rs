//! CLI tool to split lines of text into words.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use parsewords::{DelimiterPattern, KeepMode};

fn usage() {
    eprintln!("Usage: parsewords <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  shell  Split each line like a Bourne shell");
    eprintln!("  split  Split each line on a delimiter pattern");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --delimiter PATTERN  Delimiter regex for split (default \\s+)");
    eprintln!("  -k, --keep MODE          none, quotes or delimiters (default none)");
    eprintln!();
    eprintln!("Reads stdin when no files are given.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  parsewords shell commands.txt");
    eprintln!("  parsewords split -d : -k quotes /etc/passwd");
}

/// Read every input as `(name, content)`, reporting failures.
fn read_sources(files: Vec<String>) -> Option<Vec<(String, String)>> {
    if files.is_empty() {
        let mut content = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut content) {
            eprintln!("<stdin>: {e}");
            return None;
        }
        return Some(vec![(String::from("<stdin>"), content)]);
    }

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        match fs::read_to_string(&path) {
            Ok(content) => sources.push((path, content)),
            Err(e) => {
                eprintln!("{path}: {e}");
                return None;
            }
        }
    }
    Some(sources)
}

/// Compile the delimiter for commands that use one; `shell` does not.
fn delimiter_for(command: &str, delimiter: &str) -> Result<Option<DelimiterPattern>, regex::Error> {
    if command == "split" {
        DelimiterPattern::new(delimiter).map(Some)
    } else {
        Ok(None)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if command != "shell" && command != "split" {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let mut delimiter = String::from(r"\s+");
    let mut keep = KeepMode::None;
    let mut files = Vec::new();

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-d" | "--delimiter" => {
                let Some(value) = rest.next() else {
                    eprintln!("Error: {arg} needs a value");
                    return ExitCode::from(2);
                };
                delimiter.clone_from(value);
            }
            "-k" | "--keep" => {
                let Some(value) = rest.next() else {
                    eprintln!("Error: {arg} needs a value");
                    return ExitCode::from(2);
                };
                match value.parse() {
                    Ok(mode) => keep = mode,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::from(2);
                    }
                }
            }
            _ => files.push(arg.clone()),
        }
    }

    let pattern = match delimiter_for(command, &delimiter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: invalid delimiter pattern: {e}");
            return ExitCode::from(2);
        }
    };

    let Some(sources) = read_sources(files) else {
        return ExitCode::FAILURE;
    };

    let mut had_error = false;

    for (name, content) in &sources {
        for (index, line) in content.lines().enumerate() {
            let result = match &pattern {
                Some(pattern) => parsewords::parse_line_precompiled(pattern, keep, line),
                None => parsewords::shell_words(&[line]),
            };

            match result {
                Ok(words) => println!("{words:?}"),
                Err(e) => {
                    eprintln!("{name}:{}: {e}", index + 1);
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
