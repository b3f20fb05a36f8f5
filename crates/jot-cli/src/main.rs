//! `jot` CLI — reformat, minify, and validate JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | jot pretty
//!
//! # Compact a file into another file
//! jot compact -i data.json -o data.min.json
//!
//! # Minify raw text (strips whitespace and // or /* */ comments)
//! jot minify -i annotated.json
//!
//! # Validate, reporting the byte offset of the first error
//! jot check -i maybe.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jot_core::ParseOptions;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "jot", version, about = "JSON document tree CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and pretty-print JSON
    Pretty {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse and print compact JSON (no inter-token whitespace)
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Strip whitespace and comments without parsing into a tree
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate JSON, reporting the first error's byte offset
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Accept trailing content after the top-level value
        #[arg(long)]
        allow_trailing: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pretty { input, output } => {
            let text = read_input(input.as_deref())?;
            let tree = jot_core::parse(&text).context("invalid JSON input")?;
            write_output(output.as_deref(), &jot_core::print(&tree))?;
        }
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let tree = jot_core::parse(&text).context("invalid JSON input")?;
            write_output(output.as_deref(), &jot_core::print_unformatted(&tree))?;
        }
        Commands::Minify { input, output } => {
            let mut bytes = read_input(input.as_deref())?.into_bytes();
            jot_core::minify(&mut bytes);
            let text = String::from_utf8(bytes).context("minified output is not UTF-8")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Check {
            input,
            allow_trailing,
        } => {
            let text = read_input(input.as_deref())?;
            let options = ParseOptions {
                allow_trailing,
                ..ParseOptions::default()
            };
            match jot_core::parse_with_options(&text, &options) {
                Ok(_) => println!("OK"),
                Err(e) => {
                    eprintln!("invalid: {e}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
