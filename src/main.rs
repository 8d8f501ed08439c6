//! Command-line interface (CLI) for lexitab
//!
//! This binary exercises the two tables the library provides. The `intern`
//! command plays the part of the external lexer: it installs every
//! whitespace-separated token of the input file into an [`Interner`] and
//! dumps the resulting table. The `bind` command plays the part of the
//! semantic phase: it loads `name = value` lines into a [`Bindings`]
//! dictionary and prints the final value bound to each name.

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use lexitab::{Bindings, Interner};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interns every whitespace-separated token and dumps the table
    Intern {
        /// Input file with token text
        #[arg(short, long)]
        input: String,
    },
    /// Loads `name = value` lines and prints the resulting bindings
    Bind {
        /// Input file with one assignment per line
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Intern { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("can't open {:?}", input))?;
            let mut interner = Interner::new();
            for token in text.split_whitespace() {
                interner.install(token)?;
            }
            interner.dump(&input)?;
        }
        Commands::Bind { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("can't open {:?}", input))?;
            let mut interner = Interner::new();
            let mut bindings = Bindings::new();
            for (lineno, line) in text.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let Some((name, value)) = line.split_once('=') else {
                    bail!("line {}: expected `name = value`", lineno + 1);
                };
                let name = name.trim();
                let value: i64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("line {}: bad value {:?}", lineno + 1, value))?;
                interner.install(name)?;
                bindings.insert(name, value)?;
            }
            for entry in interner.iter() {
                match bindings.get(entry.token()) {
                    Some(value) => println!("{} = {}", entry.token(), value),
                    None => bail!("undeclared identifier {:?}", entry.token()),
                }
            }
        }
    }
    Ok(())
}
