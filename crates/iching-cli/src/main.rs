//! Command-line I Ching oracle.

mod commands;
mod render;

use std::process;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use iching_core::{CastMethod, HexResult, ReadingConfig, ReferenceTable};

#[derive(Parser)]
#[command(
    name = "iching",
    about = "Cast an I Ching reading and show its primary and relating figures",
    version
)]
struct Cli {
    /// Use the three-coin method instead of marbles
    #[arg(short = 'c')]
    coins: bool,

    /// Don't show descriptions
    #[arg(short = 'q')]
    quiet: bool,

    /// Show a specific hexagram (1-64) and its description
    #[arg(short = 's', value_name = "ID", allow_negative_numbers = true)]
    show: Option<i64>,

    /// Find a hexagram by its lines: x for a yang line, y for a yin line, bottom line first
    #[arg(short = 'f', value_name = "LINES")]
    find: Option<String>,

    /// RNG seed for a reproducible reading
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let result = ReferenceTable::embedded().and_then(|table| run(&cli, &table));

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            if e.is_usage_error() {
                eprintln!();
                eprintln!("{}", Cli::command().render_help());
            }
            process::exit(1);
        }
    }
}

fn run(cli: &Cli, table: &ReferenceTable) -> HexResult<String> {
    if let Some(id) = cli.show {
        return commands::show::run(table, id, cli.quiet);
    }
    if let Some(code) = &cli.find {
        return commands::find::run(table, code, cli.quiet);
    }

    let method = if cli.coins {
        CastMethod::Coins
    } else {
        CastMethod::Marbles
    };
    let mut config = ReadingConfig::default().with_method(method);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    commands::cast::run(table, &config, cli.quiet)
}
