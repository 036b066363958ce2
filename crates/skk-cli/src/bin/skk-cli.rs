use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use skk_cli::repl::{self, Options, OutputMode};
use skk_cli::{resources, trace_init, CliError};
use skk_core::settings::settings;

#[derive(Parser)]
#[command(name = "skk-cli", version, about = "SKK-style kana-kanji conversion on stdin")]
struct Cli {
    /// Path to an SKK-JISYO dictionary (repeatable, searched in order)
    #[arg(short = 'd', long = "dict", value_name = "PATH")]
    dicts: Vec<PathBuf>,

    /// Read JSON requests and write JSON responses, one per line
    #[arg(long)]
    json: bool,

    /// Settings TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Custom romaji table TOML file
    #[arg(long, value_name = "PATH")]
    romaji: Option<PathBuf>,
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("skk-cli: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(path) = &cli.config {
        resources::init_settings(path)?;
    }
    if let Some(path) = &cli.romaji {
        resources::init_romaji(path)?;
    }
    let settings = settings();

    let dicts = if cli.dicts.is_empty() {
        vec![resources::default_dict_path().ok_or(CliError::NoDictionary)?]
    } else {
        cli.dicts
    };
    let dict = resources::load_dictionaries(&dicts, settings.dictionary.encoding)?;
    info!(sources = dict.len(), "dictionaries ready");

    let stdin = io::stdin();
    let options = Options {
        mode: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Plain
        },
        prompt: stdin.is_terminal(),
        candidates: settings.candidates.clone(),
    };
    repl::run(&dict, &options, stdin.lock(), io::stdout().lock())
}
