//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ogiri-dice
#[derive(Parser, Debug)]
#[command(name = "ogiri-dice")]
#[command(author, version, about = "Ogiri Dice - answer the prompt, let the judge roll your dice")]
#[command(long_about = r#"
Ogiri Dice is a turn-based party game. Each round shows a topic; the
current player types a witty answer before the countdown runs out. A
remote judge scores it from 1 to 6 and the player moves that many cells.

  Blue cell: earn score x 100. Reach the win threshold to win.
  Red cell:  a hidden target 1-4 is drawn; scoring below it costs money.

While playing:
  <text>    submit an answer
  :next     skip to a new topic
  :retry    re-judge the last answer after a failed evaluation
  :cancel   abort the running evaluation
  :quit     leave the game

The judge API key is read from $GEMINI_API_KEY (see judge.api_key_env).

Configuration files are loaded from (in priority order):
1. OGIRI_* environment variables
2. --config <path>     Explicit config file
3. ./ogiri.toml        Project-level config
4. ~/.config/ogiri-dice/config.toml   Global config

Example:
  ogiri-dice --player Alice --player Bob
  ogiri-dice --category "I'd hate a ___ like this" --difficulty hard
"#)]
pub struct Cli {
    /// Player names in turn order (can be specified multiple times)
    #[arg(short, long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Topic category to draw from
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Topic difficulty (easy, normal, hard)
    #[arg(short, long, value_name = "LEVEL")]
    pub difficulty: Option<String>,

    /// Topic catalog JSON (defaults to the bundled topics)
    #[arg(long, value_name = "PATH")]
    pub topics: Option<PathBuf>,

    /// Board JSON (defaults to the bundled board)
    #[arg(long, value_name = "PATH")]
    pub board: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
