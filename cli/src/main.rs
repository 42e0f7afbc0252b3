//! CLI entrypoint for Ogiri Dice
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ogiri_application::{
    BoardGate, EvaluateAnswerUseCase, GameCommand, GameOrchestrator, JudgeGateway,
};
use ogiri_domain::{Player, ThreadGameRng};
use ogiri_infrastructure::{ConfigLoader, FileConfig, GeminiEndpoint, JsonBoardSource, load_topics};
use ogiri_presentation::{Cli, ConsoleSurface, EventPresenter, spawn_stdin_reader};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    let config = apply_cli_overrides(config, &cli);
    config.validate()?;

    let log_guard = init_logging(&cli, &config)?;
    info!("Starting Ogiri Dice");

    // === Dependency Injection ===
    let catalog = Arc::new(
        load_topics(config.assets.topics.as_deref()).context("Failed to load topics")?,
    );
    if catalog.is_empty() {
        bail!("The topic catalog is empty");
    }

    let game_params = config.to_game_params()?;
    let judge_params = config.to_judge_params(|name| std::env::var(name).ok());
    if judge_params.api_key().is_none() {
        println!(
            "Warning: ${} is not set; answers cannot be judged.",
            config.judge.api_key_env
        );
    }

    let endpoint = match config.judge.timeout() {
        Some(timeout) => GeminiEndpoint::with_timeout(timeout)?,
        None => GeminiEndpoint::new(),
    }
    .with_base_url(&config.judge.base_url)
    .with_response_mime_type(&config.judge.response_mime_type);
    let judge = Arc::new(EvaluateAnswerUseCase::new(JudgeGateway::new(
        Arc::new(endpoint),
        judge_params,
    )));

    let board = BoardGate::spawn(
        Arc::new(JsonBoardSource::from_optional(config.assets.board.clone())),
        game_params.board_load_timeout,
    );

    let players = seat_players(&cli.players, config.game.initial_money);
    println!(
        "Ogiri Dice - {} player(s): {}",
        players.len(),
        players
            .iter()
            .map(|p| p.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Type an answer and press Enter. Commands: :next :retry :cancel :quit");

    let mut orchestrator = GameOrchestrator::new(judge, catalog, players, board, game_params)
        .with_surface(Arc::new(ConsoleSurface::new()))
        .with_rng(Box::new(ThreadGameRng));

    let presenter = tokio::spawn(EventPresenter::new().run(orchestrator.subscribe()));

    let (commands_tx, commands_rx) = mpsc::channel::<GameCommand>(16);
    let _reader = spawn_stdin_reader(commands_tx);

    orchestrator.run(commands_rx).await;
    let _ = presenter.await;

    info!("Bye");
    drop(log_guard);
    // A pending stdin read would otherwise hold the runtime open
    std::process::exit(0);
}

/// Command-line flags win over every config source
fn apply_cli_overrides(mut config: FileConfig, cli: &Cli) -> FileConfig {
    if let Some(category) = &cli.category {
        config.game.default_category = category.clone();
    }
    if let Some(difficulty) = &cli.difficulty {
        config.game.default_difficulty = difficulty.clone();
    }
    if let Some(topics) = &cli.topics {
        config.assets.topics = Some(topics.clone());
    }
    if let Some(board) = &cli.board {
        config.assets.board = Some(board.clone());
    }
    config
}

fn seat_players(names: &[String], initial_money: i64) -> Vec<Player> {
    if names.is_empty() {
        return vec![Player::with_money(Player::DEFAULT_NAME, initial_money)];
    }
    names
        .iter()
        .map(|name| Player::with_money(name.as_str(), initial_money))
        .collect()
}

/// Install the tracing subscriber. Logs go to a daily rolling file unless
/// `--log-stderr` is given, since stdout is the game screen.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    if cli.log_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let directory = config.logging.resolved_directory();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::daily(&directory, &config.logging.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
