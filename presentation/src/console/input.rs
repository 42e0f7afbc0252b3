//! Line input: answers and `:` commands

use ogiri_application::GameCommand;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Interpret one input line. Blank lines and unknown `:` commands yield
/// `None`; anything else is an answer.
pub fn parse_command(line: &str) -> Option<GameCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with(':') {
        return Some(GameCommand::Submit(trimmed.to_string()));
    }
    match trimmed.to_ascii_lowercase().as_str() {
        ":next" | ":n" => Some(GameCommand::NextTopic),
        ":retry" | ":r" => Some(GameCommand::Retry),
        ":cancel" | ":c" => Some(GameCommand::CancelEvaluation),
        ":quit" | ":q" | ":exit" => Some(GameCommand::Quit),
        other => {
            debug!("Unknown command {}", other);
            None
        }
    }
}

/// Forward stdin lines as commands until `:quit`, end of input, or the
/// game stops listening.
pub fn spawn_stdin_reader(commands: mpsc::Sender<GameCommand>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = parse_command(&line) else {
                        if line.trim().starts_with(':') {
                            println!("Commands: :next :retry :cancel :quit");
                        }
                        continue;
                    };
                    let quit = command == GameCommand::Quit;
                    if commands.send(command).await.is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {
                    let _ = commands.send(GameCommand::Quit).await;
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    let _ = commands.send(GameCommand::Quit).await;
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(parse_command(":next"), Some(GameCommand::NextTopic));
        assert_eq!(parse_command(" :RETRY "), Some(GameCommand::Retry));
        assert_eq!(parse_command(":c"), Some(GameCommand::CancelEvaluation));
        assert_eq!(parse_command(":q"), Some(GameCommand::Quit));
    }

    #[test]
    fn test_answers_and_noise() {
        assert_eq!(
            parse_command("  a boss who claps  "),
            Some(GameCommand::Submit("a boss who claps".to_string()))
        );
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command(":dance"), None);
    }
}
