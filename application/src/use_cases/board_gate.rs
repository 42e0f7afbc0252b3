//! Board gate
//!
//! Board data arrives asynchronously. The gate tracks the
//! loading/loaded/failed state and lets the orchestrator wait for it, up to
//! a fixed budget, before moving anyone. A timed-out wait is terminal for
//! the session.

use crate::ports::board_source::BoardSource;
use ogiri_domain::{Board, BoardLoadError, BoardLoadState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

const LOADER_STOPPED: &str = "board loader stopped";

pub struct BoardGate {
    rx: watch::Receiver<BoardLoadState>,
    timeout: Duration,
    /// Terminal state, once known
    settled: Option<BoardLoadState>,
}

impl BoardGate {
    /// Start loading from `source` in the background.
    pub fn spawn<S: BoardSource + ?Sized + 'static>(source: Arc<S>, timeout: Duration) -> Self {
        let (tx, rx) = watch::channel(BoardLoadState::Loading);
        tokio::spawn(async move {
            let state = BoardLoadState::from(source.load_board().await);
            match &state {
                BoardLoadState::Loaded(board) => {
                    info!("Board loaded with {} cells", board.cell_count())
                }
                BoardLoadState::Failed(e) => warn!("Board load failed: {}", e),
                BoardLoadState::Loading => {}
            }
            // The gate may already be gone
            let _ = tx.send(state);
        });
        Self::new(rx, timeout)
    }

    /// Gate fed by an external loader through `rx`.
    pub fn new(rx: watch::Receiver<BoardLoadState>, timeout: Duration) -> Self {
        Self {
            rx,
            timeout,
            settled: None,
        }
    }

    /// Gate over an already-loaded board.
    pub fn loaded(board: Board) -> Self {
        let state = BoardLoadState::from(Ok(board));
        let (_tx, rx) = watch::channel(state.clone());
        Self {
            rx,
            timeout: Duration::ZERO,
            settled: Some(state),
        }
    }

    pub fn state(&self) -> BoardLoadState {
        match &self.settled {
            Some(state) => state.clone(),
            None => self.rx.borrow().clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.settled.is_none() && self.rx.borrow().is_loading()
    }

    /// Wait for the next state change. Cancel-safe.
    pub async fn changed(&mut self) -> BoardLoadState {
        if let Some(state) = &self.settled {
            return state.clone();
        }
        if self.rx.changed().await.is_err() && self.rx.borrow().is_loading() {
            return self.settle(BoardLoadState::Failed(BoardLoadError::Source(
                LOADER_STOPPED.to_string(),
            )));
        }
        let state = self.rx.borrow_and_update().clone();
        if state.is_loading() {
            return state;
        }
        self.settle(state)
    }

    /// Wait until loading finishes, at most the configured budget.
    pub async fn ready(&mut self) -> BoardLoadState {
        if let Some(state) = &self.settled {
            return state.clone();
        }

        let waited = tokio::time::timeout(
            self.timeout,
            self.rx.wait_for(|state| !state.is_loading()),
        )
        .await
        .map(|r| r.map(|state| state.clone()));

        let state = match waited {
            Ok(Ok(state)) => state,
            Ok(Err(_)) => {
                BoardLoadState::Failed(BoardLoadError::Source(LOADER_STOPPED.to_string()))
            }
            Err(_) => {
                warn!(
                    "Board did not load within {:?}; movement disabled",
                    self.timeout
                );
                BoardLoadState::Failed(BoardLoadError::TimedOut(self.timeout))
            }
        };
        self.settle(state)
    }

    fn settle(&mut self, state: BoardLoadState) -> BoardLoadState {
        self.settled = Some(state.clone());
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ogiri_domain::{BoardCell, CellType};

    fn board(n: usize) -> Board {
        Board::new(
            (0..n)
                .map(|i| BoardCell::new(format!("c{i}"), i, CellType::Normal, ""))
                .collect(),
        )
    }

    struct SlowSource {
        delay: Duration,
        result: Result<usize, BoardLoadError>,
    }

    #[async_trait]
    impl BoardSource for SlowSource {
        async fn load_board(&self) -> Result<Board, BoardLoadError> {
            tokio::time::sleep(self.delay).await;
            self.result.clone().map(board)
        }
    }

    fn source(delay_ms: u64, result: Result<usize, BoardLoadError>) -> Arc<SlowSource> {
        Arc::new(SlowSource {
            delay: Duration::from_millis(delay_ms),
            result,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_waits_for_load() {
        let mut gate = BoardGate::spawn(source(500, Ok(5)), Duration::from_secs(10));
        assert!(gate.is_loading());

        let state = gate.ready().await;
        assert_eq!(state.board().map(|b| b.cell_count()), Some(5));
        assert!(!gate.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_permanent() {
        let mut gate = BoardGate::spawn(source(60_000, Ok(5)), Duration::from_secs(10));

        let state = gate.ready().await;
        assert!(matches!(
            state,
            BoardLoadState::Failed(BoardLoadError::TimedOut(_))
        ));

        // A late board never revives movement
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(gate.state().is_failed());
        assert!(gate.ready().await.is_failed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_source_failure() {
        let mut gate = BoardGate::spawn(
            source(10, Err(BoardLoadError::Source("missing file".to_string()))),
            Duration::from_secs(10),
        );
        assert_eq!(
            gate.ready().await,
            BoardLoadState::Failed(BoardLoadError::Source("missing file".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_board_is_failure() {
        let mut gate = BoardGate::spawn(source(10, Ok(0)), Duration::from_secs(10));
        assert_eq!(
            gate.ready().await,
            BoardLoadState::Failed(BoardLoadError::Empty)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_reports_completion() {
        let mut gate = BoardGate::spawn(source(100, Ok(3)), Duration::from_secs(10));
        let state = gate.changed().await;
        assert!(state.board().is_some());
        assert!(!gate.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_loader_fails() {
        let (tx, rx) = watch::channel(BoardLoadState::Loading);
        let mut gate = BoardGate::new(rx, Duration::from_secs(10));
        drop(tx);

        assert!(gate.changed().await.is_failed());
        assert!(gate.ready().await.is_failed());
    }

    #[tokio::test]
    async fn test_loaded_helper() {
        let mut gate = BoardGate::loaded(board(4));
        assert!(!gate.is_loading());
        assert_eq!(gate.ready().await.board().map(|b| b.cell_count()), Some(4));
    }
}
