//! Game Orchestrator
//!
//! The round state machine. All game state is mutated here, on one control
//! flow; evaluation runs in spawned tasks whose results come back through
//! a channel tagged with an attempt id, so a superseded attempt can never
//! be applied.
//!
//! ```text
//! AwaitingInput ──submit/timeout──▶ Evaluating ──result──▶ ShowingResult
//!       ▲                              │                        │
//!       └──────────cancel/abort────────┘                        │
//!       └──────────────────────next topic───────────────────────┘
//! ```
//!
//! | Entering      | input | loading | result | countdown |
//! |---------------|-------|---------|--------|-----------|
//! | AwaitingInput | on    | hide    | hide   | restart   |
//! | Evaluating    | off   | show    | hide   | stop      |
//! | ShowingResult | off   | hide    | show   | stop      |

mod evaluation;
mod events;
mod transitions;
mod types;


pub use types::GameCommand;

use crate::config::GameParams;
use crate::ports::game_event::GameEvent;
use crate::ports::game_surface::{GameSurface, NoGameSurface};
use crate::ports::judge::Judge;
use crate::use_cases::board_gate::BoardGate;
use crate::use_cases::movement::MovementExecutor;
use events::EventHub;
use ogiri_domain::{
    BoardLoadState, Countdown, Difficulty, GameRng, GameState, NoTopicAvailable, Player,
    ThreadGameRng, Topic, TopicCatalog, TurnSequencer,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use types::{EvaluationCompletion, InFlight, LoopEvent};

pub struct GameOrchestrator<J: Judge + 'static> {
    judge: Arc<J>,
    surface: Arc<dyn GameSurface>,
    events: EventHub,
    catalog: Arc<TopicCatalog>,
    rng: Box<dyn GameRng>,
    params: GameParams,
    movement: MovementExecutor,
    board: BoardGate,
    turns: TurnSequencer,
    countdown: Countdown,
    /// Last frame the countdown was advanced to
    frame_clock: Instant,
    state: GameState,
    current_topic: Option<Topic>,
    last_answer: Option<String>,
    last_result_failed: bool,
    /// Set once the countdown has fired in the current AwaitingInput cycle
    timeout_latch: bool,
    in_flight: Option<InFlight>,
    next_attempt: u64,
    completions_tx: mpsc::UnboundedSender<EvaluationCompletion>,
    completions_rx: mpsc::UnboundedReceiver<EvaluationCompletion>,
    game_over: bool,
    board_failure_reported: bool,
}

impl<J: Judge + 'static> GameOrchestrator<J> {
    pub fn new(
        judge: Arc<J>,
        catalog: Arc<TopicCatalog>,
        players: Vec<Player>,
        board: BoardGate,
        params: GameParams,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            judge,
            surface: Arc::new(NoGameSurface),
            events: EventHub::default(),
            catalog,
            rng: Box::new(ThreadGameRng),
            movement: MovementExecutor::new(params.move_interval),
            countdown: Countdown::new(params.countdown),
            params,
            board,
            turns: TurnSequencer::new(players),
            frame_clock: Instant::now(),
            state: GameState::AwaitingInput,
            current_topic: None,
            last_answer: None,
            last_result_failed: false,
            timeout_latch: false,
            in_flight: None,
            next_attempt: 0,
            completions_tx,
            completions_rx,
            game_over: false,
            board_failure_reported: false,
        }
    }

    pub fn with_surface(mut self, surface: Arc<dyn GameSurface>) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_rng(mut self, rng: Box<dyn GameRng>) -> Self {
        self.rng = rng;
        self
    }

    // ==================== Queries ====================

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.current_topic.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        self.turns.players()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.turns.current()
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }

    pub fn is_evaluating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn board_state(&self) -> BoardLoadState {
        self.board.state()
    }

    /// Receive every future event, starting with the current topic, state,
    /// and player.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let mut initial = vec![
            GameEvent::TopicChanged(self.current_topic.clone()),
            GameEvent::StateChanged(self.state),
        ];
        if let (Some(index), Some(player)) = (self.turns.current_index(), self.turns.current()) {
            initial.push(GameEvent::TurnChanged {
                index,
                player: player.clone(),
            });
        }
        self.events.subscribe(initial)
    }

    // ==================== Operations ====================

    /// Announce the first player, pick the first topic, and open input.
    pub fn start(&mut self) {
        match (self.turns.current_index(), self.turns.current()) {
            (Some(index), Some(player)) => {
                info!("Game starts with {} player(s)", self.turns.players().len());
                self.events.publish(GameEvent::TurnChanged {
                    index,
                    player: player.clone(),
                });
            }
            _ => warn!("Game starts with no players seated"),
        }

        if let Err(e) = self.pick_next_topic(None, None) {
            debug!("Starting without a topic: {}", e);
        }
        self.enter_awaiting_input();
    }

    /// Pick a topic matching the filters (configured defaults when `None`).
    /// On failure the current topic is kept.
    pub fn pick_next_topic(
        &mut self,
        category: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Result<Topic, NoTopicAvailable> {
        let category = category.unwrap_or(self.params.default_category.as_str());
        let difficulty = difficulty.unwrap_or(self.params.default_difficulty);

        match self.catalog.pick(category, difficulty, self.rng.as_mut()) {
            Ok(topic) => {
                info!("Topic: [{}] {}", topic.id, topic.prompt);
                self.current_topic = Some(topic.clone());
                self.last_answer = None;
                self.last_result_failed = false;
                self.events
                    .publish(GameEvent::TopicChanged(Some(topic.clone())));
                Ok(topic)
            }
            Err(e) => {
                warn!("{}", e);
                self.events.publish(GameEvent::TopicUnavailable(e.clone()));
                Err(e)
            }
        }
    }

    /// Abandon whatever is in progress and start a fresh round.
    pub fn next_round(&mut self) -> Result<(), NoTopicAvailable> {
        if self.game_over {
            debug!("Next topic ignored: game is over");
            return Ok(());
        }
        if self.cancel_in_flight() {
            self.events.publish(GameEvent::EvaluationCancelled);
        }

        let picked = self.pick_next_topic(None, None);
        self.surface.clear_answer();
        self.enter_awaiting_input();
        picked.map(|_| ())
    }

    /// Submit `answer` for evaluation. Returns whether it was accepted.
    pub fn submit(&mut self, answer: &str) -> bool {
        let answer = answer.trim();
        if answer.is_empty() {
            debug!("Ignoring empty answer");
            return false;
        }
        if !self.can_start_evaluation() {
            debug!("Ignoring answer in state {}", self.state);
            return false;
        }
        self.begin_evaluation(answer.to_string())
    }

    /// The countdown ran out: submit "no answer", once per input cycle.
    pub fn handle_timeout(&mut self) -> bool {
        if self.timeout_latch || !self.can_start_evaluation() {
            return false;
        }
        self.timeout_latch = true;
        info!("Time is up; submitting no answer");
        self.begin_evaluation(String::new())
    }

    /// Re-evaluate the recorded answer. Refused while an evaluation is in
    /// flight and after a successful judgment has been shown.
    pub fn retry(&mut self) -> bool {
        if self.game_over || self.in_flight.is_some() {
            return false;
        }
        if self.state == GameState::ShowingResult && !self.last_result_failed {
            debug!("Retry ignored: last result was not a failure");
            return false;
        }
        let Some(answer) = self.last_answer.clone() else {
            debug!("Retry ignored: no answer recorded");
            return false;
        };
        info!("Retrying evaluation");
        self.begin_evaluation(answer)
    }

    /// Abort the in-flight evaluation and reopen input.
    pub fn cancel_evaluation(&mut self) -> bool {
        if !self.cancel_in_flight() {
            return false;
        }
        self.events.publish(GameEvent::EvaluationCancelled);
        self.enter_awaiting_input();
        true
    }

    /// Drive the game until [`GameCommand::Quit`] or every command sender
    /// is dropped.
    pub async fn run(mut self, mut commands: mpsc::Receiver<GameCommand>) {
        self.start();

        let mut frames = tokio::time::interval(self.params.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let event = tokio::select! {
                biased;
                command = commands.recv() => {
                    LoopEvent::Command(command.unwrap_or(GameCommand::Quit))
                }
                Some(completion) = self.completions_rx.recv() => LoopEvent::Completion(completion),
                state = self.board.changed(), if self.board.is_loading() => LoopEvent::Board(state),
                now = frames.tick() => LoopEvent::Frame(now),
            };

            match event {
                LoopEvent::Command(GameCommand::Quit) => break,
                LoopEvent::Command(command) => self.handle_command(command),
                LoopEvent::Completion(completion) => self.handle_completion(completion).await,
                LoopEvent::Board(state) => self.handle_board_state(state),
                LoopEvent::Frame(now) => self.advance_countdown_to(now),
            }
        }

        if self.cancel_in_flight() {
            debug!("Cancelled in-flight evaluation on shutdown");
        }
        info!("Game loop stopped");
    }

    fn handle_command(&mut self, command: GameCommand) {
        debug!("Command: {:?}", command);
        match command {
            GameCommand::Submit(answer) => {
                self.submit(&answer);
            }
            GameCommand::Retry => {
                self.retry();
            }
            GameCommand::NextTopic => {
                if let Err(e) = self.next_round() {
                    debug!("Next round keeps the current topic: {}", e);
                }
            }
            GameCommand::CancelEvaluation => {
                self.cancel_evaluation();
            }
            GameCommand::Quit => {}
        }
    }

    fn handle_board_state(&mut self, state: BoardLoadState) {
        match state {
            BoardLoadState::Loaded(board) => {
                self.events.publish(GameEvent::BoardReady {
                    cells: board.cell_count(),
                });
            }
            BoardLoadState::Failed(e) => self.report_board_failure(e),
            BoardLoadState::Loading => {}
        }
    }

    fn can_start_evaluation(&self) -> bool {
        !self.game_over && self.state.accepts_input() && self.in_flight.is_none()
    }
}
