//! Match orchestration: the menu → play → over state machine.
//!
//! [`GameEngine`] owns the whole match. The player fires synchronously; the
//! opponent's answer is queued on the [`Scheduler`] and only runs once game
//! time is advanced past its due time. Every restart or return to the menu
//! bumps the session generation, which invalidates anything still queued.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{within_bounds, Board},
    common::{Cell, GameError, ShotOutcome},
    config::{fleet_sizes, EngineConfig, BOARD_SIZE},
    placement,
    player::{Opponent, RandomOpponent},
    scheduler::{Action, ScheduledTask, Scheduler},
    snapshot::Snapshot,
};

const MSG_PRESS_START: &str = "Press Start";
const MSG_YOUR_TURN: &str = "Your turn: fire on enemy waters.";
const MSG_REPEAT_CELL: &str = "Already targeted. Choose another enemy cell.";
const MSG_PLAYER_SUNK: &str = "Direct hit. Enemy ship sunk!";
const MSG_PLAYER_HIT: &str = "Direct hit!";
const MSG_PLAYER_MISS: &str = "Miss. Enemy preparing response...";
const MSG_VICTORY: &str = "Victory! Enemy fleet destroyed.";
const MSG_ENEMY_SUNK: &str = "Enemy sunk one of your ships!";
const MSG_ENEMY_HIT: &str = "Enemy scored a hit!";
const MSG_ENEMY_MISS: &str = "Enemy missed. Your turn.";
const MSG_DEFEAT: &str = "Defeat. Your fleet has been sunk.";

/// Overall match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Mode {
    Menu,
    Play,
    Over,
}

/// Side allowed to fire next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Turn {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Winner {
    None,
    Player,
    Enemy,
}

/// State of one match, from start until it is discarded.
#[derive(Debug, Clone)]
pub struct Session {
    player_board: Board,
    enemy_board: Board,
    turn: Turn,
    winner: Winner,
    player_shots: Vec<Cell>,
    enemy_shots: Vec<Cell>,
    hover: Option<Cell>,
}

impl Session {
    fn new(player_board: Board, enemy_board: Board) -> Self {
        Self {
            player_board,
            enemy_board,
            turn: Turn::Player,
            winner: Winner::None,
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            hover: None,
        }
    }

    /// The human player's own board.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The scripted opponent's board.
    pub fn enemy_board(&self) -> &Board {
        &self.enemy_board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Cells the player fired at, in order.
    pub fn player_shots(&self) -> &[Cell] {
        &self.player_shots
    }

    /// Cells the opponent fired at, in order.
    pub fn enemy_shots(&self) -> &[Cell] {
        &self.enemy_shots
    }

    pub fn hover(&self) -> Option<Cell> {
        self.hover
    }
}

/// Commands a presentation layer can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ReturnToMenu,
    Fire { x: usize, y: usize },
    Hover(Option<Cell>),
    AdvanceTime(u64),
}

/// What a [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Started,
    ReturnedToMenu,
    Shot(ShotOutcome),
    HoverChanged,
    TimeAdvanced { fired: usize },
    /// The command was not valid in the current state and changed nothing.
    Ignored,
}

/// Core game logic holding the active match and its pending work.
pub struct GameEngine {
    config: EngineConfig,
    mode: Mode,
    message: &'static str,
    session: Option<Session>,
    generation: u64,
    clock_ms: u64,
    scheduler: Scheduler,
    rng: SmallRng,
    opponent: Box<dyn Opponent>,
}

impl GameEngine {
    /// Engine in the menu, seeded for reproducible matches.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, EngineConfig::default())
    }

    pub fn with_config(seed: u64, config: EngineConfig) -> Self {
        Self {
            config,
            mode: Mode::Menu,
            message: MSG_PRESS_START,
            session: None,
            generation: 0,
            clock_ms: 0,
            scheduler: Scheduler::new(),
            rng: SmallRng::seed_from_u64(seed),
            opponent: Box::new(RandomOpponent::new()),
        }
    }

    /// Engine seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy(config: EngineConfig) -> Self {
        let mut seed_rng = rand::rng();
        let mut engine = Self::with_config(0, config);
        engine.rng = SmallRng::from_rng(&mut seed_rng);
        engine
    }

    /// Replace the opponent policy.
    pub fn with_opponent(mut self, opponent: Box<dyn Opponent>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Side to move; `Player` when no match is active.
    pub fn turn(&self) -> Turn {
        self.session.as_ref().map_or(Turn::Player, |s| s.turn)
    }

    pub fn winner(&self) -> Winner {
        self.session.as_ref().map_or(Winner::None, |s| s.winner)
    }

    /// Latest notice for the player.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Incremented whenever a match starts or is discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Logical game time in milliseconds.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Milliseconds until the next deferred action comes due.
    pub fn next_due_in(&self) -> Option<u64> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.clock_ms))
    }

    /// Dispatch a [`Command`].
    pub fn apply(&mut self, command: Command) -> Result<Event, GameError> {
        let event = match command {
            Command::Start => {
                self.start()?;
                Event::Started
            }
            Command::ReturnToMenu => {
                if self.return_to_menu() {
                    Event::ReturnedToMenu
                } else {
                    Event::Ignored
                }
            }
            Command::Fire { x, y } => match self.fire(x, y)? {
                Some(outcome) => Event::Shot(outcome),
                None => Event::Ignored,
            },
            Command::Hover(cell) => {
                if self.set_hover(cell) {
                    Event::HoverChanged
                } else {
                    Event::Ignored
                }
            }
            Command::AdvanceTime(ms) => Event::TimeAdvanced {
                fired: self.advance_time(ms),
            },
        };
        Ok(event)
    }

    /// Start a fresh match with newly placed fleets.
    ///
    /// Both boards are built before anything is replaced: if placement fails
    /// the engine is left exactly as it was and the error is returned.
    pub fn start(&mut self) -> Result<(), GameError> {
        let sizes = fleet_sizes();
        let attempts = self.config.placement_attempts;
        let mut player_rng = SmallRng::from_rng(&mut self.rng);
        let mut enemy_rng = SmallRng::from_rng(&mut self.rng);
        let player_board = placement::random_board(&sizes, &mut player_rng, attempts)?;
        let enemy_board = placement::random_board(&sizes, &mut enemy_rng, attempts)?;
        self.start_with_boards(player_board, enemy_board);
        Ok(())
    }

    /// Start a fresh match on the given boards.
    pub fn start_with_boards(&mut self, player_board: Board, enemy_board: Board) {
        self.generation += 1;
        self.scheduler.clear();
        self.session = Some(Session::new(player_board, enemy_board));
        self.mode = Mode::Play;
        self.message = MSG_YOUR_TURN;
        info!("match {} started", self.generation);
    }

    /// Leave a finished match. Ignored unless the mode is `Over`.
    pub fn return_to_menu(&mut self) -> bool {
        if self.mode != Mode::Over {
            return false;
        }
        self.generation += 1;
        self.scheduler.clear();
        self.session = None;
        self.mode = Mode::Menu;
        self.message = MSG_PRESS_START;
        true
    }

    /// The player fires at (x, y) on the enemy board.
    ///
    /// Returns `Ok(None)` when it is not the player's move. A duplicate shot
    /// returns its outcome but keeps the turn; any other shot either ends the
    /// match or hands the turn to the opponent, whose answer is scheduled
    /// `response_delay_ms` later.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<Option<ShotOutcome>, GameError> {
        if !within_bounds(x, y, BOARD_SIZE) {
            return Err(GameError::InvalidShotTarget { x, y });
        }
        if self.mode != Mode::Play {
            return Ok(None);
        }
        let session = match self.session.as_mut() {
            Some(s) if s.turn == Turn::Player => s,
            _ => return Ok(None),
        };

        let outcome = session.enemy_board.resolve_shot(x, y)?;
        if outcome.duplicate {
            debug!("player repeated shot at ({}, {})", x, y);
            self.message = MSG_REPEAT_CELL;
            return Ok(Some(outcome));
        }
        session.player_shots.push(Cell::new(x, y));
        debug!("player fired at ({}, {}): {:?}", x, y, outcome);
        self.message = match (outcome.hit, outcome.sunk) {
            (true, true) => MSG_PLAYER_SUNK,
            (true, false) => MSG_PLAYER_HIT,
            _ => MSG_PLAYER_MISS,
        };

        if session.enemy_board.all_sunk() {
            session.winner = Winner::Player;
            self.mode = Mode::Over;
            self.message = MSG_VICTORY;
            info!(
                "match {} won by player after {} shots",
                self.generation,
                session.player_shots.len()
            );
            return Ok(Some(outcome));
        }

        session.turn = Turn::Enemy;
        self.scheduler.schedule(
            self.clock_ms.saturating_add(self.config.response_delay_ms),
            self.generation,
            Action::EnemyTurn,
        );
        Ok(Some(outcome))
    }

    /// Record the cell under the pointer. Only tracked during play; off-board
    /// cells clear it.
    pub fn set_hover(&mut self, cell: Option<Cell>) -> bool {
        if self.mode != Mode::Play {
            return false;
        }
        match self.session.as_mut() {
            Some(session) => {
                session.hover = cell.filter(|c| within_bounds(c.x, c.y, BOARD_SIZE));
                true
            }
            None => false,
        }
    }

    /// Advance game time by `ms` and run every deferred action that comes due,
    /// in due order. Returns how many actions took effect.
    pub fn advance_time(&mut self, ms: u64) -> usize {
        let target = self.clock_ms.saturating_add(ms);
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(target) {
            self.clock_ms = self.clock_ms.max(task.due_ms);
            if self.run_task(task) {
                fired += 1;
            }
        }
        self.clock_ms = target;
        fired
    }

    fn run_task(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.generation {
            debug!(
                "discarding {:?} from match {} (current {})",
                task.action, task.generation, self.generation
            );
            return false;
        }
        match task.action {
            Action::EnemyTurn => self.enemy_turn(),
        }
    }

    fn enemy_turn(&mut self) -> bool {
        if self.mode != Mode::Play {
            return false;
        }
        let session = match self.session.as_mut() {
            Some(s) if s.turn == Turn::Enemy => s,
            _ => return false,
        };

        let target = match self
            .opponent
            .select_target(&mut self.rng, &session.player_board)
        {
            Some(cell) => cell,
            None => {
                warn!("opponent has no cell left to fire at");
                return false;
            }
        };
        let outcome = match session.player_board.resolve_shot(target.x, target.y) {
            Ok(outcome) if !outcome.duplicate => outcome,
            Ok(_) | Err(_) => {
                warn!("opponent chose an unusable cell ({}, {})", target.x, target.y);
                return false;
            }
        };
        session.enemy_shots.push(target);
        self.opponent.handle_shot_result(target, outcome);
        debug!("enemy fired at ({}, {}): {:?}", target.x, target.y, outcome);
        self.message = match (outcome.hit, outcome.sunk) {
            (true, true) => MSG_ENEMY_SUNK,
            (true, false) => MSG_ENEMY_HIT,
            _ => MSG_ENEMY_MISS,
        };

        if session.player_board.all_sunk() {
            session.winner = Winner::Enemy;
            self.mode = Mode::Over;
            self.message = MSG_DEFEAT;
            info!(
                "match {} won by enemy after {} shots",
                self.generation,
                session.enemy_shots.len()
            );
            return true;
        }
        session.turn = Turn::Player;
        true
    }

    /// Read-out of the current state. Never mutates.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.mode, self.message, self.session.as_ref())
    }

    /// The read-out serialized as JSON.
    #[cfg(feature = "std")]
    pub fn render_to_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}
