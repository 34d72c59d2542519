//! Turn loop: read notation, validate it, apply it, detect the end.

use std::thread;

use log::{debug, info, trace};

use super::{GameConfig, GameObserver, InputSignal, MoveOutcome, NotationSource};
use crate::board::{BoardSnapshot, Color, GameState, Move, MoveError};

/// Where the controller is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Validating,
    Applying,
    EvaluatingTerminal,
    /// Absorbing; carries the winner.
    GameOver(Color),
}

/// Drives a game from a notation source.
pub struct GameController<S> {
    state: GameState,
    source: S,
    config: GameConfig,
    phase: Phase,
}

impl<S: NotationSource> GameController<S> {
    /// Start a game from the initial position.
    pub fn new(source: S, config: GameConfig) -> Self {
        Self::with_state(GameState::new(), source, config)
    }

    /// Continue a game from an existing state.
    pub fn with_state(state: GameState, source: S, config: GameConfig) -> Self {
        let phase = match state.winner() {
            Some(winner) if state.is_done() => Phase::GameOver(winner),
            _ => Phase::AwaitingInput,
        };
        GameController {
            state,
            source,
            config,
            phase,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Read one notation string and process it.
    ///
    /// Rejected notation produces an outcome with `accepted == false` and
    /// leaves the state untouched.
    ///
    /// # Errors
    /// Forwards the source's `InputSignal` when no notation is available.
    pub fn play_turn(&mut self) -> Result<MoveOutcome, InputSignal> {
        if let Phase::GameOver(_) = self.phase {
            return Ok(MoveOutcome::rejected(MoveError::GameOver));
        }
        let notation = self.source.next_notation()?;
        Ok(self.submit(&notation))
    }

    /// Validate and apply a notation string for the side to move.
    pub fn submit(&mut self, notation: &str) -> MoveOutcome {
        if let Phase::GameOver(_) = self.phase {
            return MoveOutcome::rejected(MoveError::GameOver);
        }

        self.set_phase(Phase::Validating);
        let parsed = match self.state.parse_notation(notation) {
            Ok(parsed) => parsed,
            Err(err) => {
                trace!("rejected {notation:?}: {err} ({:?})", err.kind());
                self.set_phase(Phase::AwaitingInput);
                return MoveOutcome::rejected(err);
            }
        };

        match self.apply(parsed.mv) {
            Ok((is_check, is_checkmate)) => {
                MoveOutcome::accepted(&parsed.message, parsed.mv, is_check, is_checkmate)
            }
            Err(err) => {
                self.set_phase(Phase::AwaitingInput);
                MoveOutcome::rejected(err)
            }
        }
    }

    /// Apply a move for the side to move and evaluate the opponent's
    /// position, ending the game on checkmate.
    ///
    /// The move is not validated. Returns `(is_check, is_checkmate)` for the
    /// opponent.
    ///
    /// # Errors
    /// `MoveError::GameOver` once the game has ended, or
    /// `MoveError::EmptyOrigin` when nothing stands on the origin square.
    pub fn apply(&mut self, mv: Move) -> Result<(bool, bool), MoveError> {
        if self.state.is_done() {
            return Err(MoveError::GameOver);
        }

        self.set_phase(Phase::Applying);
        let mover = self.state.active_color();
        self.state.make_move(mv)?;
        debug!("{mover} played {mv}");

        self.set_phase(Phase::EvaluatingTerminal);
        let opponent = mover.opponent();
        let is_check = self.state.is_check(opponent);
        let is_checkmate = is_check && self.state.is_checkmate(opponent);

        if is_checkmate {
            self.state.finish(mover);
            info!("checkmate, {mover} wins on turn {}", self.state.turn() - 1);
            self.set_phase(Phase::GameOver(mover));
        } else {
            self.set_phase(Phase::AwaitingInput);
        }

        Ok((is_check, is_checkmate))
    }

    /// Play until checkmate, reporting each processed input to `observer`.
    ///
    /// Sleeps for the configured turn delay after every input.
    ///
    /// # Errors
    /// Forwards `InputSignal` when the source runs dry or is interrupted;
    /// the state stays at the last applied move.
    pub fn run<O>(&mut self, observer: &mut O) -> Result<Color, InputSignal>
    where
        O: GameObserver + ?Sized,
    {
        loop {
            if let Phase::GameOver(winner) = self.phase {
                observer.on_game_over(&self.snapshot(), winner);
                return Ok(winner);
            }

            self.set_phase(Phase::AwaitingInput);
            let outcome = self.play_turn()?;
            if !self.config.turn_delay.is_zero() {
                thread::sleep(self.config.turn_delay);
            }
            observer.on_turn(&self.snapshot(), &outcome);
        }
    }
}
