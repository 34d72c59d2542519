//! Interactive game flow on top of the board rules.
//!
//! A `GameController` pulls notation from a `NotationSource`, validates it
//! against the current `GameState`, applies accepted moves and reports each
//! step to a `GameObserver`.
//!
//! # Example
//! ```
//! use chess_rules::board::Color;
//! use chess_rules::game::{GameConfig, GameController, ScriptedSource};
//!
//! let source = ScriptedSource::new(["f3", "e5", "g4", "Qh4#"]);
//! let mut game = GameController::new(source, GameConfig::default());
//! assert_eq!(game.run(&mut ()), Ok(Color::Black));
//! ```

mod config;
mod controller;
mod input;
mod outcome;

pub use config::{ConfigError, GameConfig};
pub use controller::{GameController, Phase};
pub use input::{
    spawn_line_reader, ChannelSource, InputEvent, InputSignal, LineSource, NotationSource,
    ScriptedSource,
};
pub use outcome::{GameObserver, MoveOutcome};
