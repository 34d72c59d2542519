//! Whole games driven through the controller from a JSON script.

use chess_rules::board::{BoardSnapshot, Color, Square};
use chess_rules::game::{
    ChannelSource, GameConfig, GameController, GameObserver, InputEvent, InputSignal, LineSource,
    MoveOutcome, ScriptedSource,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
struct Turn {
    input: String,
    accepted: bool,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ScriptedGame {
    name: String,
    turns: Vec<Turn>,
    winner: Option<String>,
    /// Square to piece symbol (uppercase White, lowercase Black).
    pieces: BTreeMap<String, char>,
    empty: Vec<String>,
}

fn load_games() -> Vec<ScriptedGame> {
    serde_json::from_str(include_str!("data/games.json")).expect("games.json is valid")
}

#[derive(Default)]
struct Recorder {
    outcomes: Vec<MoveOutcome>,
    game_over: Option<(Color, u32)>,
}

impl GameObserver for Recorder {
    fn on_turn(&mut self, _snapshot: &BoardSnapshot, outcome: &MoveOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn on_game_over(&mut self, snapshot: &BoardSnapshot, winner: Color) {
        self.game_over = Some((winner, snapshot.turn));
    }
}

fn square(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn test_scripted_games() {
    for game in load_games() {
        let inputs: Vec<&str> = game.turns.iter().map(|t| t.input.as_str()).collect();
        let mut controller =
            GameController::new(ScriptedSource::new(inputs), GameConfig::default());
        let mut recorder = Recorder::default();
        let result = controller.run(&mut recorder);

        assert_eq!(recorder.outcomes.len(), game.turns.len(), "{}", game.name);
        for (turn, outcome) in game.turns.iter().zip(&recorder.outcomes) {
            assert_eq!(outcome.accepted, turn.accepted, "{}: {}", game.name, turn.input);
            assert_eq!(outcome.message, turn.message, "{}: {}", game.name, turn.input);
        }

        let state = controller.state();
        match &game.winner {
            Some(winner) => {
                let color = result.expect("game finished");
                assert_eq!(color.name(), winner.as_str(), "{}", game.name);
                assert!(state.is_done());
                assert_eq!(recorder.game_over.map(|(c, _)| c), Some(color));
            }
            None => {
                assert_eq!(result, Err(InputSignal::EndOfInput), "{}", game.name);
                assert!(!state.is_done());
                assert!(recorder.game_over.is_none());
            }
        }

        for (name, symbol) in &game.pieces {
            let piece = state.piece_at(square(name));
            assert_eq!(piece.map(|p| p.symbol()), Some(*symbol), "{}: {name}", game.name);
        }
        for name in &game.empty {
            assert!(state.piece_at(square(name)).is_none(), "{}: {name}", game.name);
        }
    }
}

#[test]
fn test_fools_mate_from_text_input() {
    let input = Cursor::new("f3\ne5\ng4\nQh4#\n");
    let mut controller = GameController::new(LineSource::new(input), GameConfig::default());
    assert_eq!(controller.run(&mut ()), Ok(Color::Black));

    let state = controller.state();
    assert_eq!(state.winner(), Some(Color::Black));
    assert_eq!(state.piece_at(square("h4")).map(|p| p.symbol()), Some('q'));
    assert_eq!(state.piece_at(square("f3")).map(|p| p.symbol()), Some('P'));
    assert_eq!(state.piece_at(square("g4")).map(|p| p.symbol()), Some('P'));
    assert!(state.piece_at(square("g2")).is_none());
    assert_eq!(state.king_square(Color::White), square("e1"));
}

#[test]
fn test_interrupted_input_keeps_state() {
    let (events, receiver) = crossbeam_channel::unbounded();
    for notation in ["d4", "d5"] {
        events.send(InputEvent::Line(notation.to_string())).unwrap();
    }
    events.send(InputEvent::Interrupt).unwrap();

    let mut controller = GameController::new(ChannelSource::new(receiver), GameConfig::default());
    assert_eq!(controller.run(&mut ()), Err(InputSignal::Interrupted));
    assert_eq!(controller.state().turn(), 3);
    assert_eq!(controller.state().active_color(), Color::White);

    // The sender is still open, so later input continues the same game.
    events.send(InputEvent::Line("e4".to_string())).unwrap();
    assert!(controller.play_turn().unwrap().accepted);
    assert_eq!(controller.state().active_color(), Color::Black);
}

#[test]
fn test_snapshot_tracks_captures() {
    let mut controller = GameController::new(ScriptedSource::default(), GameConfig::default());
    for notation in ["e4", "d5", "exd5", "Qxd5"] {
        assert!(controller.submit(notation).accepted, "{notation}");
    }
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.captures(Color::White).len(), 1);
    assert_eq!(snapshot.captures(Color::Black).len(), 1);
    assert_eq!(snapshot.active_color, Color::White);
    assert_eq!(snapshot.turn, 5);
}
