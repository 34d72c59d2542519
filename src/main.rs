use std::io::{self, Write as _};
use std::process::ExitCode;

use clap::Parser;

use chess_rules::board::{BoardSnapshot, Color, Piece, Square};
use chess_rules::game::{
    spawn_line_reader, ChannelSource, GameConfig, GameController, GameObserver, InputEvent,
    InputSignal, MoveOutcome,
};

#[derive(Parser, Debug)]
#[command(version, about = "Two-player chess in the terminal", long_about = None)]
struct Args {
    /// Seconds to pause after each move before redrawing the board
    #[arg(value_name = "SLEEP_TIME", value_parser = parse_delay)]
    sleep_time: Option<GameConfig>,
}

fn parse_delay(value: &str) -> Result<GameConfig, String> {
    let seconds: f64 = value.parse().map_err(|e| format!("{e}"))?;
    GameConfig::from_seconds(seconds).map_err(|e| e.to_string())
}

/// Two columns of captured pieces, eight per column.
fn push_captures(out: &mut String, captures: &[Piece], row: usize) {
    for column in 0..2 {
        out.push(captures.get(row + 8 * column).map_or(' ', Piece::symbol));
        out.push(' ');
    }
}

fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::from(" caps   a b c d e f g h    caps\n");
    for (row, rank) in (0..8).rev().enumerate() {
        out.push(' ');
        push_captures(&mut out, snapshot.captures(Color::White), row);
        out.push_str("   ");
        for file in 0..8 {
            let cell = snapshot
                .piece_at(Square(rank, file))
                .map_or('.', Piece::symbol);
            out.push(cell);
            out.push(' ');
        }
        out.push_str(&format!("{}   ", rank + 1));
        push_captures(&mut out, snapshot.captures(Color::Black), row);
        out.push('\n');
    }
    out
}

fn print_game(snapshot: &BoardSnapshot, message: &str) {
    println!("{}", render(snapshot));
    println!(" {message}");
}

fn prompt(color: Color) {
    print!(" {color} move: ");
    if let Err(e) = io::stdout().flush() {
        log::warn!("failed to flush prompt: {e}");
    }
}

struct Terminal;

impl GameObserver for Terminal {
    fn on_turn(&mut self, snapshot: &BoardSnapshot, outcome: &MoveOutcome) {
        print_game(snapshot, &outcome.message);
        if !snapshot.done {
            prompt(snapshot.active_color);
        }
    }

    fn on_game_over(&mut self, snapshot: &BoardSnapshot, winner: Color) {
        log::info!("{winner} wins after {} turns", snapshot.turn - 1);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .write_style(env_logger::WriteStyle::Never)
        .init();

    let config = args.sleep_time.unwrap_or_default();
    let (events, source) = crossbeam_channel::unbounded();
    let interrupt = events.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        if interrupt.send(InputEvent::Interrupt).is_err() {
            log::debug!("interrupt after the game loop stopped reading");
        }
    }) {
        log::warn!("failed to set Ctrl-C handler: {e}");
    }
    spawn_line_reader(io::BufReader::new(io::stdin()), events);
    let mut game = GameController::new(ChannelSource::new(source), config);

    let snapshot = game.snapshot();
    print_game(&snapshot, "");
    prompt(snapshot.active_color);

    match game.run(&mut Terminal) {
        Ok(_) => ExitCode::SUCCESS,
        Err(InputSignal::EndOfInput | InputSignal::Interrupted) => {
            println!("\n Quitting...");
            ExitCode::SUCCESS
        }
    }
}
