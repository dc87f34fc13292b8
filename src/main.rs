//! Line-oriented text driver.
//!
//! Reads one command per line from stdin:
//! - a coordinate move such as `e2e4` (a trailing `q` is accepted),
//! - `undo`, `moves`, `board`, `new` or `quit`.

use std::io::{self, BufRead, Write};

use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::utils::algebraic::parse_coordinate_move;

fn report_status(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    if game.is_checkmate() {
        writeln!(out, "checkmate, {} wins", game.side_to_move().opposite())
    } else if game.is_stalemate() {
        writeln!(out, "stalemate")
    } else if game.in_check() {
        writeln!(out, "{} is in check", game.side_to_move())
    } else {
        Ok(())
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut game = GameState::new_game();

    writeln!(out, "{game}")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "board" => writeln!(out, "{game}")?,
            "new" => {
                game = GameState::new_game();
                writeln!(out, "{game}")?;
            }
            "moves" => {
                let moves: Vec<String> = game
                    .get_valid_moves()
                    .iter()
                    .map(|m| m.to_string())
                    .collect();
                writeln!(out, "{} legal: {}", moves.len(), moves.join(" "))?;
            }
            "undo" => match game.undo_move() {
                Some(mv) => writeln!(out, "took back {mv}\n{game}")?,
                None => writeln!(out, "nothing to undo")?,
            },
            text => match parse_coordinate_move(text).and_then(|(start, end)| game.try_move(start, end)) {
                Ok(mv) => {
                    writeln!(out, "played {mv}\n{game}")?;
                    report_status(&mut out, &game)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }
        out.flush()?;
    }

    Ok(())
}
