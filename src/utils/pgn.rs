//! Move-history text export.
//!
//! Produces the numbered move-pair list shown next to the board and a
//! PGN-style document with a dated header block. Move text uses the game's
//! display notation, so the output is meant for reading, not for replay in
//! other tools.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game::chess_game::{ChessGame, MoveRecord};
use crate::game_state::chess_types::Outcome;

/// `["1. e4 e5", "2. Nf3"]` style pairs.
pub fn move_pairs(history: &[MoveRecord]) -> Vec<String> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white.notation, black.notation),
            [white] => format!("{}. {}", i + 1, white.notation),
            _ => String::new(),
        })
        .collect()
}

pub fn result_token(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::WhiteWins) => "1-0",
        Some(Outcome::BlackWins) => "0-1",
        Some(Outcome::Draw) => "1/2-1/2",
        None => "*",
    }
}

/// Export `game` stamped with today's local date.
pub fn write_pgn(game: &ChessGame) -> String {
    write_pgn_dated(game, Local::now().date_naive())
}

pub fn write_pgn_dated(game: &ChessGame, date: NaiveDate) -> String {
    let result = result_token(game.outcome());
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Hub Chess Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("Round", "-".to_owned());
    headers.insert("White", "White".to_owned());
    headers.insert("Black", "Black".to_owned());
    headers.insert("Result", result.to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext = move_pairs(game.history());
    movetext.push(result.to_owned());
    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::chess_game::GameConfig;

    fn fools_mate() -> ChessGame {
        let mut game = ChessGame::new(GameConfig::default());
        for (fr, fc, tr, tc) in [(6, 5, 5, 5), (1, 4, 3, 4), (6, 6, 4, 6), (0, 3, 4, 7)] {
            game.play(fr, fc, tr, tc).expect("fool's mate line is legal");
        }
        game
    }

    #[test]
    fn pairs_number_full_and_half_moves() {
        let mut game = ChessGame::new(GameConfig::default());
        game.play(6, 4, 4, 4).expect("e4");
        game.play(1, 4, 3, 4).expect("e5");
        game.play(7, 6, 5, 5).expect("Nf3");
        assert_eq!(move_pairs(game.history()), vec!["1. e4 e5", "2. Nf3"]);
    }

    #[test]
    fn finished_game_exports_headers_and_result() {
        let game = fools_mate();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let pgn = write_pgn_dated(&game, date);
        assert!(pgn.contains("[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[Result \"0-1\"]\n"));
        assert!(pgn.ends_with("1. f3 e5 2. g4 Qh4 0-1\n"));
    }

    #[test]
    fn running_game_has_open_result() {
        assert_eq!(result_token(None), "*");
        let pgn = write_pgn(&ChessGame::default());
        assert!(pgn.ends_with("\n*\n"));
    }
}
