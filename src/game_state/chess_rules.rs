//! Canonical chess-rule constants.
//!
//! Castling and en passant are not part of the rule set, so the FEN rights
//! fields are always `-`.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank layout from file `a` to file `h`.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Every pawn reaching the farthest rank becomes this piece.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;
