use serde::{Deserialize, Serialize};

use crate::logic::board::{Board, HexPos, PlayerColor};
use crate::logic::player::Player;

pub mod config;
pub mod eval;
pub mod search;

/// A piece relocation: origin, destination and the color that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: HexPos,
    pub to: HexPos,
    pub player: PlayerColor,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

/// Board scoring seam. Lower is better: the score approximates how much
/// travel the player's pieces have left.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: &Player) -> i32;
}
