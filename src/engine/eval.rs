use crate::engine::Evaluator;
use crate::logic::board::{Board, BoardLayout};
use crate::logic::player::Player;

/// Sums, over every piece of the player's color, the cube Chebyshev distance
/// to the rounded centroid of the player's target corner.
///
/// A monotone proxy for total remaining travel: it ignores blocking pieces
/// and jump shortcuts, which is what keeps it cheap enough for the leaves of
/// the search tree.
pub struct CentroidEvaluator;

impl CentroidEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CentroidEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for CentroidEvaluator {
    fn evaluate(&self, board: &Board, player: &Player) -> i32 {
        let layout = BoardLayout::get();
        let goal = layout.target_centroid(player.target_corner);
        board
            .piece_ids(player.color)
            .map(|id| layout.position(id).distance(goal))
            .sum()
    }
}
