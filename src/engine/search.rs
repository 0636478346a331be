use std::sync::Arc;
use std::time::Instant;

use log::debug;

use crate::engine::config::EngineConfig;
use crate::engine::eval::CentroidEvaluator;
use crate::engine::{Evaluator, Move, SearchStats};
use crate::logic::board::{Board, BoardLayout, PlayerColor};
use crate::logic::player::Player;
use crate::logic::rules::valid_move_ids;

/// Outside any reachable evaluation; the board tops out far below this.
const SCORE_INFINITY: i32 = 1_000_000;

/// Depth-bounded minimax with alpha-beta pruning over one player/opponent
/// pair. Each call is a self-contained tree walk: candidate moves are
/// applied to a private board copy and undone on the way back up, so the
/// caller's board is never touched.
pub struct MinimaxEngine {
    config: Arc<EngineConfig>,
    evaluator: CentroidEvaluator,
    nodes_searched: u32,
}

impl MinimaxEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            evaluator: CentroidEvaluator::new(),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.config = config;
    }

    /// Fixed-perspective leaf value: positive when `player` sits closer to
    /// its goal than `opponent`, independent of whose turn the leaf is.
    fn leaf_value(&self, board: &Board, player: &Player, opponent: &Player) -> i32 {
        self.evaluator.evaluate(board, opponent) - self.evaluator.evaluate(board, player)
    }

    /// Minimax value of `board` with `depth` plies left. The mover is
    /// `player` when maximizing and `opponent` when minimizing; a mover with
    /// no pieces or no destinations contributes no candidates and the branch
    /// falls back to the running best.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &mut Board,
        player: &Player,
        opponent: &Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched = self.nodes_searched.wrapping_add(1);

        if depth == 0 {
            return self.leaf_value(board, player, opponent);
        }

        let mover = if maximizing {
            player.color
        } else {
            opponent.color
        };
        let pieces: Vec<usize> = board.piece_ids(mover).collect();

        if maximizing {
            let mut best = -SCORE_INFINITY;
            'pieces: for &piece in &pieces {
                for to in valid_move_ids(piece, board) {
                    board.apply_move_ids(piece, to);
                    let val = self.minimax(board, player, opponent, depth - 1, alpha, beta, false);
                    board.undo_move_ids(piece, to);
                    best = best.max(val);
                    alpha = alpha.max(val);
                    if beta <= alpha {
                        break 'pieces;
                    }
                }
            }
            best
        } else {
            let mut best = SCORE_INFINITY;
            'pieces: for &piece in &pieces {
                for to in valid_move_ids(piece, board) {
                    board.apply_move_ids(piece, to);
                    let val = self.minimax(board, player, opponent, depth - 1, alpha, beta, true);
                    board.undo_move_ids(piece, to);
                    best = best.min(val);
                    beta = beta.min(val);
                    if beta <= alpha {
                        break 'pieces;
                    }
                }
            }
            best
        }
    }

    /// Best move for `player` within `depth` plies, or `None` when the
    /// player has no legal move anywhere. A `depth` of 0 means "use the
    /// configured default". Enumeration order is fixed, and a later candidate
    /// replaces the best only on a strictly greater score, so repeated calls
    /// return the identical move.
    ///
    /// Without an explicit opponent a mirror opponent is synthesized from
    /// the player's own corners; that stand-in is only meaningful for the
    /// symmetric two-player layout. Games with three or more players must
    /// pass the opponent to search against.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        player: &Player,
        depth: u8,
        opponent: Option<&Player>,
    ) -> Option<(Move, SearchStats)> {
        let start = Instant::now();
        self.nodes_searched = 0;

        // Depth is the sole bound on work; never exceed the configured cap.
        // Both bounds tolerate a degenerate config rather than panicking.
        let depth = if depth == 0 {
            self.config.search_depth
        } else {
            depth
        };
        let depth = depth.max(1).min(self.config.max_depth.max(1));

        let mirror;
        let opponent = match opponent {
            Some(p) => p,
            None => {
                mirror = mirror_opponent(player);
                &mirror
            }
        };

        let layout = BoardLayout::get();
        let mut board = board.clone();
        let pieces: Vec<usize> = board.piece_ids(player.color).collect();

        let mut best_move = None;
        let mut best_score = -SCORE_INFINITY;
        for &piece in &pieces {
            for to in valid_move_ids(piece, &board) {
                board.apply_move_ids(piece, to);
                let score = self.minimax(
                    &mut board,
                    player,
                    opponent,
                    depth - 1,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    false,
                );
                board.undo_move_ids(piece, to);
                if score > best_score {
                    best_score = score;
                    best_move = Some(Move {
                        from: layout.position(piece),
                        to: layout.position(to),
                        player: player.color,
                    });
                }
            }
        }

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: start.elapsed().as_millis() as u64,
        };
        match best_move {
            Some(mv) => {
                debug!(
                    "{} depth {}: {:?} -> {:?} score {} ({} nodes, {} ms)",
                    player.name, depth, mv.from, mv.to, best_score, stats.nodes, stats.time_ms
                );
                Some((mv, stats))
            }
            None => {
                debug!("{} depth {}: no legal moves", player.name, depth);
                None
            }
        }
    }
}

/// Stand-in opponent racing the player's corners in reverse.
fn mirror_opponent(player: &Player) -> Player {
    let color = if player.color == PlayerColor::Blue {
        PlayerColor::Red
    } else {
        PlayerColor::Blue
    };
    Player {
        color,
        corner: player.target_corner,
        target_corner: player.corner,
        is_ai: false,
        name: "Opponent".to_owned(),
    }
}

/// One-shot search with a default-configured engine.
#[must_use]
pub fn find_best_move(
    board: &Board,
    player: &Player,
    depth: u8,
    opponent: Option<&Player>,
) -> Option<Move> {
    let mut engine = MinimaxEngine::new(Arc::new(EngineConfig::default()));
    engine
        .find_best_move(board, player, depth, opponent)
        .map(|(mv, _)| mv)
}
