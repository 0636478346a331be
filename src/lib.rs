pub mod engine;
pub mod logic;

pub use engine::config::EngineConfig;
pub use engine::eval::CentroidEvaluator;
pub use engine::search::{find_best_move, MinimaxEngine};
pub use engine::{Evaluator, Move, SearchStats};
pub use logic::board::{corner_assignments, Board, Cell, ConfigError, HexPos, PlayerColor};
pub use logic::player::{create_players, opposite_corner, Player};
pub use logic::rules::{adjacent_positions, check_win, is_adjacent, jump_targets, valid_moves};
