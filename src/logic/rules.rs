use crate::logic::board::{Board, BoardLayout, HexPos, PlayerColor, HEX_DIRECTIONS};

/// True iff the two cells are exactly one step apart on the hex grid.
#[must_use]
pub fn is_adjacent(a: HexPos, b: HexPos) -> bool {
    a.distance(b) == 1
}

/// The neighbors of `pos` that exist on the board: up to 6, fewer at the
/// rim, always 6 at the center. Empty if `pos` is not a board cell.
///
/// Takes no board: adjacency depends only on the fixed star shape, never on
/// which cells are occupied.
#[must_use]
pub fn adjacent_positions(pos: HexPos) -> Vec<HexPos> {
    let layout = BoardLayout::get();
    HEX_DIRECTIONS
        .iter()
        .map(|&dir| pos + dir)
        .filter(|&p| layout.index_of(p).is_some())
        .collect()
}

/// All jump landings from `pos`: for each direction and multiplier k, the
/// pivot at k steps must be occupied, the landing at 2k steps empty, and
/// every other cell in the lane empty. Empty if `pos` is off the board.
#[must_use]
pub fn jump_targets(pos: HexPos, board: &Board) -> Vec<HexPos> {
    let layout = BoardLayout::get();
    let Some(origin) = layout.index_of(pos) else {
        return Vec::new();
    };
    jump_target_ids(origin, board)
        .into_iter()
        .map(|id| layout.position(id))
        .collect()
}

/// Every legal destination for a piece at `pos`: adjacent empty cells plus
/// everything reachable through chain jumps. Empty if `pos` is off the board.
#[must_use]
pub fn valid_moves(pos: HexPos, board: &Board) -> Vec<HexPos> {
    let layout = BoardLayout::get();
    let Some(origin) = layout.index_of(pos) else {
        return Vec::new();
    };
    valid_move_ids(origin, board)
        .into_iter()
        .map(|id| layout.position(id))
        .collect()
}

/// True iff every cell of the target corner holds the player's color.
#[must_use]
pub fn check_win(board: &Board, color: PlayerColor, target_corner: u8) -> bool {
    BoardLayout::get()
        .corner_cell_ids(target_corner)
        .iter()
        .all(|&id| board.piece_at_id(id) == Some(color))
}

/// Dense-id jump enumeration. Rays already stop at the board edge, so a
/// direction is abandoned as soon as pivot or landing would fall off.
pub(crate) fn jump_target_ids(origin: usize, board: &Board) -> Vec<usize> {
    let layout = BoardLayout::get();
    let mut seen: u128 = 0;
    let mut targets = Vec::new();

    for dir in 0..HEX_DIRECTIONS.len() {
        let ray = layout.ray(origin, dir);
        for k in 1.. {
            let land = 2 * k - 1;
            if land >= ray.len() {
                break;
            }
            let pivot = ray[k - 1];
            let landing = ray[land];
            if board.piece_at_id(pivot).is_none() || board.piece_at_id(landing).is_some() {
                continue;
            }
            // Exactly one piece in the lane: every cell strictly between
            // origin and landing, other than the pivot, must be empty.
            let lane_clear = ray[..land]
                .iter()
                .enumerate()
                .all(|(i, &cell)| i == k - 1 || board.piece_at_id(cell).is_none());
            if lane_clear && seen & (1u128 << landing) == 0 {
                seen |= 1u128 << landing;
                targets.push(landing);
            }
        }
    }
    targets
}

/// Dense-id move enumeration: adjacent empties in direction order, then
/// chain-jump landings in breadth-first discovery order. The visited bitset
/// (121 cells fit in a u128) prevents revisiting and infinite loops; only
/// final landings are reported, each at most once.
pub(crate) fn valid_move_ids(origin: usize, board: &Board) -> Vec<usize> {
    let layout = BoardLayout::get();
    let mut moves = Vec::new();
    let mut in_result: u128 = 0;

    for dir in 0..HEX_DIRECTIONS.len() {
        if let Some(&next) = layout.ray(origin, dir).first() {
            if board.piece_at_id(next).is_none() {
                moves.push(next);
                in_result |= 1u128 << next;
            }
        }
    }

    let mut visited: u128 = 1u128 << origin;
    let mut frontier = vec![origin];
    let mut head = 0;
    while head < frontier.len() {
        let current = frontier[head];
        head += 1;
        for landing in jump_target_ids(current, board) {
            if visited & (1u128 << landing) != 0 {
                continue;
            }
            visited |= 1u128 << landing;
            frontier.push(landing);
            if in_result & (1u128 << landing) == 0 {
                in_result |= 1u128 << landing;
                moves.push(landing);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::CORNER_CELL_COUNT;

    const ORIGIN: HexPos = HexPos::new(0, 0, 0);

    #[test]
    fn test_is_adjacent() {
        assert!(is_adjacent(ORIGIN, HexPos::new(1, -1, 0)));
        assert!(is_adjacent(ORIGIN, HexPos::new(0, -1, 1)));
        assert!(!is_adjacent(ORIGIN, HexPos::new(2, -1, -1)));
        assert!(!is_adjacent(ORIGIN, ORIGIN));
    }

    #[test]
    fn test_center_has_six_neighbors() {
        assert_eq!(adjacent_positions(ORIGIN).len(), 6);
    }

    #[test]
    fn test_corner_apex_has_one_neighbor() {
        // The tip of corner 0 only touches the next row of its triangle.
        let apex = HexPos::new(0, -8, 8);
        assert_eq!(adjacent_positions(apex), vec![HexPos::new(0, -7, 7)]);
    }

    #[test]
    fn test_single_jump_over_adjacent_piece() {
        let mut board = Board::generate();
        board.set_piece(HexPos::new(1, -1, 0), Some(PlayerColor::Red));
        let jumps = jump_targets(ORIGIN, &board);
        assert!(jumps.contains(&HexPos::new(2, -2, 0)));
    }

    #[test]
    fn test_no_jump_over_empty_cells() {
        let board = Board::generate();
        assert!(jump_targets(ORIGIN, &board).is_empty());
    }

    #[test]
    fn test_long_jump_over_distant_pivot() {
        let mut board = Board::generate();
        board.set_piece(HexPos::new(0, -2, 2), Some(PlayerColor::Blue));
        let jumps = jump_targets(ORIGIN, &board);
        assert!(jumps.contains(&HexPos::new(0, -4, 4)));
    }

    #[test]
    fn test_long_jump_blocked_by_extra_piece_in_lane() {
        let mut board = Board::generate();
        board.set_piece(HexPos::new(0, -1, 1), Some(PlayerColor::Red));
        board.set_piece(HexPos::new(0, -2, 2), Some(PlayerColor::Blue));
        let jumps = jump_targets(ORIGIN, &board);
        assert!(!jumps.contains(&HexPos::new(0, -4, 4)));
    }

    #[test]
    fn test_long_jump_blocked_by_occupied_landing() {
        let mut board = Board::generate();
        board.set_piece(HexPos::new(0, -2, 2), Some(PlayerColor::Blue));
        board.set_piece(HexPos::new(0, -4, 4), Some(PlayerColor::Green));
        let jumps = jump_targets(ORIGIN, &board);
        assert!(!jumps.contains(&HexPos::new(0, -4, 4)));
    }

    #[test]
    fn test_valid_moves_include_adjacent_empty_cells() {
        let mut board = Board::generate();
        board.set_piece(ORIGIN, Some(PlayerColor::Red));
        let moves = valid_moves(ORIGIN, &board);
        for &dir in &crate::logic::board::HEX_DIRECTIONS {
            assert!(moves.contains(&(ORIGIN + dir)));
        }
    }

    #[test]
    fn test_chain_jump_exposes_each_landing_once() {
        let mut board = Board::generate();
        board.set_piece(ORIGIN, Some(PlayerColor::Red));
        board.set_piece(HexPos::new(1, -1, 0), Some(PlayerColor::Blue));
        board.set_piece(HexPos::new(3, -3, 0), Some(PlayerColor::Green));

        let moves = valid_moves(ORIGIN, &board);
        assert!(moves.contains(&HexPos::new(2, -2, 0)));
        assert!(moves.contains(&HexPos::new(4, -4, 0)));

        let mut deduped = moves.clone();
        deduped.sort_by_key(|p| (p.q, p.r));
        deduped.dedup();
        assert_eq!(deduped.len(), moves.len());
    }

    #[test]
    fn test_chain_mixes_short_and_long_jumps() {
        let mut board = Board::generate();
        board.set_piece(ORIGIN, Some(PlayerColor::Red));
        // Short jump to (0,-2,2), then a long jump over (0,-4,4) to (0,-6,6).
        board.set_piece(HexPos::new(0, -1, 1), Some(PlayerColor::Blue));
        board.set_piece(HexPos::new(0, -4, 4), Some(PlayerColor::Green));

        let moves = valid_moves(ORIGIN, &board);
        assert!(moves.contains(&HexPos::new(0, -2, 2)));
        assert!(moves.contains(&HexPos::new(0, -6, 6)));
    }

    #[test]
    fn test_off_board_origin_yields_no_moves() {
        let board = Board::generate();
        let off = HexPos::new(9, -9, 0);
        assert!(adjacent_positions(off).is_empty());
        assert!(jump_targets(off, &board).is_empty());
        assert!(valid_moves(off, &board).is_empty());
    }

    #[test]
    fn test_check_win_requires_full_corner() {
        let mut board = Board::generate();
        board.place_initial_pieces(&[3], &[PlayerColor::Red]);
        assert!(check_win(&board, PlayerColor::Red, 3));
        assert!(!check_win(&board, PlayerColor::Blue, 3));

        // Emptying any one target cell breaks the win.
        let target = board
            .cells()
            .find(|c| c.corner == Some(3))
            .map(|c| c.pos)
            .unwrap();
        board.set_piece(target, None);
        assert!(!check_win(&board, PlayerColor::Red, 3));

        // So does another color sitting in it.
        board.set_piece(target, Some(PlayerColor::Blue));
        assert!(!check_win(&board, PlayerColor::Red, 3));

        let filled = board
            .cells()
            .filter(|c| c.corner == Some(3) && c.piece == Some(PlayerColor::Red))
            .count();
        assert_eq!(filled, CORNER_CELL_COUNT - 1);
    }
}
