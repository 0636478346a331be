use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

/// Radius of the central hexagonal region.
pub const BOARD_RADIUS: i32 = 4;
/// 61 center cells plus 6 corner triangles of 10 cells each.
pub const CELL_COUNT: usize = 121;
pub const CORNER_COUNT: usize = 6;
pub const CORNER_CELL_COUNT: usize = 10;

/// The 6 unit directions on the hex grid, clockwise.
pub const HEX_DIRECTIONS: [HexPos; 6] = [
    HexPos::new(1, -1, 0),
    HexPos::new(1, 0, -1),
    HexPos::new(0, 1, -1),
    HexPos::new(-1, 1, 0),
    HexPos::new(-1, 0, 1),
    HexPos::new(0, -1, 1),
];

/// Cube coordinate on the hex grid. Every stored position satisfies
/// q + r + s = 0. Identity is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexPos {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl HexPos {
    #[must_use]
    pub const fn new(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Chebyshev distance over the three cube axes.
    #[must_use]
    pub fn distance(self, other: Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s - other.s).abs();
        dq.max(dr).max(ds)
    }

    /// Rotate 60 degrees clockwise around the board center.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::new(-self.r, -self.s, -self.q)
    }
}

impl std::ops::Add for HexPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r, self.s + other.s)
    }
}

/// Player color identifiers, in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl PlayerColor {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];
}

/// A single cell on the board. `corner` is fixed at generation; `piece` is
/// the only field move application touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: HexPos,
    /// Which corner's triangle this cell belongs to, or `None` if center.
    pub corner: Option<u8>,
    /// Color of the piece occupying this cell, or `None` if empty.
    pub piece: Option<PlayerColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedPlayerCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlayerCount(n) => {
                write!(f, "unsupported player count: {n} (expected 2, 3, 4 or 6)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Corner indices for a given number of players, spread evenly around the
/// star: opposite pair for 2, alternating for 3, two adjacent pairs for 4.
pub fn corner_assignments(player_count: usize) -> Result<Vec<u8>, ConfigError> {
    match player_count {
        2 => Ok(vec![0, 3]),
        3 => Ok(vec![0, 2, 4]),
        4 => Ok(vec![0, 1, 3, 4]),
        6 => Ok(vec![0, 1, 2, 3, 4, 5]),
        n => Err(ConfigError::UnsupportedPlayerCount(n)),
    }
}

/// Precomputed shape of the star board, shared by every [`Board`].
///
/// The hot search loop does many lookups per node, so cells carry a dense
/// id (0..121) and the position-keyed map is only used at the API boundary.
/// `rays` holds, for each cell and direction, the ids of the successive
/// on-board cells along that line; a ray ends where the board does.
pub(crate) struct BoardLayout {
    positions: [HexPos; CELL_COUNT],
    corners: [Option<u8>; CELL_COUNT],
    index: HashMap<HexPos, usize>,
    rays: Vec<[Vec<usize>; 6]>,
    corner_cells: [[usize; CORNER_CELL_COUNT]; CORNER_COUNT],
    centroids: [HexPos; CORNER_COUNT],
}

impl BoardLayout {
    pub(crate) fn get() -> &'static Self {
        static INSTANCE: OnceLock<BoardLayout> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    fn new() -> Self {
        let mut positions = [HexPos::new(0, 0, 0); CELL_COUNT];
        let mut corners = [None; CELL_COUNT];
        let mut count = 0;

        // Central hexagon of radius 4: all cube coordinates with
        // max(|q|, |r|, |s|) <= 4, 61 cells.
        for q in -BOARD_RADIUS..=BOARD_RADIUS {
            for r in -BOARD_RADIUS..=BOARD_RADIUS {
                let s = -q - r;
                if s.abs() <= BOARD_RADIUS {
                    positions[count] = HexPos::new(q, r, s);
                    count += 1;
                }
            }
        }

        // Reference triangle for corner 0: at depth d (1..4) past the hex
        // edge, width w occupies (w, -(4+d), 4+d-w) for w = 0..(4-d).
        let mut reference = Vec::with_capacity(CORNER_CELL_COUNT);
        for d in 1..=BOARD_RADIUS {
            for w in 0..=(BOARD_RADIUS - d) {
                reference.push(HexPos::new(w, -(BOARD_RADIUS + d), BOARD_RADIUS + d - w));
            }
        }

        // The other five corners are 60-degree clockwise rotations of it.
        for corner in 0..CORNER_COUNT {
            for &base in &reference {
                let mut pos = base;
                for _ in 0..corner {
                    pos = pos.rotate_cw();
                }
                positions[count] = pos;
                corners[count] = Some(corner as u8);
                count += 1;
            }
        }
        debug_assert_eq!(count, CELL_COUNT);

        let mut index = HashMap::with_capacity(CELL_COUNT);
        for (id, &pos) in positions.iter().enumerate() {
            index.insert(pos, id);
        }

        let mut rays = Vec::with_capacity(CELL_COUNT);
        for &pos in &positions {
            let mut cell_rays: [Vec<usize>; 6] = Default::default();
            for (dir, &step) in HEX_DIRECTIONS.iter().enumerate() {
                let mut next = pos + step;
                while let Some(&id) = index.get(&next) {
                    cell_rays[dir].push(id);
                    next = next + step;
                }
            }
            rays.push(cell_rays);
        }

        let mut corner_cells = [[0; CORNER_CELL_COUNT]; CORNER_COUNT];
        let mut centroids = [HexPos::new(0, 0, 0); CORNER_COUNT];
        for corner in 0..CORNER_COUNT {
            let ids: Vec<usize> = (0..CELL_COUNT)
                .filter(|&id| corners[id] == Some(corner as u8))
                .collect();
            debug_assert_eq!(ids.len(), CORNER_CELL_COUNT);
            let (mut q, mut r, mut s) = (0.0, 0.0, 0.0);
            for (slot, &id) in ids.iter().enumerate() {
                corner_cells[corner][slot] = id;
                q += f64::from(positions[id].q);
                r += f64::from(positions[id].r);
                s += f64::from(positions[id].s);
            }
            // Arithmetic mean per axis, rounded to the nearest integer so the
            // centroid is itself a cube coordinate.
            let n = ids.len() as f64;
            centroids[corner] = HexPos::new(
                (q / n).round() as i32,
                (r / n).round() as i32,
                (s / n).round() as i32,
            );
        }

        Self {
            positions,
            corners,
            index,
            rays,
            corner_cells,
            centroids,
        }
    }

    pub(crate) fn index_of(&self, pos: HexPos) -> Option<usize> {
        self.index.get(&pos).copied()
    }

    pub(crate) fn position(&self, id: usize) -> HexPos {
        self.positions[id]
    }

    pub(crate) fn corner(&self, id: usize) -> Option<u8> {
        self.corners[id]
    }

    pub(crate) fn ray(&self, id: usize, dir: usize) -> &[usize] {
        &self.rays[id][dir]
    }

    /// The 10 cell ids of a corner triangle. `corner` must be in 0..=5.
    pub(crate) fn corner_cell_ids(&self, corner: u8) -> &[usize; CORNER_CELL_COUNT] {
        &self.corner_cells[corner as usize]
    }

    /// Rounded centroid of a corner triangle. `corner` must be in 0..=5.
    pub(crate) fn target_centroid(&self, corner: u8) -> HexPos {
        self.centroids[corner as usize]
    }
}

/// Occupancy of the fixed 121-cell star board. The shape lives in the shared
/// [`BoardLayout`]; a `Board` is just which color sits on each cell, so a
/// search snapshot is a single array copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    occupants: [Option<PlayerColor>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::generate()
    }
}

impl Board {
    /// The empty star board. The layout tables are built on first use and
    /// shared afterwards.
    #[must_use]
    pub fn generate() -> Self {
        let _ = BoardLayout::get();
        Self {
            occupants: [None; CELL_COUNT],
        }
    }

    #[must_use]
    pub fn contains(&self, pos: HexPos) -> bool {
        BoardLayout::get().index_of(pos).is_some()
    }

    /// Color of the piece at `pos`, or `None` if the cell is empty or `pos`
    /// is not a board cell.
    #[must_use]
    pub fn piece_at(&self, pos: HexPos) -> Option<PlayerColor> {
        BoardLayout::get()
            .index_of(pos)
            .and_then(|id| self.occupants[id])
    }

    /// Sets or clears the piece at `pos`. Ignores positions off the board.
    pub fn set_piece(&mut self, pos: HexPos, piece: Option<PlayerColor>) {
        if let Some(id) = BoardLayout::get().index_of(pos) {
            self.occupants[id] = piece;
        }
    }

    /// Read-only view of one cell, for rendering collaborators.
    #[must_use]
    pub fn cell(&self, pos: HexPos) -> Option<Cell> {
        let layout = BoardLayout::get();
        layout.index_of(pos).map(|id| Cell {
            pos,
            corner: layout.corner(id),
            piece: self.occupants[id],
        })
    }

    /// All 121 cells in dense-id order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let layout = BoardLayout::get();
        (0..CELL_COUNT).map(move |id| Cell {
            pos: layout.position(id),
            corner: layout.corner(id),
            piece: self.occupants[id],
        })
    }

    /// Positions of every piece of `color`, in dense-id order.
    #[must_use]
    pub fn pieces(&self, color: PlayerColor) -> Vec<HexPos> {
        let layout = BoardLayout::get();
        self.piece_ids(color).map(|id| layout.position(id)).collect()
    }

    pub(crate) fn piece_at_id(&self, id: usize) -> Option<PlayerColor> {
        self.occupants[id]
    }

    pub(crate) fn piece_ids(&self, color: PlayerColor) -> impl Iterator<Item = usize> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .filter(move |(_, &piece)| piece == Some(color))
            .map(|(id, _)| id)
    }

    /// Fills each corner triangle with the paired color. Touches occupancy
    /// only, never corner labels.
    pub fn place_initial_pieces(&mut self, corners: &[u8], colors: &[PlayerColor]) {
        let layout = BoardLayout::get();
        for (&corner, &color) in corners.iter().zip(colors) {
            for &id in layout.corner_cell_ids(corner) {
                self.occupants[id] = Some(color);
            }
        }
    }

    /// Moves the occupant of `mv.from` to `mv.to`, clearing the origin.
    /// Positions off the board are a caller contract violation and ignored.
    pub fn apply_move(&mut self, mv: &crate::engine::Move) {
        let layout = BoardLayout::get();
        if let (Some(from), Some(to)) = (layout.index_of(mv.from), layout.index_of(mv.to)) {
            self.apply_move_ids(from, to);
        }
    }

    /// Reverses [`Board::apply_move`]. Landing cells are always empty in this
    /// game, so restoring the two touched cells is enough.
    pub fn undo_move(&mut self, mv: &crate::engine::Move) {
        let layout = BoardLayout::get();
        if let (Some(from), Some(to)) = (layout.index_of(mv.from), layout.index_of(mv.to)) {
            self.undo_move_ids(from, to);
        }
    }

    pub(crate) fn apply_move_ids(&mut self, from: usize, to: usize) {
        self.occupants[to] = self.occupants[from].take();
    }

    pub(crate) fn undo_move_ids(&mut self, from: usize, to: usize) {
        self.occupants[from] = self.occupants[to].take();
    }
}
