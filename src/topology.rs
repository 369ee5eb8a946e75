//! Board shape: the partial map between grid coordinates and cell ids.
//!
//! The standard board is a hexagon of side 5 laid out on a 9x9 grid. Rows are
//! shifted so that the six hex neighbours of a cell are reachable with the
//! fixed [`Direction`] vectors; coordinates outside the hexagon simply have no
//! cell.

use std::sync::OnceLock;

use crate::error::TopologyError;
use crate::CellId;

/// Number of cells on the standard board.
pub const CELL_COUNT: usize = 61;

/// Widest mask a [`crate::Board`] can hold.
pub const MAX_CELLS: usize = 64;

/// Standard board rows as (first occupied column, cell count).
const STANDARD_SPANS: [(u8, u8); 9] = [
    (4, 5),
    (3, 6),
    (2, 7),
    (1, 8),
    (0, 9),
    (0, 8),
    (0, 7),
    (0, 6),
    (0, 5),
];

/// Grid coordinate. Signed so a walk can step off the board and be rejected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    #[inline]
    pub const fn new(row: i16, col: i16) -> Coord {
        Coord { row, col }
    }

    /// The coordinate one step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Coord {
        let (dr, dc) = direction.delta();
        Coord::new(self.row + dr, self.col + dc)
    }
}

/// The six neighbour directions of a hex in this coordinate scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    UpperLeft,
    LowerRight,
    UpperRight,
    LowerLeft,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::UpperLeft,
        Direction::LowerRight,
        Direction::UpperRight,
        Direction::LowerLeft,
    ];

    /// (Δrow, Δcol) for one step.
    #[inline]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::UpperLeft => (0, -1),
            Direction::LowerRight => (0, 1),
            Direction::UpperRight => (-1, 1),
            Direction::LowerLeft => (1, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpperLeft => Direction::LowerRight,
            Direction::LowerRight => Direction::UpperLeft,
            Direction::UpperRight => Direction::LowerLeft,
            Direction::LowerLeft => Direction::UpperRight,
        }
    }
}

/// A line through a cell: a direction paired with its opposite.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// Up / Down.
    Vertical,
    /// UpperLeft / LowerRight.
    Row,
    /// UpperRight / LowerLeft.
    Diagonal,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Vertical, Axis::Row, Axis::Diagonal];

    /// The two directions spanning this axis.
    #[inline]
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Vertical => (Direction::Up, Direction::Down),
            Axis::Row => (Direction::UpperLeft, Direction::LowerRight),
            Axis::Diagonal => (Direction::UpperRight, Direction::LowerLeft),
        }
    }
}

/// Bidirectional coordinate/id lookup for one board shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Topology {
    rows: usize,
    cols: usize,
    /// Row-major over the `rows × cols` grid; `None` where the shape has a gap.
    grid: Vec<Option<CellId>>,
    /// Indexed by cell id.
    coords: Vec<Coord>,
}

static STANDARD: OnceLock<Topology> = OnceLock::new();

impl Topology {
    /// The fixed 61-cell hexagon, built on first use and shared afterwards.
    pub fn standard() -> &'static Topology {
        STANDARD.get_or_init(|| Topology::build(&standard_layout()))
    }

    /// Build a topology from rows of `Some(id)` / `None` slots.
    ///
    /// Ids must be unique and contiguous from 0, and there can be at most
    /// [`MAX_CELLS`] of them.
    pub fn from_rows<R: AsRef<[Option<u8>]>>(rows: &[R]) -> Result<Topology, TopologyError> {
        let count: usize = rows
            .iter()
            .map(|row| row.as_ref().iter().flatten().count())
            .sum();
        if count > MAX_CELLS {
            return Err(TopologyError::TooManyCells(count));
        }

        let mut seen = [false; 256];
        for &id in rows.iter().flat_map(|row| row.as_ref().iter().flatten()) {
            if seen[id as usize] {
                return Err(TopologyError::DuplicateCell(id));
            }
            seen[id as usize] = true;
        }
        if let Some(missing) = (0..count).find(|&i| !seen[i]) {
            return Err(TopologyError::MissingCell(missing as u8));
        }

        Ok(Topology::build(rows))
    }

    /// Build without validation. Callers guarantee contiguous, unique ids.
    fn build<R: AsRef<[Option<u8>]>>(rows: &[R]) -> Topology {
        let n_rows = rows.len();
        let n_cols = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let count: usize = rows
            .iter()
            .map(|row| row.as_ref().iter().flatten().count())
            .sum();

        let mut grid = vec![None; n_rows * n_cols];
        let mut coords = vec![Coord::default(); count];
        for (r, row) in rows.iter().enumerate() {
            for (c, slot) in row.as_ref().iter().enumerate() {
                if let Some(id) = *slot {
                    grid[r * n_cols + c] = Some(CellId(id));
                    coords[id as usize] = Coord::new(r as i16, c as i16);
                }
            }
        }

        Topology {
            rows: n_rows,
            cols: n_cols,
            grid,
            coords,
        }
    }

    /// Cell at a coordinate, or `None` for gaps and anything off the grid.
    #[inline]
    pub fn coordinate_to_id(&self, coord: Coord) -> Option<CellId> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (r, c) = (coord.row as usize, coord.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        self.grid[r * self.cols + c]
    }

    /// Coordinate of a cell. Defined for every id in the table.
    #[inline]
    pub fn id_to_coordinate(&self, id: CellId) -> Option<Coord> {
        self.coords.get(id.index()).copied()
    }

    /// Whether `id` addresses a cell of this board.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        id.index() < self.coords.len()
    }

    /// The adjacent cell in `direction`, if the board continues that way.
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        let coord = self.id_to_coordinate(id)?;
        self.coordinate_to_id(coord.step(direction))
    }

    /// Cells met walking from `id` (exclusive) in `direction` until the board ends.
    pub fn ray(&self, id: CellId, direction: Direction) -> Ray<'_> {
        Ray {
            topology: self,
            next: self.id_to_coordinate(id).map(|c| c.step(direction)),
            direction,
        }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Grid height.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over all cell ids in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.coords.len()).map(|i| CellId(i as u8))
    }

    /// Mask with one bit per cell.
    #[inline]
    pub fn full_mask(&self) -> u64 {
        if self.len() == MAX_CELLS {
            u64::MAX
        } else {
            (1u64 << self.len()) - 1
        }
    }

    /// Row-by-row view of the grid, for renderers that lay out hexes and spacers.
    pub fn layout(&self) -> Vec<Vec<Option<CellId>>> {
        self.grid.chunks(self.cols.max(1)).map(<[_]>::to_vec).collect()
    }
}

/// Iterator returned by [`Topology::ray`].
pub struct Ray<'a> {
    topology: &'a Topology,
    next: Option<Coord>,
    direction: Direction,
}

impl Iterator for Ray<'_> {
    type Item = CellId;

    fn next(&mut self) -> Option<CellId> {
        let coord = self.next?;
        match self.topology.coordinate_to_id(coord) {
            Some(id) => {
                self.next = Some(coord.step(self.direction));
                Some(id)
            }
            None => {
                self.next = None;
                None
            }
        }
    }
}

/// The standard board as a layout description (9 rows of 9 slots).
pub fn standard_layout() -> Vec<Vec<Option<u8>>> {
    let mut next_id = 0u8;
    STANDARD_SPANS
        .iter()
        .map(|&(first, len)| {
            (0..9u8)
                .map(|col| {
                    if col >= first && col < first + len {
                        let id = next_id;
                        next_id += 1;
                        Some(id)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect()
}
