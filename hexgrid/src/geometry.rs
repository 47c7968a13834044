// geometry.rs - Index geometry of the seven-column hexagon

use crate::error::GridError;

// Board shape, fixed for the lifetime of an engine
pub const COLUMNS: usize = 7;                         // Columns, indexed 0..7
pub const MIDDLE_COLUMN: i32 = (COLUMNS / 2) as i32;  // The single widest column
pub const CELL_COUNT: usize = cells_before(COLUMNS as i32) as usize; // 4+5+6+7+6+5+4

/// A logical cell position. Signed so that neighbour candidates falling
/// off the board can be represented before they are filtered out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub column: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((column, row): (i32, i32)) -> Self {
        Self { column, row }
    }
}

/// Number of cells in `column`. Only meaningful for `column` in `0..COLUMNS`.
pub const fn length_of_column(column: i32) -> i32 {
    COLUMNS as i32 - (MIDDLE_COLUMN - column).abs()
}

/// Cumulative count of cells in all columns strictly before `column`.
pub const fn cells_before(column: i32) -> i32 {
    let mut total = 0;
    let mut c = 0;
    while c < column {
        total += length_of_column(c);
        c += 1;
    }
    total
}

pub fn is_valid_coordinate(column: i32, row: i32) -> bool {
    (0..COLUMNS as i32).contains(&column) && (0..length_of_column(column)).contains(&row)
}

/// Flat storage offset of a cell, in `0..CELL_COUNT`.
pub fn index_of(column: i32, row: i32) -> Result<usize, GridError> {
    if !is_valid_coordinate(column, row) {
        return Err(GridError::InvalidCoordinate { column, row });
    }
    Ok((cells_before(column) + row) as usize)
}

/// The cell itself plus its six geometric neighbours, unfiltered.
///
/// Order: top, centre, bottom, right top, right bottom, left top, left bottom.
///
/// The row adjustments below assume an odd column count with a single
/// middle column, which is what this board has. They are wrong for an even
/// column count and must be re-derived before the shape is ever changed.
pub fn neighbours_of(coord: Coord) -> [Coord; 7] {
    let Coord { column, row } = coord;
    // Columns shrink away from the middle on both sides, so the row of a
    // neighbour shifts by one depending on which side of the middle it is.
    let l_adj = if column - 1 < MIDDLE_COLUMN { -1 } else { 0 };
    let r_adj = if column + 1 > MIDDLE_COLUMN { -1 } else { 0 };
    [
        Coord::new(column, row - 1),
        Coord::new(column, row),
        Coord::new(column, row + 1),
        Coord::new(column + 1, row + r_adj),
        Coord::new(column + 1, row + r_adj + 1),
        Coord::new(column - 1, row + l_adj),
        Coord::new(column - 1, row + l_adj + 1),
    ]
}

/// [`neighbours_of`] restricted to cells that exist on the board.
pub fn valid_neighbours(coord: Coord) -> impl Iterator<Item = Coord> {
    neighbours_of(coord)
        .into_iter()
        .filter(|c| is_valid_coordinate(c.column, c.row))
}

/// Every valid coordinate, in storage order.
pub fn coords() -> impl Iterator<Item = Coord> {
    (0..COLUMNS as i32)
        .flat_map(|column| (0..length_of_column(column)).map(move |row| Coord::new(column, row)))
}
