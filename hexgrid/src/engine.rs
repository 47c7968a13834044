// engine.rs - Live grid of arrow values and the two move kinds

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GridError;
use crate::geometry::{self, CELL_COUNT, Coord};

/// Cells cycle through six arrow orientations.
pub const MODULUS: i32 = 6;

/// How a tap on a cell is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Turn the tapped cell and every neighbour.
    #[default]
    Logical,
    /// Turn the tapped cell only.
    Free,
}

impl FromStr for Mode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logical" => Ok(Mode::Logical),
            "free" => Ok(Mode::Free),
            _ => Err(GridError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Logical => "logical",
            Mode::Free => "free",
        })
    }
}

/// What a change notification covers. Subscribers should treat anything
/// other than `Cell` as "re-read the whole board".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridChange {
    Cell(Coord),
    Neighbourhood(Coord),
    Reset,
    Randomized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(GridChange) + Send>;

/// Owns the 37 cell values. All mutation goes through here.
///
/// Notifications are delivered synchronously, after the mutation has fully
/// applied. Coordinates off the board are rejected with
/// [`GridError::InvalidCoordinate`] before anything is touched, in debug and
/// release builds alike.
pub struct GridEngine {
    cells: [u8; CELL_COUNT],
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for GridEngine {
    fn default() -> Self {
        Self {
            cells: [0; CELL_COUNT],
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("cells", &self.cells)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl GridEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: i32, row: i32) -> Result<u8, GridError> {
        Ok(self.cells[geometry::index_of(column, row)?])
    }

    /// Stores `value` wrapped into `0..6` (Euclidean, so -1 becomes 5).
    /// Notifies only if the stored value actually changed.
    pub fn set(&mut self, column: i32, row: i32, value: i32) -> Result<(), GridError> {
        let index = geometry::index_of(column, row)?;
        let wrapped = value.rem_euclid(MODULUS) as u8;
        if self.cells[index] != wrapped {
            self.cells[index] = wrapped;
            self.notify(GridChange::Cell(Coord::new(column, row)));
        }
        Ok(())
    }

    /// Turns a single cell by `amount`.
    pub fn apply_free(&mut self, column: i32, row: i32, amount: i32) -> Result<(), GridError> {
        let current = i32::from(self.get(column, row)?);
        trace!(column, row, amount, "free move");
        self.set(column, row, current + amount.rem_euclid(MODULUS))
    }

    /// Turns the cell and each of its on-board neighbours by `amount`.
    /// Always notifies once, whether or not anything changed.
    pub fn apply_logical(&mut self, column: i32, row: i32, amount: i32) -> Result<(), GridError> {
        geometry::index_of(column, row)?;
        let step = amount.rem_euclid(MODULUS) as u8;
        let target = Coord::new(column, row);
        trace!(column, row, amount, "logical move");
        for neighbour in geometry::valid_neighbours(target) {
            let index = geometry::index_of(neighbour.column, neighbour.row)?;
            self.cells[index] = (self.cells[index] + step) % MODULUS as u8;
        }
        self.notify(GridChange::Neighbourhood(target));
        Ok(())
    }

    /// Entry point for a tap coming from the presentation layer.
    pub fn tap(&mut self, column: i32, row: i32, mode: Mode, amount: i32) -> Result<(), GridError> {
        match mode {
            Mode::Logical => self.apply_logical(column, row, amount),
            Mode::Free => self.apply_free(column, row, amount),
        }
    }

    pub fn reset(&mut self) {
        self.cells = [0; CELL_COUNT];
        debug!("grid reset");
        self.notify(GridChange::Reset);
    }

    /// Draws every cell uniformly from `0..6`, in storage order. The same
    /// generator state always yields the same board.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_range(0..MODULUS as u8);
        }
        debug!("grid randomized");
        self.notify(GridChange::Randomized);
    }

    /// Non-reproducible randomize from the thread RNG.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// All values in storage order (see [`geometry::index_of`]).
    pub fn values(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Bumped once per notification; lets a renderer poll instead of subscribe.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(GridChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: GridChange) {
        self.revision += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
    }
}
