//! State engine for the arrow puzzle: a hexagon of 37 cells, each holding
//! one of six arrow orientations.
//!
//! [`geometry`] maps `(column, row)` to storage and enumerates neighbours,
//! [`engine::GridEngine`] owns the values and applies moves, and
//! [`xorshift::Xorshift128Plus`] gives reproducible randomized boards.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod xorshift;

pub use engine::{GridChange, GridEngine, Mode, SubscriptionId, MODULUS};
pub use error::GridError;
pub use geometry::{Coord, CELL_COUNT, COLUMNS};
pub use xorshift::Xorshift128Plus;
