use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("no cell at column {column}, row {row}")]
    InvalidCoordinate { column: i32, row: i32 },

    #[error("unknown mode {0:?}, expected \"logical\" or \"free\"")]
    UnknownMode(String),
}
