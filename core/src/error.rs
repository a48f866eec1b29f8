use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("clue index ({category}, {clue}) is out of range")]
    IndexOutOfRange { category: usize, clue: usize },
    #[error("category pool has {available} entries, {requested} requested")]
    InsufficientPool { requested: usize, available: usize },
    #[error("no board has been loaded")]
    NoBoard,
}

pub type Result<T> = core::result::Result<T, BoardError>;
