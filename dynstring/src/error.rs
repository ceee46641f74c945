use thiserror::Error;

/// Error types for `DynString` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynStringError {
    /// Index is beyond the current string length
    #[error("Index out of bounds: index {index} is beyond string length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the string
        length: usize,
    },
    /// Range start is beyond the current string length
    #[error("Position out of range: position {pos} is beyond string length {length}")]
    PosOutOfRange {
        /// Start position that was requested
        pos: usize,
        /// Current length of the string
        length: usize,
    },
}
