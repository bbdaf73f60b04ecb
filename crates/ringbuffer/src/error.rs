use thiserror::Error;

/// Errors returned by ring buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The capacity needed to hold `live + requested` bytes cannot be
    /// represented or allocated. Nothing was written.
    #[error("buffer overflow: cannot grow to hold {live} + {requested} bytes")]
    Overflow {
        /// Unread bytes in the buffer when the write was attempted.
        live: usize,
        /// Bytes the rejected write tried to add.
        requested: usize,
    },
    /// No unread bytes are available. This is the normal "nothing yet"
    /// condition of a stream, not a failure.
    #[error("end of data")]
    EndOfData,
}

impl Error {
    /// Whether this is the end-of-data signal rather than a hard error.
    #[must_use]
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData)
    }
}

/// Result alias for ring buffer operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
