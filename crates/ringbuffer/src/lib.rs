//! An auto-growing circular byte buffer with stream semantics.
//!
//! Bytes are stored in a contiguous array used as a ring, so reads and writes
//! never shuffle data. When a write does not fit, the array grows to the next
//! multiple of a fixed growth quantum and the unread bytes are moved to the
//! front, keeping their order.
//!
//! - [`RawRingBuffer`] is the unsynchronized engine (`&mut self` writes).
//! - [`RingBuffer`] (feature `std`, on by default) puts the engine behind a
//!   single mutex for one writer and one reader on different threads.
//!
//! Reading consumes bytes; peeking does not. Reading or peeking an empty
//! buffer returns [`Error::EndOfData`], which is the "nothing yet" signal
//! rather than a failure.
//!
//! ```rust
//! use ringbuffer::{Error, RingBuffer};
//!
//! let rb = RingBuffer::new(32);
//! for _ in 0..100 {
//!     rb.write(b"Hello").unwrap();
//! }
//! assert_eq!(rb.len(), 500);
//! assert_eq!(rb.find_sequence(b"oH"), Some(4));
//!
//! let mut buf = [0u8; 5];
//! rb.read(&mut buf).unwrap();
//! assert_eq!(&buf, b"Hello");
//! assert_eq!(rb.len(), 495);
//!
//! let empty = RingBuffer::new(16);
//! assert_eq!(empty.peek(&mut buf), Err(Error::EndOfData));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod matcher;
mod options;
mod raw;
mod span;
#[cfg(feature = "std")]
mod sync;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use options::{MAX_GROWTH_SIZE, MIN_GROWTH_SIZE, RingBufferOptions, growth_quantum};
pub use raw::RawRingBuffer;
#[cfg(feature = "std")]
pub use sync::RingBuffer;
