use parking_lot::Mutex;

use crate::{RawRingBuffer, Result, options::RingBufferOptions};

/// A thread-safe, auto-growing circular byte buffer.
///
/// All state sits behind one [`parking_lot::Mutex`]. Every method holds the
/// lock for its whole duration and none of them blocks waiting for data or
/// space: reads on an empty buffer return [`Error::EndOfData`] at once and
/// oversized writes grow the buffer. Share it between a writer and a reader
/// with [`Arc`](std::sync::Arc).
///
/// [`Error::EndOfData`]: crate::Error::EndOfData
///
/// # Examples
///
/// ```rust
/// use ringbuffer::RingBuffer;
///
/// let rb = RingBuffer::new(16);
/// rb.write(b"Hello").unwrap();
/// rb.write(b"Hello").unwrap();
/// assert_eq!(rb.len(), 10);
///
/// let mut buf = [0u8; 5];
/// assert_eq!(rb.read(&mut buf), Ok(5));
/// assert_eq!(&buf, b"Hello");
/// assert_eq!(rb.len(), 5);
///
/// assert!(rb.read(&mut [0u8; 8]).is_ok());
/// assert!(rb.read(&mut buf).unwrap_err().is_end_of_data());
/// ```
#[derive(Debug, Default)]
pub struct RingBuffer {
    inner: Mutex<RawRingBuffer>,
}

impl RingBuffer {
    /// Creates a buffer whose initial capacity and growth quantum are the
    /// normalized `growth_size`.
    #[must_use]
    pub fn new(growth_size: usize) -> Self {
        Self::from(RawRingBuffer::new(growth_size))
    }

    /// Creates a buffer from [`RingBufferOptions`].
    #[must_use]
    pub fn with_options(options: RingBufferOptions) -> Self {
        Self::from(RawRingBuffer::with_options(options))
    }

    /// Appends all of `bytes`, growing if needed. See
    /// [`RawRingBuffer::write`].
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`](crate::Error::Overflow) if the buffer cannot grow
    /// enough; nothing is written.
    pub fn write(&self, bytes: &[u8]) -> Result<usize> {
        if bytes.is_empty() {
            return Ok(0);
        }
        self.inner.lock().write(bytes)
    }

    /// Copies and consumes up to `buf.len()` unread bytes.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfData`](crate::Error::EndOfData) when nothing is buffered.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        self.inner.lock().read(buf)
    }

    /// Copies up to `buf.len()` unread bytes without consuming them.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfData`](crate::Error::EndOfData) when nothing is buffered.
    pub fn peek(&self, buf: &mut [u8]) -> Result<usize> {
        self.inner.lock().peek(buf)
    }

    /// Discards up to `n` unread bytes, returning how many were discarded.
    pub fn consume(&self, n: usize) -> usize {
        self.inner.lock().consume(n)
    }

    /// Calls `visitor` with each unread byte and its logical index until it
    /// returns `true`.
    ///
    /// The lock is held throughout, so `visitor` must not call back into this
    /// buffer; doing so deadlocks.
    pub fn scan<F>(&self, visitor: F)
    where
        F: FnMut(u8, usize) -> bool,
    {
        self.inner.lock().scan(visitor);
    }

    /// Logical index of the first unread `target` byte.
    #[must_use]
    pub fn find(&self, target: u8) -> Option<usize> {
        self.inner.lock().find(target)
    }

    /// Logical index of the first occurrence of `target`, with the naive
    /// restart described on [`RawRingBuffer::find_sequence`].
    #[must_use]
    pub fn find_sequence(&self, target: &[u8]) -> Option<usize> {
        self.inner.lock().find_sequence(target)
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether there are no unread bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Current size of the backing array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Allocation granularity used when growing.
    #[must_use]
    pub fn growth_quantum(&self) -> usize {
        self.inner.lock().growth_quantum()
    }

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panics if the cursor invariants do not hold.
    ///
    /// Enabled only in test and fuzzing builds.
    pub fn assert_invariants(&self) {
        self.inner.lock().assert_invariants();
    }

    /// Unwraps the engine.
    #[must_use]
    pub fn into_inner(self) -> RawRingBuffer {
        self.inner.into_inner()
    }
}

impl From<RawRingBuffer> for RingBuffer {
    fn from(raw: RawRingBuffer) -> Self {
        Self {
            inner: Mutex::new(raw),
        }
    }
}
