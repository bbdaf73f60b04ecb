use alloc::{vec, vec::Vec};

use crate::{
    Error, Result,
    matcher::{SequenceMatcher, Step},
    options::RingBufferOptions,
    span::Spans,
};

/// The unsynchronized ring buffer engine.
///
/// Holds the backing array, the read cursor and the number of unread bytes.
/// The write cursor is never stored; it is always `(read + live) mod
/// capacity`. Writes that do not fit grow the array to the next multiple of
/// the growth quantum, moving the unread bytes to offset 0.
///
/// Mutating operations take `&mut self`. Wrap it in
/// [`RingBuffer`](crate::RingBuffer) to share it across threads.
///
/// ```rust
/// use ringbuffer::RawRingBuffer;
///
/// let mut rb = RawRingBuffer::new(16);
/// rb.write(b"Hello, World!").unwrap();
///
/// let mut buf = [0u8; 5];
/// assert_eq!(rb.read(&mut buf), Ok(5));
/// assert_eq!(&buf, b"Hello");
/// assert_eq!(rb.find(b'W'), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct RawRingBuffer {
    storage: Vec<u8>,
    growth_quantum: usize,
    read: usize,
    live: usize,
}

impl Default for RawRingBuffer {
    fn default() -> Self {
        Self::with_options(RingBufferOptions::default())
    }
}

impl RawRingBuffer {
    /// Creates a buffer whose initial capacity and growth quantum are the
    /// normalized `growth_size`.
    #[must_use]
    pub fn new(growth_size: usize) -> Self {
        Self::with_options(RingBufferOptions { growth_size })
    }

    /// Creates a buffer from [`RingBufferOptions`].
    #[must_use]
    pub fn with_options(options: RingBufferOptions) -> Self {
        let growth_quantum = options.growth_quantum();
        Self {
            storage: vec![0; growth_quantum],
            growth_quantum,
            read: 0,
            live: 0,
        }
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether there are no unread bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current size of the backing array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Allocation granularity used when growing.
    #[must_use]
    pub fn growth_quantum(&self) -> usize {
        self.growth_quantum
    }

    /// Appends all of `bytes`, growing if needed.
    ///
    /// Either every byte is stored or none is. Empty input succeeds with 0.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the grown capacity cannot be represented or
    /// allocated. The buffer is left untouched.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let n = bytes.len();
        if n == 0 {
            return Ok(0);
        }

        self.ensure_capacity(n)?;

        let Spans { first, second } = self.writable();
        if n <= first.len() {
            self.storage[first.start..first.start + n].copy_from_slice(bytes);
        } else {
            let (head, tail) = bytes.split_at(first.len());
            self.storage[first].copy_from_slice(head);
            self.storage[second.start..second.start + tail.len()].copy_from_slice(tail);
        }

        self.live += n;
        Ok(n)
    }

    /// Copies up to `buf.len()` unread bytes into `buf` without consuming
    /// them.
    ///
    /// Returns fewer bytes than requested when fewer are buffered. A
    /// zero-length `buf` always returns `Ok(0)`.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfData`] when `buf` is non-empty and nothing is buffered.
    pub fn peek(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.live == 0 {
            return Err(Error::EndOfData);
        }

        let Spans { first, second } = self.readable();
        let n = buf.len().min(self.live);
        if n <= first.len() {
            buf[..n].copy_from_slice(&self.storage[first.start..first.start + n]);
        } else {
            let split = first.len();
            buf[..split].copy_from_slice(&self.storage[first]);
            buf[split..n].copy_from_slice(&self.storage[second.start..second.start + n - split]);
        }
        Ok(n)
    }

    /// Like [`peek`](Self::peek), then consumes the bytes that were copied.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfData`] when `buf` is non-empty and nothing is buffered;
    /// nothing is consumed in that case.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.peek(buf)?;
        self.advance(n);
        Ok(n)
    }

    /// Discards up to `n` unread bytes without copying them. Returns how many
    /// were discarded.
    pub fn consume(&mut self, n: usize) -> usize {
        let n = n.min(self.live);
        self.advance(n);
        n
    }

    /// Calls `visitor` with every unread byte and its logical index, oldest
    /// first, until it returns `true`.
    pub fn scan<F>(&self, mut visitor: F)
    where
        F: FnMut(u8, usize) -> bool,
    {
        let Spans { first, second } = self.readable();
        let bytes = self.storage[first].iter().chain(&self.storage[second]);
        for (idx, &byte) in bytes.enumerate() {
            if visitor(byte, idx) {
                return;
            }
        }
    }

    /// Logical index of the first unread `target` byte.
    #[must_use]
    pub fn find(&self, target: u8) -> Option<usize> {
        let mut found = None;
        self.scan(|byte, idx| {
            if byte == target {
                found = Some(idx);
            }
            found.is_some()
        });
        found
    }

    /// Logical index where `target` first occurs in the unread bytes.
    ///
    /// Single forward pass with a naive restart on mismatch: the byte that
    /// breaks a partial match is not reconsidered as the start of a new one,
    /// so overlapping candidates such as `b"abX"` inside `b"ababX"` are
    /// missed. An empty `target` is never found.
    #[must_use]
    pub fn find_sequence(&self, target: &[u8]) -> Option<usize> {
        let mut matcher = SequenceMatcher::new(target)?;
        let mut found = None;
        self.scan(|byte, idx| {
            if let Step::Found(start) = matcher.step(byte, idx) {
                found = Some(start);
            }
            found.is_some()
        });
        found
    }

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panics if the cursor invariants do not hold.
    ///
    /// Enabled only in test and fuzzing builds.
    pub fn assert_invariants(&self) {
        let capacity = self.storage.len();
        assert!(self.live <= capacity, "live {} > capacity {capacity}", self.live);
        assert!(self.read < capacity, "read {} >= capacity {capacity}", self.read);
        assert!(self.growth_quantum.is_power_of_two());
        assert_eq!(capacity % self.growth_quantum, 0);
        assert_eq!(self.readable().len(), self.live);
        assert_eq!(self.writable().len(), capacity - self.live);
    }

    fn readable(&self) -> Spans {
        Spans::readable(self.read, self.live, self.storage.len())
    }

    fn writable(&self) -> Spans {
        Spans::writable(self.read, self.live, self.storage.len())
    }

    fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.live);
        let capacity = self.storage.len();
        // read < capacity and n <= capacity, so the sum cannot overflow.
        let next = self.read + n;
        self.read = if next >= capacity { next - capacity } else { next };
        self.live -= n;
    }

    fn ensure_capacity(&mut self, requested: usize) -> Result<()> {
        if requested <= self.storage.len() - self.live {
            return Ok(());
        }

        let overflow = Error::Overflow {
            live: self.live,
            requested,
        };
        let Ok(new_capacity) = grown_capacity(self.live, requested, self.growth_quantum) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(live = self.live, requested, "rejecting write: capacity overflow");
            return Err(overflow);
        };

        let mut grown: Vec<u8> = Vec::new();
        if grown.try_reserve_exact(new_capacity).is_err() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                live = self.live,
                requested,
                new_capacity,
                "rejecting write: allocation failed"
            );
            return Err(overflow);
        }

        let Spans { first, second } = self.readable();
        grown.extend_from_slice(&self.storage[first]);
        grown.extend_from_slice(&self.storage[second]);
        grown.resize(new_capacity, 0);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.storage.len(),
            new_capacity,
            live = self.live,
            "growing ring buffer"
        );

        self.storage = grown;
        self.read = 0;
        Ok(())
    }
}

/// Capacity needed to hold `live + requested` bytes, rounded up to a multiple
/// of `quantum`.
pub(crate) fn grown_capacity(live: usize, requested: usize, quantum: usize) -> Result<usize> {
    live.checked_add(requested)
        .and_then(|required| required.checked_next_multiple_of(quantum))
        .ok_or(Error::Overflow { live, requested })
}
