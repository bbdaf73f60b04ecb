/// Smallest growth quantum a buffer will use.
pub const MIN_GROWTH_SIZE: usize = 16;

/// Largest growth quantum a buffer will use (1 MiB).
pub const MAX_GROWTH_SIZE: usize = 1 << 20;

/// Configuration options for a ring buffer.
///
/// The growth size is both the initial capacity of the backing array and the
/// granularity used whenever the array has to grow. It is normalized at
/// construction, see [`growth_quantum`].
///
/// # Examples
///
/// ```rust
/// use ringbuffer::{RingBuffer, RingBufferOptions};
///
/// let rb = RingBuffer::with_options(RingBufferOptions { growth_size: 100 });
/// assert_eq!(rb.capacity(), 128);
/// assert_eq!(rb.growth_quantum(), 128);
/// ```
///
/// # Default
///
/// `growth_size` defaults to [`MIN_GROWTH_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBufferOptions {
    /// Requested growth size in bytes.
    ///
    /// Values up to [`MIN_GROWTH_SIZE`] become exactly 16, values above
    /// [`MAX_GROWTH_SIZE`] become exactly 1 MiB, and everything in between is
    /// rounded up to the next power of two.
    ///
    /// # Default
    ///
    /// `16`
    pub growth_size: usize,
}

impl Default for RingBufferOptions {
    fn default() -> Self {
        Self {
            growth_size: MIN_GROWTH_SIZE,
        }
    }
}

impl RingBufferOptions {
    /// The normalized growth quantum these options produce.
    #[must_use]
    pub fn growth_quantum(&self) -> usize {
        growth_quantum(self.growth_size)
    }
}

/// Normalizes a requested growth size.
///
/// The result is a power of two in `[MIN_GROWTH_SIZE, MAX_GROWTH_SIZE]`.
/// Requests above the maximum are clamped without rounding.
///
/// ```rust
/// use ringbuffer::growth_quantum;
///
/// assert_eq!(growth_quantum(0), 16);
/// assert_eq!(growth_quantum(17), 32);
/// assert_eq!(growth_quantum(32), 32);
/// assert_eq!(growth_quantum(usize::MAX), 1 << 20);
/// ```
#[must_use]
pub const fn growth_quantum(requested: usize) -> usize {
    if requested < MIN_GROWTH_SIZE {
        MIN_GROWTH_SIZE
    } else if requested > MAX_GROWTH_SIZE {
        MAX_GROWTH_SIZE
    } else {
        // In range, so this cannot overflow.
        requested.next_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 16)]
    #[case(1, 16)]
    #[case(15, 16)]
    #[case(16, 16)]
    #[case(17, 32)]
    #[case(32, 32)]
    #[case(33, 64)]
    #[case(1000, 1024)]
    #[case(MAX_GROWTH_SIZE - 1, MAX_GROWTH_SIZE)]
    #[case(MAX_GROWTH_SIZE, MAX_GROWTH_SIZE)]
    #[case(MAX_GROWTH_SIZE + 1, MAX_GROWTH_SIZE)]
    #[case(usize::MAX, MAX_GROWTH_SIZE)]
    fn normalizes_growth_size(#[case] requested: usize, #[case] expected: usize) {
        assert_eq!(growth_quantum(requested), expected);
    }

    #[test]
    #[expect(
        clippy::assertions_on_constants,
        reason = "Asserting an invariant on the constants"
    )]
    fn bounds_are_powers_of_two() {
        assert!(MIN_GROWTH_SIZE.is_power_of_two());
        assert!(MAX_GROWTH_SIZE.is_power_of_two());
        assert!(MIN_GROWTH_SIZE < MAX_GROWTH_SIZE);
    }

    #[test]
    fn default_options_use_minimum() {
        assert_eq!(RingBufferOptions::default().growth_quantum(), MIN_GROWTH_SIZE);
    }
}
