//! Physical layout of the unread and free regions inside the backing array.
//!
//! A ring of capacity `C` is fully described by a read cursor and a live
//! count. The unread region starts at the read cursor and has `live` bytes;
//! the free region is its complement and starts at the derived write cursor
//! `(read + live) mod C`. Either region crosses the end of the array at most
//! once, so it is always at most two contiguous runs. Every copy into or out
//! of the ring goes through [`Spans`].

use core::ops::Range;

/// Up to two contiguous runs of the backing array, in logical order.
///
/// `second` is empty unless the region wraps, in which case it starts at
/// offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spans {
    pub(crate) first: Range<usize>,
    pub(crate) second: Range<usize>,
}

impl Spans {
    const EMPTY: Spans = Spans {
        first: 0..0,
        second: 0..0,
    };

    /// Runs holding the `live` unread bytes starting at `read`.
    pub(crate) fn readable(read: usize, live: usize, capacity: usize) -> Spans {
        debug_assert!(live <= capacity);
        debug_assert!(read < capacity || capacity == 0);

        if read <= capacity - live {
            Spans {
                first: read..read + live,
                second: 0..0,
            }
        } else {
            let tail = capacity - read;
            Spans {
                first: read..capacity,
                second: 0..live - tail,
            }
        }
    }

    /// Runs of free space, starting at the write cursor.
    pub(crate) fn writable(read: usize, live: usize, capacity: usize) -> Spans {
        debug_assert!(live <= capacity);

        if live == capacity {
            return Spans::EMPTY;
        }

        let free = capacity - live;
        if read < free {
            // Unread bytes end before the array does: free space runs to the
            // end, then picks up again at 0 up to the read cursor.
            Spans {
                first: read + live..capacity,
                second: 0..read,
            }
        } else {
            // Unread bytes reach (or wrap past) the end: the free space is
            // one run between the write cursor and the read cursor.
            let write = read + live - capacity;
            Spans {
                first: write..write + free,
                second: 0..0,
            }
        }
    }

    /// Total bytes covered by both runs.
    pub(crate) fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }
}
