/// What happened after feeding one more byte into the sequence matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Byte matched, but the target is not complete yet.
    NeedMore,
    /// Byte matched *and* completed the target, which started at this index.
    Found(usize),
    /// Byte did **not** match; the match offset is back at zero.
    Reject,
}

/// Streaming matcher for a byte sequence over a single forward pass.
///
/// This is a naive restart matcher, not KMP: on a mismatch the offset drops
/// to zero and the mismatching byte is *not* retried as the first byte of a
/// new candidate. Targets whose partial matches overlap a failed prefix can
/// therefore be missed. Searching `b"ababX"` for `b"abX"` finds nothing.
#[derive(Debug, Clone)]
pub(crate) struct SequenceMatcher<'a> {
    target: &'a [u8],
    offset: usize,
    start: usize,
}

impl<'a> SequenceMatcher<'a> {
    /// `None` for an empty target, which never matches.
    pub(crate) fn new(target: &'a [u8]) -> Option<Self> {
        if target.is_empty() {
            return None;
        }
        Some(Self {
            target,
            offset: 0,
            start: 0,
        })
    }

    /// Give the matcher the byte at logical `index`.
    pub(crate) fn step(&mut self, byte: u8, index: usize) -> Step {
        if self.target.get(self.offset) != Some(&byte) {
            self.offset = 0;
            return Step::Reject;
        }

        if self.offset == 0 {
            self.start = index;
        }
        self.offset += 1;

        if self.offset == self.target.len() {
            Step::Found(self.start)
        } else {
            Step::NeedMore
        }
    }
}
