use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

/// One step applied to both a ring buffer and a `VecDeque<u8>` model.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Write(Vec<u8>),
    Read(usize),
    Peek(usize),
    Consume(usize),
    Find(u8),
    FindSequence(Vec<u8>),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small alphabet so that find hits are common.
        fn byte(g: &mut Gen) -> u8 {
            u8::arbitrary(g) % 4
        }

        match usize::arbitrary(g) % 8 {
            0..=2 => {
                let len = usize::arbitrary(g) % 48;
                Op::Write((0..len).map(|_| byte(g)).collect())
            }
            3 => Op::Read(usize::arbitrary(g) % 40),
            4 => Op::Peek(usize::arbitrary(g) % 40),
            5 => Op::Consume(usize::arbitrary(g) % 40),
            6 => Op::Find(byte(g)),
            _ => {
                let len = usize::arbitrary(g) % 4;
                Op::FindSequence((0..len).map(|_| byte(g)).collect())
            }
        }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Write(bytes) => alloc::boxed::Box::new(bytes.shrink().map(Op::Write)),
            Op::Read(n) => alloc::boxed::Box::new(n.shrink().map(Op::Read)),
            Op::Peek(n) => alloc::boxed::Box::new(n.shrink().map(Op::Peek)),
            Op::Consume(n) => alloc::boxed::Box::new(n.shrink().map(Op::Consume)),
            Op::Find(_) => quickcheck::empty_shrinker(),
            Op::FindSequence(bytes) => {
                alloc::boxed::Box::new(bytes.shrink().map(Op::FindSequence))
            }
        }
    }
}

/// A growth size drawn from the whole normalization range, biased small so
/// that growth and wrapping happen often.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrowthSize(pub(crate) usize);

impl Arbitrary for GrowthSize {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 4 {
            0 => GrowthSize(usize::arbitrary(g)),
            _ => GrowthSize(usize::arbitrary(g) % 64),
        }
    }
}
