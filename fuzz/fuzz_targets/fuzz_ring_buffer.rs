#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringbuffer::{Error, RingBuffer};

#[derive(Debug, Arbitrary)]
enum Op {
    Write(Vec<u8>),
    Read(u8),
    Peek(u8),
    Consume(u8),
    Find(u8),
    FindSequence(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    growth_size: u32,
    ops: Vec<Op>,
}

/// Reference for the naive restart search: on mismatch the offset goes back
/// to zero and the current byte is not retried.
fn naive_find_sequence(data: &VecDeque<u8>, target: &[u8]) -> Option<usize> {
    if target.is_empty() {
        return None;
    }
    let (mut offset, mut start) = (0, 0);
    for (idx, &byte) in data.iter().enumerate() {
        if byte != target[offset] {
            offset = 0;
            continue;
        }
        if offset == 0 {
            start = idx;
        }
        offset += 1;
        if offset == target.len() {
            return Some(start);
        }
    }
    None
}

fn run(input: Input) {
    let rb = RingBuffer::new(input.growth_size as usize);
    let quantum = rb.growth_quantum();
    let mut model: VecDeque<u8> = VecDeque::new();

    for op in input.ops {
        let capacity = rb.capacity();
        match op {
            Op::Write(bytes) => {
                assert_eq!(rb.write(&bytes), Ok(bytes.len()));
                model.extend(bytes);
            }
            Op::Read(n) => {
                let mut buf = vec![0u8; n as usize];
                let expected: Vec<u8> = model.iter().copied().take(n as usize).collect();
                match rb.read(&mut buf) {
                    Ok(got) => {
                        assert_eq!(&buf[..got], expected.as_slice());
                        model.drain(..got);
                    }
                    Err(Error::EndOfData) => assert!(model.is_empty() && n > 0),
                    Err(err) => panic!("unexpected error: {err}"),
                }
            }
            Op::Peek(n) => {
                let mut buf = vec![0u8; n as usize];
                let expected: Vec<u8> = model.iter().copied().take(n as usize).collect();
                match rb.peek(&mut buf) {
                    Ok(got) => assert_eq!(&buf[..got], expected.as_slice()),
                    Err(Error::EndOfData) => assert!(model.is_empty() && n > 0),
                    Err(err) => panic!("unexpected error: {err}"),
                }
            }
            Op::Consume(n) => {
                let got = rb.consume(n as usize);
                assert_eq!(got, model.len().min(n as usize));
                model.drain(..got);
            }
            Op::Find(b) => assert_eq!(rb.find(b), model.iter().position(|&x| x == b)),
            Op::FindSequence(target) => assert_eq!(
                rb.find_sequence(&target),
                naive_find_sequence(&model, &target)
            ),
        }

        rb.assert_invariants();
        assert_eq!(rb.len(), model.len());
        assert!(rb.capacity() >= capacity);
        assert_eq!(rb.capacity() % quantum, 0);
    }
}

fuzz_target!(|input: Input| run(input));
