#![allow(missing_docs, dead_code)]

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

pub const HELLO: &[u8] = b"Hello";

/// Initialize trace-level test logging once per test binary.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(false)
            .try_init();
    });
}

pub fn write_hello(rb: &ringbuffer::RingBuffer) {
    assert_eq!(rb.write(HELLO), Ok(HELLO.len()), "written data length mismatch");
}

pub fn read_hello(rb: &ringbuffer::RingBuffer) {
    let mut buf = [0u8; 5];
    assert_eq!(rb.read(&mut buf), Ok(buf.len()), "read data length mismatch");
    assert_eq!(&buf, HELLO, "invalid data read");
}
