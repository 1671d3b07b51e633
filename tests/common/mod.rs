#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use dualog::Logger;

/// Console capture for tests: a clonable `Write` over a shared byte buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 output")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().expect("buffer lock").is_empty()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger whose console sink is a capture buffer.
pub fn captured_logger() -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = Logger::with_console_sink(Box::new(buf.clone()));
    (logger, buf)
}
