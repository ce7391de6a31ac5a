//! Logger setup
//!
//! Records go straight to stderr, except while a pie is on screen. Then the
//! terminal is in raw mode on the alternate screen, where a log line would
//! tear the drawing and be lost when the screen is restored, so records are
//! held in memory until the guard flushes them.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use log::LevelFilter;

/// Most bytes held while the terminal is taken; later records are counted
/// and dropped
pub const MAX_HELD: usize = 1 << 20;

#[derive(Default)]
struct Sink {
    holding: bool,
    bytes: Vec<u8>,
    dropped: usize,
}

/// Log sink that can hold records back while the terminal is taken
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Sink>>);

impl LogBuffer {
    /// Hold records in memory until the next `drain`
    pub fn hold(&self) {
        let mut sink = self.0.lock().unwrap_or_else(|e| e.into_inner());
        sink.holding = true;
    }

    /// Take everything held so far and stop holding
    pub fn drain(&self) -> Vec<u8> {
        let mut sink = self.0.lock().unwrap_or_else(|e| e.into_inner());
        sink.holding = false;
        let mut bytes = std::mem::take(&mut sink.bytes);
        if sink.dropped > 0 {
            let note = format!("[{} bytes of log output dropped]\n", sink.dropped);
            bytes.extend_from_slice(note.as_bytes());
            sink.dropped = 0;
        }
        bytes
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.0.lock().unwrap_or_else(|e| e.into_inner());
        if !sink.holding {
            drop(sink);
            io::stderr().lock().write_all(buf)?;
        } else if sink.bytes.len() + buf.len() <= MAX_HELD {
            sink.bytes.extend_from_slice(buf);
        } else {
            sink.dropped += buf.len();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Releases held records to stderr on drop
pub struct LogGuard {
    buffer: LogBuffer,
}

impl LogGuard {
    /// Hold records back until `flush`, while the terminal is taken
    pub fn hold(&self) {
        self.buffer.hold();
    }

    pub fn flush(&self) {
        let bytes = self.buffer.drain();
        if !bytes.is_empty() {
            let mut stderr = io::stderr().lock();
            let _ = stderr.write_all(&bytes);
            let _ = stderr.flush();
        }
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Level for a `-v` count: warn, info, debug, then trace
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides `verbose`.
pub fn init(verbose: u8) -> LogGuard {
    let buffer = LogBuffer::default();
    let _ = env_logger::builder()
        .filter_level(level_for(verbose))
        .parse_env(env_logger::Env::default())
        .format_timestamp(None)
        .target(env_logger::Target::Pipe(Box::new(buffer.clone())))
        .try_init();
    LogGuard { buffer }
}
