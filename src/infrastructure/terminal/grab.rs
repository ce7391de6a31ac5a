//! Exclusive input acquisition

use std::io;
use std::thread;
use std::time::Duration;

use crate::error::{PieMenuError, PieResult};

/// Attempts made before giving up
pub const GRAB_ATTEMPTS: u32 = 1000;

/// Pause between attempts
pub const GRAB_DELAY: Duration = Duration::from_millis(1);

/// Call `try_once` until it succeeds, at most `attempts` times with `delay`
/// between tries.
pub fn acquire<T>(
    attempts: u32,
    delay: Duration,
    mut try_once: impl FnMut() -> io::Result<T>,
) -> PieResult<T> {
    for attempt in 1..=attempts {
        match try_once() {
            Ok(value) => {
                if attempt > 1 {
                    log::debug!("input acquired after {} attempts", attempt);
                }
                return Ok(value);
            }
            Err(err) => {
                log::trace!("grab attempt {} failed: {}", attempt, err);
                if attempt < attempts {
                    thread::sleep(delay);
                }
            }
        }
    }
    Err(PieMenuError::InputGrab { attempts })
}
