//! Epoch window and the time-to-sequence mapping.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{layout::SEQUENCE_SPACE, Error};

/// Unix seconds of 2019-01-01T00:00:00Z, the default window start.
pub const DEFAULT_START_UNIX_SECS: u64 = 1_546_300_800;

/// Unix seconds of 2300-12-31T00:00:00Z, the default window end.
pub const DEFAULT_END_UNIX_SECS: u64 = 10_445_241_600;

/// Returns the default window start (2019-01-01T00:00:00Z).
pub fn default_start() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(DEFAULT_START_UNIX_SECS)
}

/// Returns the default window end (2300-12-31T00:00:00Z).
pub fn default_end() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(DEFAULT_END_UNIX_SECS)
}

/// Half-open time range `[start, end)` over which the 48-bit sequence space is spread.
///
/// The window is fixed when a generator is constructed. A window whose end is not after its start
/// is accepted but contains no instant, so every [`sequence_at()`](Self::sequence_at) call on it
/// fails.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EpochWindow {
    start: SystemTime,
    end: SystemTime,
}

impl EpochWindow {
    /// Creates a window from explicit bounds.
    pub const fn new(start: SystemTime, end: SystemTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from the default start to `end`.
    pub fn ending_at(end: SystemTime) -> Self {
        Self::new(default_start(), end)
    }

    /// Returns the inclusive lower bound.
    pub const fn start(&self) -> SystemTime {
        self.start
    }

    /// Returns the exclusive upper bound.
    pub const fn end(&self) -> SystemTime {
        self.end
    }

    /// Returns `true` if `now` lies within `[start, end)`.
    pub fn contains(&self, now: SystemTime) -> bool {
        self.start <= now && now < self.end
    }

    /// Maps `now` to `floor((now - start) / (end - start) * 2^48)`.
    ///
    /// The division is carried out on integer nanoseconds, so the result never decreases as `now`
    /// increases and is always below `2^48`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `now` is outside the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::EpochWindow;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let w = EpochWindow::new(UNIX_EPOCH, UNIX_EPOCH + Duration::from_secs(4));
    /// assert_eq!(w.sequence_at(UNIX_EPOCH)?, 0);
    /// assert_eq!(w.sequence_at(UNIX_EPOCH + Duration::from_secs(1))?, 1 << 46);
    /// assert!(w.sequence_at(UNIX_EPOCH + Duration::from_secs(4)).is_err());
    /// # Ok::<(), seqguid::Error>(())
    /// ```
    pub fn sequence_at(&self, now: SystemTime) -> Result<u64, Error> {
        let out_of_range = || Error::OutOfRange {
            now,
            start: self.start,
            end: self.end,
        };

        let elapsed = now.duration_since(self.start).map_err(|_| out_of_range())?;
        let span = self.end.duration_since(self.start).unwrap_or(Duration::ZERO);
        if elapsed >= span {
            return Err(out_of_range());
        }
        Ok(scale(elapsed.as_nanos(), span.as_nanos()))
    }
}

impl Default for EpochWindow {
    /// Returns the window from 2019-01-01 to 2300-12-31 (UTC).
    fn default() -> Self {
        Self::new(default_start(), default_end())
    }
}

/// Computes `floor(elapsed * 2^48 / span)` for `elapsed < span`.
fn scale(mut elapsed: u128, mut span: u128) -> u64 {
    // keep `elapsed << 48` within 128 bits; the default window is about 2^63 ns long
    while span >> 80 != 0 {
        elapsed >>= 1;
        span >>= 1;
    }
    let seq = (elapsed << 48) / span;
    // both operands were shifted alike, so `elapsed == span` is possible here
    seq.min(u128::from(SEQUENCE_SPACE - 1)) as u64
}
