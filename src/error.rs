use std::{fmt, time::SystemTime};

/// Errors reported by a [`SequentialGenerator`](crate::SequentialGenerator).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The supplied time falls outside the half-open epoch window `[start, end)`.
    ///
    /// The generator state is left untouched when this is returned.
    OutOfRange {
        /// The rejected time.
        now: SystemTime,
        /// Inclusive lower bound of the window.
        start: SystemTime,
        /// Exclusive upper bound of the window.
        end: SystemTime,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { now, start, end } => write!(
                f,
                "time {} is outside of epoch window [{}, {})",
                unix_secs(now),
                unix_secs(start),
                unix_secs(end)
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Formats a time as signed Unix seconds for error messages.
fn unix_secs(t: &SystemTime) -> String {
    match t.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => format!("{}.{:09}", d.as_secs(), d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            format!("-{}.{:09}", d.as_secs(), d.subsec_nanos())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    /// Displays window bounds as Unix seconds
    #[test]
    fn displays_window_bounds_as_unix_seconds() {
        let e = Error::OutOfRange {
            now: UNIX_EPOCH - Duration::from_millis(1_500),
            start: UNIX_EPOCH + Duration::from_secs(10),
            end: UNIX_EPOCH + Duration::new(20, 5),
        };
        assert_eq!(
            e.to_string(),
            "time -1.500000000 is outside of epoch window [10.000000000, 20.000000005)"
        );
    }

    /// Is usable as a boxed error
    #[test]
    fn is_usable_as_a_boxed_error() {
        let now = SystemTime::now();
        let e: Box<dyn std::error::Error> = Box::new(Error::OutOfRange {
            now,
            start: now,
            end: now,
        });
        assert!(e.to_string().starts_with("time "));
    }
}
