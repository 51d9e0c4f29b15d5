//! Sequential identifier generator and related types.

use std::time::SystemTime;

use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    layout::{self, PREFIX_BYTES},
    v4, EpochWindow, Error, Uuid,
};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for
/// [`SequentialGenerator`].
pub trait Rng {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// Represents a generator that derives time-ordered identifiers from a base identifier.
///
/// Every identifier issued by [`advance`] embeds a 48-bit sequence number computed from the
/// position of the given time within the generator's [`EpochWindow`]. The sequence numbers of one
/// generator strictly increase in the order calls acquire the internal lock: when the computed
/// value does not exceed the last one issued (a burst within one clock tick, or a clock that
/// stood still or moved back), the last value plus one is used instead.
///
/// All methods take `&self`. The state is guarded by a [`parking_lot::Mutex`] held only for a few
/// arithmetic and byte operations, so a generator can be shared across threads directly (e.g.,
/// through [`std::sync::Arc`] or a scoped borrow). The generator is `Sync` whenever `R` is `Send`;
/// the random number generator is only touched while the lock is held.
///
/// # Examples
///
/// ```rust
/// use seqguid::{SequentialGenerator, Uuid};
/// use std::{thread, time::SystemTime};
///
/// let base: Uuid = "3f2b6c1a-9d4e-4f0a-8b7c-1d2e3f4a5b6c".parse()?;
/// let g = SequentialGenerator::with_rand08(base, None, rand::rngs::OsRng);
/// assert_eq!(g.current(), base);
///
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.advance(SystemTime::now()).unwrap(), i);
///             }
///         });
///     }
/// });
/// assert_eq!(g.last_sequence(), g.current().sequence());
/// # Ok::<(), seqguid::ParseError>(())
/// ```
///
/// [`advance`]: SequentialGenerator::advance
#[derive(Debug)]
pub struct SequentialGenerator<R> {
    window: EpochWindow,
    state: Mutex<State<R>>,
}

#[derive(Debug)]
struct State<R> {
    current: Uuid,
    last_sequence: u64,

    /// Used to refresh the entropy prefix when `current` is Nil.
    rng: R,
}

impl<R: Rng> SequentialGenerator<R> {
    /// Creates a generator that starts from `base` and spreads the sequence space over the window
    /// from the default start (2019-01-01) to `window_end`, or to the default end (2300-12-31) if
    /// `window_end` is `None`.
    pub fn with_rng(base: Uuid, window_end: Option<SystemTime>, rng: R) -> Self {
        let window = match window_end {
            Some(end) => EpochWindow::ending_at(end),
            None => EpochWindow::default(),
        };
        Self::with_window(base, window, rng)
    }

    /// Creates a generator with a random version-4 base identifier drawn from `rng`.
    pub fn with_random_base(window_end: Option<SystemTime>, mut rng: R) -> Self {
        let base = v4::random_v4(&mut rng);
        Self::with_rng(base, window_end, rng)
    }

    /// Creates a generator over an explicit window.
    pub fn with_window(base: Uuid, window: EpochWindow, rng: R) -> Self {
        Self {
            window,
            state: Mutex::new(State {
                current: base,
                last_sequence: 0,
                rng,
            }),
        }
    }

    /// Returns the epoch window of the generator.
    pub const fn window(&self) -> &EpochWindow {
        &self.window
    }

    /// Returns the most recently issued identifier, or the base identifier if none has been
    /// issued yet.
    pub fn current(&self) -> Uuid {
        self.state.lock().current
    }

    /// Returns the sequence number most recently assigned, or zero if none has been assigned yet.
    pub fn last_sequence(&self) -> u64 {
        self.state.lock().last_sequence
    }

    /// Issues a new identifier for `now`.
    ///
    /// The first ten bytes of the current identifier (replaced with a random one if it is Nil) are
    /// followed by the 48-bit sequence number, and the result goes through
    /// [`layout::reorder()`] before it becomes the new current identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] without touching the generator state if `now` is before the
    /// window start or not before the window end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::{SequentialGenerator, Uuid};
    /// use std::time::SystemTime;
    ///
    /// let g = SequentialGenerator::with_rand08(Uuid::MAX, None, rand::rngs::OsRng);
    /// let now = SystemTime::now();
    /// let a = g.advance(now)?;
    /// let b = g.advance(now)?;
    /// assert_eq!(b.sequence(), a.sequence() + 1);
    /// # Ok::<(), seqguid::Error>(())
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn advance(&self, now: SystemTime) -> Result<Uuid, Error> {
        let candidate = match self.window.sequence_at(now) {
            Ok(seq) => seq,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%err, "rejected time outside of epoch window");
                return Err(err);
            }
        };

        let mut state = self.state.lock();
        let sequence = if candidate <= state.last_sequence {
            #[cfg(feature = "tracing")]
            tracing::trace!(candidate, last = state.last_sequence, "bumped sequence");
            state.last_sequence + 1
        } else {
            candidate
        };
        state.last_sequence = sequence;

        if state.current.is_nil() {
            state.current = v4::random_v4(&mut state.rng);
        }
        let mut prefix = [0u8; PREFIX_BYTES];
        prefix.copy_from_slice(&state.current.as_bytes()[..PREFIX_BYTES]);

        let value = Uuid::from(layout::reorder(layout::compose(prefix, sequence)));
        state.current = value;
        Ok(value)
    }

    /// Issues a new identifier for the current system time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the system clock is outside the window.
    pub fn generate(&self) -> Result<Uuid, Error> {
        self.advance(SystemTime::now())
    }
}
