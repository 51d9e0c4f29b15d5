//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync::OnceLock, time::SystemTime};

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::{generator::Rng, Error, SequentialGenerator, Uuid};

/// The random number generator used by the default constructors and the process-wide generator.
///
/// It wraps [`ChaCha12Rng`] seeded from the operating system.
#[derive(Clone, Debug)]
pub struct EntropyRng(ChaCha12Rng);

impl Default for EntropyRng {
    /// Seeds a new instance from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system fails to provide entropy.
    fn default() -> Self {
        Self(ChaCha12Rng::from_entropy())
    }
}

impl Rng for EntropyRng {
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.0)
    }
}

impl SequentialGenerator<EntropyRng> {
    /// Creates a generator that starts from `base` and ends its window at `window_end`, or at
    /// the default end (2300-12-31) if `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::{SequentialGenerator, Uuid};
    ///
    /// let base: Uuid = "0f8fad5b-d9cb-469f-a165-70867728950e".parse()?;
    /// let g = SequentialGenerator::new(base, None);
    /// assert_eq!(g.current(), base);
    /// assert_ne!(g.generate()?, base);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base: Uuid, window_end: Option<SystemTime>) -> Self {
        Self::with_rng(base, window_end, EntropyRng::default())
    }

    /// Creates a generator from a random version-4 base identifier.
    pub fn random(window_end: Option<SystemTime>) -> Self {
        Self::with_random_base(window_end, EntropyRng::default())
    }
}

impl Default for SequentialGenerator<EntropyRng> {
    /// Creates a generator from a random base identifier over the default window.
    fn default() -> Self {
        Self::random(None)
    }
}

/// Returns the process-wide generator, creating one if none exists.
///
/// Concurrent first calls initialize the generator exactly once.
fn global_gen() -> &'static SequentialGenerator<EntropyRng> {
    static G: OnceLock<SequentialGenerator<EntropyRng>> = OnceLock::new();
    G.get_or_init(Default::default)
}

/// Generates a sequential identifier from the process-wide generator and the system clock,
/// returning an error if the clock is outside the default window (2019-01-01 to 2300-12-31).
pub fn try_new_guid() -> Result<Uuid, Error> {
    global_gen().generate()
}

/// Generates a sequential identifier from the process-wide generator and the system clock.
///
/// The process-wide generator is created on first use with a random base identifier and the
/// default window. Identifiers returned by this function carry strictly increasing sequence
/// numbers across all threads of the process.
///
/// # Panics
///
/// Panics if the system clock is before 2019-01-01 or after 2300-12-31. Use [`try_new_guid()`]
/// to handle that case.
///
/// # Examples
///
/// ```rust
/// let a = seqguid::new_guid();
/// let b = seqguid::new_guid();
/// println!("{a}"); // e.g., "b1a4c3d2-0f1e-e49c-9f2b-7d3c0c8a1e55"
/// assert!(a.sequence() < b.sequence());
/// ```
pub fn new_guid() -> Uuid {
    try_new_guid().expect("seqguid: system clock outside of default epoch window")
}
