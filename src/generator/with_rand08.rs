//! Integration with `rand` (v0.8) crate.

use super::{Rng, SequentialGenerator};
use crate::Uuid;
use rand::RngCore;
use std::time::SystemTime;

/// An adapter that implements [`Rng`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> Rng for Adapter<T> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<T: RngCore> SequentialGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::{SequentialGenerator, Uuid};
    ///
    /// let g = SequentialGenerator::with_rand08(Uuid::NIL, None, rand::thread_rng());
    /// println!("{}", g.generate()?);
    /// # Ok::<(), seqguid::Error>(())
    /// ```
    pub fn with_rand08(base: Uuid, window_end: Option<SystemTime>, rng: T) -> Self {
        Self::with_rng(base, window_end, Adapter(rng))
    }
}
