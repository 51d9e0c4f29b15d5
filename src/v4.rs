//! Random (version 4) base identifiers

use crate::{generator::Rng, Uuid};

/// Generates a random identifier shaped as a UUIDv4 from `rng`.
///
/// 122 bits are random; the version nibble is `4` and the variant bits are `10`.
pub(crate) fn random_v4(rng: &mut impl Rng) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&rng.next_u64().to_le_bytes());
    bytes[8..].copy_from_slice(&rng.next_u64().to_le_bytes());
    bytes[6] = 0x40 | (bytes[6] >> 4);
    bytes[8] = 0x80 | (bytes[8] >> 2);
    Uuid::from(bytes)
}
