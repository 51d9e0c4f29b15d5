//! Byte layout of sequential identifiers.
//!
//! A raw identifier is a 10-byte entropy prefix followed by the low 48 bits of the sequence
//! number in big-endian order. The raw bytes are then passed through [`reorder()`], which moves
//! the sequence field to the front of the array so the result sorts the way SQL Server orders
//! `uniqueidentifier` values built by .NET.

/// Number of bytes carried forward from the previous identifier.
pub const PREFIX_BYTES: usize = 10;

/// Number of bytes holding the sequence number.
pub const SEQUENCE_BYTES: usize = 6;

/// One past the largest value the sequence field can hold.
pub const SEQUENCE_SPACE: u64 = 1 << (8 * SEQUENCE_BYTES);

/// Concatenates `prefix` and the low 48 bits of `sequence` (most significant byte first) into a
/// raw identifier.
pub const fn compose(prefix: [u8; PREFIX_BYTES], sequence: u64) -> [u8; 16] {
    let s = sequence.to_be_bytes();
    [
        prefix[0], prefix[1], prefix[2], prefix[3], prefix[4], prefix[5], prefix[6], prefix[7],
        prefix[8], prefix[9], s[2], s[3], s[4], s[5], s[6], s[7],
    ]
}

/// Applies the byte-reorder transform to a raw identifier.
///
/// The whole array is reversed, and then bytes `[0, 4)`, `[4, 6)` and `[6, 8)` are each reversed
/// again in that order. Bytes `[8, 16)` keep the fully reversed order.
///
/// # Examples
///
/// ```rust
/// let raw = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
/// assert_eq!(
///     seqguid::layout::reorder(raw),
///     [12, 13, 14, 15, 10, 11, 8, 9, 7, 6, 5, 4, 3, 2, 1, 0]
/// );
/// ```
pub fn reorder(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes.reverse();
    bytes[0..4].reverse();
    bytes[4..6].reverse();
    bytes[6..8].reverse();
    bytes
}

/// Extracts the sequence number from an identifier that went through [`reorder()`].
///
/// After reordering, the two high bytes of the sequence sit at `[4, 6)` and the four low bytes at
/// `[0, 4)`.
pub const fn sequence_of(bytes: &[u8; 16]) -> u64 {
    u64::from_be_bytes([
        0, 0, bytes[4], bytes[5], bytes[0], bytes[1], bytes[2], bytes[3],
    ])
}

#[cfg(test)]
mod tests {
    use super::{compose, reorder, sequence_of, SEQUENCE_SPACE};

    /// Reorders the counting test vector exactly
    #[test]
    fn reorders_the_counting_test_vector_exactly() {
        let raw: [u8; 16] = core::array::from_fn(|i| i as u8);
        assert_eq!(
            reorder(raw),
            [
                0x0c, 0x0d, 0x0e, 0x0f, 0x0a, 0x0b, 0x08, 0x09, 0x07, 0x06, 0x05, 0x04, 0x03,
                0x02, 0x01, 0x00
            ]
        );
    }

    /// Is not an involution
    #[test]
    fn is_not_an_involution() {
        let raw: [u8; 16] = core::array::from_fn(|i| i as u8);
        let twice = reorder(reorder(raw));
        assert_ne!(twice, raw);
        assert_eq!(
            twice,
            [
                0x03, 0x02, 0x01, 0x00, 0x05, 0x04, 0x07, 0x06, 0x09, 0x08, 0x0b, 0x0a, 0x0f,
                0x0e, 0x0d, 0x0c
            ]
        );
    }

    /// Composes prefix and truncated big-endian sequence
    #[test]
    fn composes_prefix_and_truncated_big_endian_sequence() {
        let prefix = [0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9];
        assert_eq!(
            compose(prefix, 0x0102_0304_0506),
            [
                0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9, 0x01, 0x02, 0x03,
                0x04, 0x05, 0x06
            ]
        );
        assert_eq!(compose(prefix, SEQUENCE_SPACE)[10..], [0; 6]);
        assert_eq!(compose(prefix, SEQUENCE_SPACE + 7)[10..], [0, 0, 0, 0, 0, 7]);
    }

    /// Recovers the sequence after reordering
    #[test]
    fn recovers_the_sequence_after_reordering() {
        let prefix = [0x5a; 10];
        for seq in [0, 1, 0xff, 0x1_0000, 0x0123_4567_89ab, SEQUENCE_SPACE - 1] {
            assert_eq!(sequence_of(&reorder(compose(prefix, seq))), seq);
        }
    }
}
