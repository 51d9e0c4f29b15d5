use std::{fmt, str};

use fstr::FStr;

use crate::layout;

/// Represents a 128-bit globally unique identifier.
///
/// The value is an opaque 16-byte array. Identifiers issued by a
/// [`SequentialGenerator`](crate::SequentialGenerator) additionally embed a 48-bit sequence
/// number, readable through [`Uuid::sequence()`].
///
/// # Ordering
///
/// [`Ord`] and [`PartialOrd`] compare the 16 bytes lexicographically in array order. The low 32
/// bits of the sequence number come first in the array, so this order does not follow the order
/// in which a generator issued its identifiers. Compare [`Uuid::sequence()`] to sort the output of
/// one generator by issue order.
///
/// ```rust
/// use seqguid::Uuid;
///
/// let earlier = "ffffffff-0000-0000-0000-000000000000".parse::<Uuid>()?;
/// let later = "00000000-0100-0000-0000-000000000000".parse::<Uuid>()?;
/// assert!(earlier.sequence() < later.sequence());
/// assert!(earlier > later);
/// # Ok::<(), seqguid::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an identifier from its 16-byte representation.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_ne_bytes(self.0) == 0
    }

    /// Returns the 48-bit sequence number embedded by a sequential generator.
    ///
    /// The result is meaningless for identifiers that were not issued by a generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::Uuid;
    ///
    /// let x = "89abcdef-0123-0000-0000-000000000000".parse::<Uuid>()?;
    /// assert_eq!(x.sequence(), 0x0123_89ab_cdef);
    /// # Ok::<(), seqguid::ParseError>(())
    /// ```
    pub const fn sequence(&self) -> u64 {
        layout::sequence_of(&self.0)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqguid::Uuid;
    ///
    /// let x = "b1a4c3d2-0f1e-e49c-9f2b-7d3c0c8a1e55".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "b1a4c3d2-0f1e-e49c-9f2b-7d3c0c8a1e55");
    /// assert_eq!(format!("{}", y), "b1a4c3d2-0f1e-e49c-9f2b-7d3c0c8a1e55");
    /// # Ok::<(), seqguid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        match FStr::from_inner(buffer) {
            Ok(s) => s,
            Err(_) => unreachable!("hex digits and hyphens are ASCII"),
        }
    }
}

/// Prints the bytes in array order as 8-4-4-4-12 lowercase hexadecimal groups.
///
/// This differs from .NET's `Guid.ToString()`, which prints the first three groups of the same 16
/// bytes as little-endian integers. Bytes `00 01 02 .. 0f` print here as
/// `00010203-0405-0607-0809-0a0b0c0d0e0f` but as `03020100-0504-0706-0809-0a0b0c0d0e0f` in .NET.
impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a GUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::Uuid;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
                "00010203-0405-0607-0809-0a0b0c0d0e0f",
            ),
            (
                [
                    0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                    0x07, 0x39, 0x8f,
                ],
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.to_string(), text);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(e).to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "0180a8f05b847438ab50f068decfbfd7",
            "0180a8f0-5b847438-ab50-f06991838802",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Reads sequence from the reordered positions
    #[test]
    fn reads_sequence_from_the_reordered_positions() {
        let e = Uuid::from([
            0x33, 0x44, 0x55, 0x66, 0x11, 0x22, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x01,
            0x02, 0x03,
        ]);
        assert_eq!(e.sequence(), 0x1122_3344_5566);
        assert_eq!(Uuid::NIL.sequence(), 0);
        assert_eq!(Uuid::MAX.sequence(), (1 << 48) - 1);
    }

    /// Encodes every byte value as two lowercase hex digits
    #[test]
    fn encodes_every_byte_value_as_two_lowercase_hex_digits() {
        for b in 0..=u8::MAX {
            let e = Uuid::from([b; 16]);
            let text = e.encode();
            let digits = format!("{:02x}", b);
            assert_eq!(text.len(), 36);
            for (i, group) in text.split('-').enumerate() {
                assert_eq!(group.len(), [8, 4, 4, 4, 12][i]);
                assert_eq!(group, digits.repeat(group.len() / 2));
            }
            assert_eq!(text.parse(), Ok(e));
        }
    }

    /// Prints bytes in array order instead of mixed-endian groups
    #[test]
    fn prints_bytes_in_array_order_instead_of_mixed_endian_groups() {
        let e = Uuid::from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(e.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
        assert_ne!(e.to_string(), "03020100-0504-0706-0809-0a0b0c0d0e0f");
        assert_eq!(e.to_string(), &e.encode() as &str);
    }

    /// Compares bytes in array order regardless of embedded sequence
    #[test]
    fn compares_bytes_in_array_order_regardless_of_embedded_sequence() {
        let a = Uuid::from([0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = Uuid::from([0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a.sequence(), 0xffff_ffff);
        assert_eq!(b.sequence(), 0x1_0000_0000);
        assert!(a > b);
        assert!(a.sequence() < b.sequence());
        assert!(u128::from(a) > u128::from(b));
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from_bytes(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }
}
