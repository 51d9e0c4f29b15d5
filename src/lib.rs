//! Time-ordered sequential GUIDs for database primary keys
//!
//! ```rust
//! let guid = seqguid::new_guid();
//! println!("{}", guid); // e.g., "b1a4c3d2-0f1e-e49c-9f2b-7d3c0c8a1e55"
//! println!("{:?}", guid.as_bytes()); // as 16-byte array
//! ```
//!
//! Random identifiers scatter inserts across a clustered index. The identifiers produced by this
//! crate instead embed a counter that grows with wall-clock time, so consecutive keys land next to
//! each other, while the remaining bytes keep them globally unique.
//!
//! # Field and byte layout
//!
//! A generator first builds a raw identifier from the first ten bytes of the identifier it issued
//! last and a 48-bit sequence number:
//!
//! ```text
//! byte   0    1    2    3    4    5    6    7    8    9   10   11   12   13   14   15
//!      +----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+
//!      | p0 | p1 | p2 | p3 | p4 | p5 | p6 | p7 | p8 | p9 | s0 | s1 | s2 | s3 | s4 | s5 |
//!      +----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+
//! ```
//!
//! Where `p0..p9` are the carried-forward (entropy) bytes and `s0..s5` the sequence number,
//! most significant byte first. The raw bytes are then reordered for SQL Server's
//! `uniqueidentifier` convention (see [`layout::reorder()`]), which yields:
//!
//! ```text
//! byte   0    1    2    3    4    5    6    7    8    9   10   11   12   13   14   15
//!      +----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+
//!      | s2 | s3 | s4 | s5 | s0 | s1 | p8 | p9 | p7 | p6 | p5 | p4 | p3 | p2 | p1 | p0 |
//!      +----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+----+
//! ```
//!
//! The sequence number is `floor((now - start) / (end - start) * 2^48)` for an epoch window
//! `[start, end)`, by default 2019-01-01 to 2300-12-31 (UTC), which gives a resolution of about
//! 32 microseconds. Whenever that value does not exceed the last one issued by the same
//! generator, the last value plus one is used instead. Therefore, the sequence numbers of one
//! generator strictly increase even for bursts within one clock tick or when the clock moves
//! backwards, and the identifiers never repeat.
//!
//! # Text form
//!
//! [`Uuid`] prints its 16 bytes in array order. .NET's `Guid.ToString()` prints the first three
//! groups of the same bytes as little-endian integers, so the two strings differ:
//!
//! ```rust
//! let x = seqguid::Uuid::from_bytes([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
//! assert_eq!(x.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
//! // .NET: new Guid(bytes).ToString() == "03020100-0504-0706-0809-0a0b0c0d0e0f"
//! ```
//!
//! Likewise, [`Uuid`]'s [`Ord`] compares bytes in array order, which is not issue order. Use
//! [`Uuid::sequence()`] to order the identifiers of one generator.
//!
//! # Crate features
//!
//! - `global_gen` (default): the process-wide generator behind [`new_guid()`] and constructors
//!   seeded from the operating system.
//! - `serde`: `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: conversions between [`Uuid`] and `uuid::Uuid`.
//! - `tracing`: trace-level spans and events from [`SequentialGenerator::advance()`].

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid};

mod error;
pub use error::Error;

pub mod layout;

mod window;
pub use window::{
    default_end, default_start, EpochWindow, DEFAULT_END_UNIX_SECS, DEFAULT_START_UNIX_SECS,
};

pub mod generator;
pub use generator::SequentialGenerator;

mod v4;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_guid, try_new_guid, EntropyRng};
