// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Errors which may occur when validating a textual network address.

use thiserror;

/// The reason an IPv6 address literal was rejected.
///
/// Only the first violation found is reported.
/// Block-count problems take precedence over compression problems, which in turn take precedence
/// over malformed individual hextets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum InvalidIpv6 {
    /// Fewer `:`-delimited blocks than the address form requires.
    #[error("too few segments")]
    TooFewSegments,
    /// More `:`-delimited blocks than the address form allows.
    #[error("too many segments")]
    TooManySegments,
    /// `::` was used more than once.
    #[error("more than one '::' compression")]
    MultipleCompressions,
    /// A stray `:` or a run of three or more colons.
    #[error("malformed '::' compression")]
    MalformedCompression,
    /// A block which is not 1 to 4 hexadecimal digits.
    #[error("invalid hextet: {0:?}")]
    InvalidHextet(String),
    /// The trailing dotted block was rejected by the IPv4 check.
    #[error("invalid embedded IPv4 address: {0:?}")]
    InvalidEmbeddedIpv4(String),
}

/// The reason an IPv4 dotted-quad literal was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum InvalidIpv4 {
    /// The literal does not have exactly four `.`-delimited octets.
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),
    /// An octet is empty or contains something other than decimal digits.
    #[error("octet {0:?} is not a decimal number")]
    NotDecimal(String),
    /// An octet is larger than 255.
    #[error("octet {0:?} is out of range (max is 255)")]
    OutOfRange(String),
}
