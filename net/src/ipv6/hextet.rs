// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Hextet validation.

/// The maximum number of hexadecimal digits in a hextet.
pub(crate) const MAX_DIGITS: usize = 4;

/// Returns true if `block` is a hextet: 1 to [`MAX_DIGITS`] hexadecimal digits, in either case.
///
/// The limit is on the text rather than the value, so `"00001"` is rejected even though it
/// denotes a 16 bit number.
#[must_use]
pub(crate) fn is_hextet(block: &str) -> bool {
    (1..=MAX_DIGITS).contains(&block.len()) && block.bytes().all(|b| b.is_ascii_hexdigit())
}
