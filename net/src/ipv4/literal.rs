// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Dotted-quad IPv4 literal validation.

use crate::addr_parse_error::InvalidIpv4;
use tracing::instrument;

/// The number of octets in a dotted-quad literal.
pub const OCTETS: usize = 4;

/// Check that `address` is a dotted-quad IPv4 literal (`d1.d2.d3.d4`).
///
/// Each octet must be a non-empty run of decimal digits with a value of at most 255.
/// Leading zeros are accepted (`"010.0.0.1"` is valid); whitespace is not.
///
/// # Errors
///
/// Returns an [`InvalidIpv4`] describing the first problem found.
#[instrument(level = "trace", ret)]
pub fn validate_ipv4(address: &str) -> Result<(), InvalidIpv4> {
    let count = address.split('.').count();
    if count != OCTETS {
        return Err(InvalidIpv4::OctetCount(count));
    }
    address.split('.').try_for_each(check_octet)
}

/// Returns true if `address` is a valid dotted-quad IPv4 literal.
///
/// See [`validate_ipv4`] for the rules.
#[must_use]
pub fn is_valid_ipv4(address: &str) -> bool {
    validate_ipv4(address).is_ok()
}

fn check_octet(octet: &str) -> Result<(), InvalidIpv4> {
    if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidIpv4::NotDecimal(octet.to_string()));
    }
    // digits only at this point, so overflow is the only way parsing fails
    octet
        .parse::<u8>()
        .map(|_| ())
        .map_err(|_| InvalidIpv4::OutOfRange(octet.to_string()))
}
