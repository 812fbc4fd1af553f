// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Splitting an address literal into `:`-delimited blocks.

use crate::addr_parse_error::InvalidIpv6;

/// The `:`-delimited blocks of an address literal, in order, with empty blocks kept.
///
/// Empty blocks mark where `::` compression happened, so `"::1"` splits into `["", "", "1"]`
/// and `"1::"` into `["1", "", ""]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Blocks<'a>(Vec<&'a str>);

impl<'a> Blocks<'a> {
    /// The smallest number of blocks any valid literal splits into (`"::"`).
    pub(crate) const MIN: usize = 3;

    /// Split `address` on `:`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIpv6::TooFewSegments`] if there are fewer than [`Blocks::MIN`] blocks.
    pub(crate) fn split(address: &'a str) -> Result<Self, InvalidIpv6> {
        let blocks: Vec<&str> = address.split(':').collect();
        if blocks.len() < Self::MIN {
            return Err(InvalidIpv6::TooFewSegments);
        }
        Ok(Self(blocks))
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[&'a str] {
        &self.0
    }

    pub(crate) fn into_inner(self) -> Vec<&'a str> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::Blocks;
    use crate::addr_parse_error::InvalidIpv6;

    #[test]
    fn keeps_empty_blocks() {
        let cases: [(&str, &[&str]); 5] = [
            ("::", &["", "", ""]),
            ("::1", &["", "", "1"]),
            ("1::", &["1", "", ""]),
            ("1::2", &["1", "", "2"]),
            ("1:::2", &["1", "", "", "2"]),
        ];
        for (address, expected) in cases {
            let blocks = Blocks::split(address)
                .unwrap_or_else(|e| unreachable!("{address}: {e}"));
            assert_eq!(blocks.as_slice(), expected);
        }
    }

    #[test]
    fn too_few_blocks() {
        for address in ["", "0", "dasjkhdj", ":", "1:2", "12:12.12.32.4"] {
            assert_eq!(Blocks::split(address), Err(InvalidIpv6::TooFewSegments));
        }
    }
}
