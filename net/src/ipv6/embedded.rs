// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Detection of an IPv4 group embedded in the last block of an IPv6 literal.

use crate::addr_parse_error::InvalidIpv6;
use crate::ipv6::block::Blocks;
use tracing::trace;

/// The capability of checking a dotted-quad IPv4 literal.
///
/// The IPv6 validator only needs a yes/no answer, so any `Fn(&str) -> bool` will do.
pub trait Ipv4Capability {
    /// Returns true if `block` is a valid IPv4 literal.
    fn is_valid_ipv4(&self, block: &str) -> bool;
}

impl<F> Ipv4Capability for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_ipv4(&self, block: &str) -> bool {
        self(block)
    }
}

/// The default [`Ipv4Capability`], backed by [`crate::ipv4::is_valid_ipv4`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DottedQuad;

impl Ipv4Capability for DottedQuad {
    fn is_valid_ipv4(&self, block: &str) -> bool {
        crate::ipv4::is_valid_ipv4(block)
    }
}

/// The blocks which must be hextets (or compression markers), once any embedded IPv4 group
/// has been carved off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Hextets<'a> {
    blocks: Vec<&'a str>,
    embedded_ipv4: bool,
}

impl<'a> Hextets<'a> {
    /// The number of hextets in a literal without an embedded IPv4 group.
    pub(crate) const FULL: usize = 8;
    /// The number of hextets preceding an embedded IPv4 group (which stands for the last two).
    pub(crate) const BEFORE_IPV4: usize = 6;

    /// The hextet blocks, in order, empty blocks included.
    #[must_use]
    pub(crate) fn blocks(&self) -> &[&'a str] {
        &self.blocks
    }

    /// True if the blocks were followed by an IPv4 group.
    #[must_use]
    pub(crate) fn embedded_ipv4(&self) -> bool {
        self.embedded_ipv4
    }

    /// How many hextets the blocks must describe: [`Hextets::BEFORE_IPV4`] when an IPv4 group
    /// was carved off, [`Hextets::FULL`] otherwise.
    #[must_use]
    pub(crate) fn target(&self) -> usize {
        if self.embedded_ipv4 {
            Self::BEFORE_IPV4
        } else {
            Self::FULL
        }
    }
}

/// Remove a trailing IPv4 group from `blocks`, if the last block contains a `.`.
///
/// The removed block is handed verbatim to `ipv4`, at most once, and only if the blocks before it
/// are not already too many to precede an IPv4 group.
///
/// # Errors
///
/// Returns [`InvalidIpv6::TooManySegments`] if more than [`Hextets::BEFORE_IPV4`] + 1 blocks
/// precede the IPv4 group, or [`InvalidIpv6::InvalidEmbeddedIpv4`] if `ipv4` rejects it.
pub(crate) fn carve_out<'a, C>(blocks: Blocks<'a>, ipv4: &C) -> Result<Hextets<'a>, InvalidIpv6>
where
    C: Ipv4Capability + ?Sized,
{
    let mut blocks = blocks.into_inner();
    let Some(last) = blocks.last().copied().filter(|last| last.contains('.')) else {
        return Ok(Hextets {
            blocks,
            embedded_ipv4: false,
        });
    };
    if blocks.len() - 1 > Hextets::BEFORE_IPV4 + 1 {
        return Err(InvalidIpv6::TooManySegments);
    }
    if !ipv4.is_valid_ipv4(last) {
        return Err(InvalidIpv6::InvalidEmbeddedIpv4(last.to_string()));
    }
    trace!("embedded IPv4 group {last:?}");
    blocks.pop();
    Ok(Hextets {
        blocks,
        embedded_ipv4: true,
    })
}
