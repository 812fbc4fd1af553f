// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `::` compression analysis and block-count enforcement.
//!
//! A compression shows up in the split blocks as a run of empty blocks.
//! The run is two blocks wide at either end of the literal (`"::1"` is `["", "", "1"]`) and one
//! block wide anywhere else (`"1::2"` is `["1", "", "2"]`), including directly before an
//! embedded IPv4 group (`"1::1.2.3.4"` leaves `["1", ""]`).

use crate::addr_parse_error::InvalidIpv6;
use crate::ipv6::embedded::Hextets;
use crate::ipv6::hextet::is_hextet;
use crate::ipv6::literal::{Elision, Shape};
use crate::ipv6::policy::ValidationPolicy;
use std::cmp::Ordering;
use std::ops::Range;
use tracing::trace;

/// Check the shape, block count and hextets of `hextets`.
///
/// # Errors
///
/// Returns the first problem found, checking (in order) the block-count bound, the compression
/// shape, the hextet count and finally each hextet.
pub(crate) fn analyze(
    hextets: &Hextets<'_>,
    policy: &ValidationPolicy,
) -> Result<Shape, InvalidIpv6> {
    let blocks = hextets.blocks();
    let target = hextets.target();

    // one extra block for the second empty of a leading or trailing "::"
    if blocks.len() > target + 1 {
        return Err(InvalidIpv6::TooManySegments);
    }

    let elided_at = locate(blocks, hextets.embedded_ipv4())?;
    let explicit = blocks.iter().filter(|block| !block.is_empty()).count();

    match elided_at {
        None => match explicit.cmp(&target) {
            Ordering::Less => return Err(InvalidIpv6::TooFewSegments),
            Ordering::Greater => return Err(InvalidIpv6::TooManySegments),
            Ordering::Equal => {}
        },
        Some(_) => {
            let limit = if policy.require_elision() {
                target - 1
            } else {
                target
            };
            if explicit > limit {
                return Err(InvalidIpv6::TooManySegments);
            }
        }
    }

    if let Some(block) = blocks
        .iter()
        .find(|block| !block.is_empty() && !is_hextet(block))
    {
        return Err(InvalidIpv6::InvalidHextet((*block).to_string()));
    }

    let elision = elided_at.map(|index| Elision::new(index, target - explicit));
    Ok(Shape::new(explicit, elision, hextets.embedded_ipv4()))
}

/// Find the single compression in `blocks`, returning the index of the first hextet it precedes.
///
/// `before_ipv4` is set when the blocks were followed by an embedded IPv4 group.
fn locate(blocks: &[&str], before_ipv4: bool) -> Result<Option<usize>, InvalidIpv6> {
    if blocks.iter().all(|block| block.is_empty()) {
        // "::" on its own, or immediately followed by the IPv4 group
        let width = if before_ipv4 { 2 } else { 3 };
        return if blocks.len() == width {
            trace!("all-zero compression");
            Ok(Some(0))
        } else {
            Err(InvalidIpv6::MalformedCompression)
        };
    }

    let mut elided_at = None;
    for run in empty_runs(blocks) {
        if !is_well_formed(&run, blocks.len(), before_ipv4) {
            return Err(InvalidIpv6::MalformedCompression);
        }
        if elided_at.replace(run.start).is_some() {
            return Err(InvalidIpv6::MultipleCompressions);
        }
        trace!("compression at block {}", run.start);
    }
    Ok(elided_at)
}

fn is_well_formed(run: &Range<usize>, len: usize, before_ipv4: bool) -> bool {
    if run.start == 0 || (run.end == len && !before_ipv4) {
        run.len() == 2
    } else {
        run.len() == 1
    }
}

/// The maximal runs of consecutive empty blocks, left to right.
fn empty_runs(blocks: &[&str]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (index, block) in blocks.iter().enumerate() {
        match (block.is_empty(), start) {
            (true, None) => start = Some(index),
            (false, Some(first)) => {
                runs.push(first..index);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(first) = start {
        runs.push(first..blocks.len());
    }
    runs
}
