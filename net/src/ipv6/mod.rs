// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IPv6 address literals
//!
//! A literal is split on `:`, a trailing dotted-quad group is handed to an [`Ipv4Capability`],
//! the `::` compression and block count are checked and finally every remaining block must be a
//! hextet of 1 to 4 hexadecimal digits.

mod block;
mod compression;
mod embedded;
mod hextet;
mod literal;
mod policy;

pub use embedded::{DottedQuad, Ipv4Capability};
pub use literal::*;
pub use policy::{ValidationPolicy, ValidationPolicyBuilder, ValidationPolicyBuilderError};
