// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

#![forbid(unsafe_code)] // Validation logic should always be strictly safe
#![deny(missing_docs, clippy::all, clippy::pedantic)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! A library for strictly validating textual network address literals.
//!
//! ```
//! use addrlit_net::InvalidIpv6;
//! use addrlit_net::ipv6::validate_ipv6;
//!
//! assert!(validate_ipv6("fe80::1").is_ok());
//! assert!(validate_ipv6("::ffff:192.0.2.1").is_ok());
//! assert_eq!(validate_ipv6("1:::2"), Err(InvalidIpv6::MalformedCompression));
//! ```

pub mod addr_parse_error;
pub mod ipv4;
pub mod ipv6;

pub use addr_parse_error::{InvalidIpv4, InvalidIpv6};
