// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Validation of IPv6 address literals (RFC 4291 §2.2).

use crate::addr_parse_error::InvalidIpv6;
use crate::ipv6::block::Blocks;
use crate::ipv6::compression;
use crate::ipv6::embedded::{self, DottedQuad, Ipv4Capability};
use crate::ipv6::policy::ValidationPolicy;
use std::str::FromStr;
use tracing::{debug, instrument};

#[allow(unused_imports)] // re-export
#[cfg(any(test, feature = "bolero"))]
pub use contract::*;

/// Where `::` sits in an accepted literal and how many all-zero hextets it stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elision {
    index: usize,
    groups: usize,
}

impl Elision {
    pub(crate) fn new(index: usize, groups: usize) -> Self {
        Self { index, groups }
    }

    /// The number of explicit hextets written before the `::`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The number of all-zero hextets the `::` replaces.
    ///
    /// Only zero if the [`ValidationPolicy`] does not require elision.
    #[must_use]
    pub fn groups(&self) -> usize {
        self.groups
    }
}

/// A summary of an accepted IPv6 literal.
///
/// This describes how the literal was written; it is not a normalized address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    explicit: usize,
    elision: Option<Elision>,
    embedded_ipv4: bool,
}

impl Shape {
    pub(crate) fn new(explicit: usize, elision: Option<Elision>, embedded_ipv4: bool) -> Self {
        Self {
            explicit,
            elision,
            embedded_ipv4,
        }
    }

    /// The number of hextets spelled out in the literal.
    #[must_use]
    pub fn explicit_hextets(&self) -> usize {
        self.explicit
    }

    /// The `::` compression, if one was used.
    #[must_use]
    pub fn elision(&self) -> Option<Elision> {
        self.elision
    }

    /// True if the literal ends in a dotted-quad IPv4 group.
    #[must_use]
    pub fn embedded_ipv4(&self) -> bool {
        self.embedded_ipv4
    }
}

impl FromStr for Shape {
    type Err = InvalidIpv6;

    /// Validate `s` with the default [`Validator`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_ipv6(s)
    }
}

/// A configured IPv6 literal validator.
///
/// Validators hold no state between calls and may be shared freely.
///
/// ```
/// # use addrlit_net::ipv6::{ValidationPolicy, Validator};
/// let validator = Validator::new(ValidationPolicy::strict());
/// assert!(validator.validate("2001:db8::1").is_ok());
/// assert!(validator.validate("1:2:3:4::5:6:7:8").is_err());
///
/// // any `Fn(&str) -> bool` can stand in for the IPv4 check
/// let only = |group: &str| group == "1.2.3.4";
/// let validator = Validator::with_ipv4(ValidationPolicy::default(), only);
/// assert!(validator.validate("::ffff:1.2.3.4").is_ok());
/// assert!(validator.validate("::ffff:4.3.2.1").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator<C = DottedQuad> {
    policy: ValidationPolicy,
    ipv4: C,
}

impl Validator {
    /// Create a validator using the built-in dotted-quad IPv4 check.
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ipv4: DottedQuad,
        }
    }
}

impl<C: Ipv4Capability> Validator<C> {
    /// Create a validator which delegates embedded IPv4 groups to `ipv4`.
    #[must_use]
    pub fn with_ipv4(policy: ValidationPolicy, ipv4: C) -> Self {
        Self { policy, ipv4 }
    }

    /// The policy this validator applies.
    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate `address` as an IPv6 literal.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidIpv6`] reason found.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn validate(&self, address: &str) -> Result<Shape, InvalidIpv6> {
        let text = if self.policy.trim_whitespace() {
            address.trim()
        } else {
            address
        };
        Blocks::split(text)
            .and_then(|blocks| embedded::carve_out(blocks, &self.ipv4))
            .and_then(|hextets| compression::analyze(&hextets, &self.policy))
            .inspect_err(|err| debug!("rejected {address:?}: {err}"))
    }

    /// Returns true if `address` is a valid IPv6 literal.
    #[must_use]
    pub fn is_valid(&self, address: &str) -> bool {
        self.validate(address).is_ok()
    }
}

/// Validate `address` as an IPv6 literal with the default [`ValidationPolicy`].
///
/// ```
/// # use addrlit_net::ipv6::validate_ipv6;
/// # use addrlit_net::InvalidIpv6;
/// let shape = validate_ipv6("2001:db8::8a2e:370:7334").unwrap();
/// assert_eq!(shape.explicit_hextets(), 5);
/// assert_eq!(validate_ipv6("1::1::1"), Err(InvalidIpv6::MultipleCompressions));
/// ```
///
/// # Errors
///
/// Returns the first [`InvalidIpv6`] reason found.
pub fn validate_ipv6(address: &str) -> Result<Shape, InvalidIpv6> {
    Validator::new(ValidationPolicy::default()).validate(address)
}

/// Returns true if `address` is a valid IPv6 literal under the default [`ValidationPolicy`].
#[must_use]
pub fn is_valid_ipv6(address: &str) -> bool {
    validate_ipv6(address).is_ok()
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::ipv6::embedded::Hextets;
    use crate::ipv6::literal::{Elision, Shape};
    use bolero::{Driver, TypeGenerator};
    use std::net::Ipv4Addr;

    /// A randomly written, valid IPv6 literal together with the [`Shape`] it must validate to.
    ///
    /// Compressions generated here always elide at least one hextet.
    #[derive(Clone, Debug)]
    pub struct GeneratedLiteral {
        /// The literal text
        pub text: String,
        /// The expected validation result
        pub shape: Shape,
    }

    impl TypeGenerator for GeneratedLiteral {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            let groups: [u16; 8] = driver.produce()?;
            let ipv4: Option<u32> = driver.produce()?;
            let elision: Option<(u8, u8)> = driver.produce()?;
            let upper: bool = driver.produce()?;

            let target = if ipv4.is_some() {
                Hextets::BEFORE_IPV4
            } else {
                Hextets::FULL
            };
            let hex: Vec<String> = groups[..target]
                .iter()
                .map(|group| {
                    if upper {
                        format!("{group:X}")
                    } else {
                        format!("{group:x}")
                    }
                })
                .collect();

            let elision = elision.map(|(start, len)| {
                let index = usize::from(start) % target;
                Elision::new(index, 1 + usize::from(len) % (target - index))
            });
            let mut text = match elision {
                None => hex.join(":"),
                Some(e) => format!(
                    "{}::{}",
                    hex[..e.index()].join(":"),
                    hex[e.index() + e.groups()..].join(":")
                ),
            };
            if let Some(bits) = ipv4 {
                if !text.ends_with(':') {
                    text.push(':');
                }
                text.push_str(&Ipv4Addr::from_bits(bits).to_string());
            }

            let explicit = target - elision.map_or(0, |e| e.groups());
            Some(GeneratedLiteral {
                text,
                shape: Shape::new(explicit, elision, ipv4.is_some()),
            })
        }
    }
}
