// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Knobs controlling how strictly IPv6 literals are validated.

use derive_builder::Builder;

/// How strictly to validate an IPv6 literal.
///
/// The [`Default`] policy trims surrounding whitespace and only bounds the number of blocks when
/// `::` is used.
/// Use [`ValidationPolicyBuilder`] (or [`ValidationPolicy::strict`]) to change either behavior.
///
/// ```
/// # use addrlit_net::ipv6::{ValidationPolicy, ValidationPolicyBuilder};
/// let policy = ValidationPolicyBuilder::default()
///     .require_elision(true)
///     .build()
///     .unwrap();
/// assert!(policy.trim_whitespace());
/// assert!(policy.require_elision());
/// assert_eq!(policy, ValidationPolicy::strict());
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
pub struct ValidationPolicy {
    /// Strip leading and trailing whitespace before splitting.
    #[builder(default = true)]
    trim_whitespace: bool,

    /// Require `::` to stand for at least one all-zero hextet (RFC 4291 §2.2).
    ///
    /// When unset, `::` is accepted as long as the block count stays within bounds, so
    /// `"1:2:3:4::5:6:7:8"` is valid.
    #[builder(default = false)]
    require_elision: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            require_elision: false,
        }
    }
}

impl ValidationPolicy {
    /// The default policy with [`ValidationPolicy::require_elision`] set.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            trim_whitespace: true,
            require_elision: true,
        }
    }

    /// Whether surrounding whitespace is stripped before validation.
    #[must_use]
    pub const fn trim_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Whether `::` must elide at least one hextet.
    #[must_use]
    pub const fn require_elision(&self) -> bool {
        self.require_elision
    }
}
