// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use addrlit_net::InvalidIpv6;
use addrlit_net::ipv4::is_valid_ipv4;
use addrlit_net::ipv6::{ValidationPolicy, Validator, is_valid_ipv6, validate_ipv6};

const VALID: &[&str] = &[
    "::",
    "::1",
    "1::",
    "1::2",
    "0:0:0:0:0:0:0:1",
    "FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF:FFFF",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
    "2001:db8:85a3::8a2e:370:7334",
    "fe80::",
    "1f5e:8fbe:e550:7a07:4679:14fc:1.2.3.4",
    "::1.2.3.4",
    "::ffff:192.168.1.1",
    "64:ff9b::192.0.2.33",
    "1:2:3:4:5::1.2.3.4",
    "1:2:3:4:5:6:7::",
    "::2:3:4:5:6:7:8",
    " 2001:db8::1 ",
];

const INVALID: &[(&str, InvalidIpv6)] = &[
    ("", InvalidIpv6::TooFewSegments),
    ("0", InvalidIpv6::TooFewSegments),
    ("dasjkhdj", InvalidIpv6::TooFewSegments),
    ("12:12.12.32.4", InvalidIpv6::TooFewSegments),
    ("1:2:3:4:5:6:7", InvalidIpv6::TooFewSegments),
    ("0:0:0:0:0:0:0:0:0", InvalidIpv6::TooManySegments),
    ("1:2:3:4:5:6:7:8::", InvalidIpv6::TooManySegments),
    ("1:2:3:4:5:6:7:1.2.3.4", InvalidIpv6::TooManySegments),
    ("1:2:3:4:5:6:7:8:9:10:1.2.3.999", InvalidIpv6::TooManySegments),
    ("1::1::1", InvalidIpv6::MultipleCompressions),
    ("::1::", InvalidIpv6::MultipleCompressions),
    ("1:::2", InvalidIpv6::MalformedCompression),
    (":::", InvalidIpv6::MalformedCompression),
    (":1:2:3:4:5:6:7", InvalidIpv6::MalformedCompression),
    ("1:2:3:4:5:6:7:", InvalidIpv6::MalformedCompression),
];

#[test]
fn valid_literals() {
    for address in VALID {
        assert!(
            validate_ipv6(address).is_ok(),
            "{address:?}: {:?}",
            validate_ipv6(address)
        );
    }
}

#[test]
fn invalid_literals() {
    for (address, reason) in INVALID {
        assert_eq!(validate_ipv6(address).as_ref(), Err(reason), "{address:?}");
    }
}

#[test]
fn validation_is_idempotent() {
    let invalid = INVALID.iter().map(|(address, _)| address);
    for address in VALID.iter().chain(invalid) {
        assert_eq!(validate_ipv6(address), validate_ipv6(address));
    }
}

#[test]
fn oversized_hextets() {
    let all_ones = ["FFFF"; 8];
    for position in 0..all_ones.len() {
        let mut blocks = all_ones;
        blocks[position] = "10000";
        assert_eq!(
            validate_ipv6(&blocks.join(":")),
            Err(InvalidIpv6::InvalidHextet("10000".to_string()))
        );
    }
    assert_eq!(
        validate_ipv6("00001::"),
        Err(InvalidIpv6::InvalidHextet("00001".to_string()))
    );
    assert_eq!(
        validate_ipv6("::zzzz"),
        Err(InvalidIpv6::InvalidHextet("zzzz".to_string()))
    );
}

#[test]
fn embedded_ipv4() {
    assert_eq!(
        validate_ipv6("0:0:0:0:0:0:1.2.3.4.5"),
        Err(InvalidIpv6::InvalidEmbeddedIpv4("1.2.3.4.5".to_string()))
    );
    assert_eq!(
        validate_ipv6("::ffff:256.1.1.1"),
        Err(InvalidIpv6::InvalidEmbeddedIpv4("256.1.1.1".to_string()))
    );
    // a dotted block anywhere but the end is just a bad hextet
    assert_eq!(
        validate_ipv6("1.2.3.4::"),
        Err(InvalidIpv6::InvalidHextet("1.2.3.4".to_string()))
    );
}

#[test]
fn validators_are_shareable_across_threads() {
    let validator = Validator::new(ValidationPolicy::strict());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for address in VALID {
                    assert!(validator.is_valid(address), "{address:?}");
                }
            });
        }
    });
}

#[test]
fn ipv4_collaborator_matches_embedded_groups() {
    for group in ["1.2.3.4", "0.0.0.0", "255.255.255.255"] {
        assert!(is_valid_ipv4(group));
        assert!(is_valid_ipv6(&format!("::{group}")));
    }
    for group in ["1.2.3", "1.2.3.4.5", "1.2.3.x", "1.2.3.300"] {
        assert!(!is_valid_ipv4(group));
        assert!(!is_valid_ipv6(&format!("::{group}")));
    }
}
