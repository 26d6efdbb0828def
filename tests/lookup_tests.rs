use ouidb::{OuiPrefix, OuiRegistry, VendorRepository, lookup_manufacturers, manufacturers_for};

#[test]
fn test_lookup_known_prefix() {
    assert_eq!(lookup_manufacturers("F0:27:2D:11:22:33"), ["amazon"]);
}

#[test]
fn test_lookup_returns_every_association() {
    // A chipset vendor's allocation shipping inside another brand's product
    // keeps both names, registration order first.
    assert_eq!(
        lookup_manufacturers("6c:ad:f8:00:00:00"),
        ["azurewave", "google"]
    );
    assert_eq!(
        lookup_manufacturers("48:5A:3F:AA:BB:CC"),
        ["samsung", "wisol"]
    );
}

#[test]
fn test_lookup_is_case_insensitive() {
    let lower = lookup_manufacturers("f0:27:2d:aa:bb:cc");
    let upper = lookup_manufacturers("F0:27:2D:AA:BB:CC");
    let mixed = lookup_manufacturers("f0:27:2D:Aa:bB:cc");

    assert_eq!(lower, ["amazon"]);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_lookup_ignores_trailing_octets() {
    let a = lookup_manufacturers("00:1a:11:00:00:00");
    let b = lookup_manufacturers("00:1a:11:ff:ff:ff");
    let c = lookup_manufacturers("00:1a:11:de:ad:42");

    assert_eq!(a, ["google"]);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_lookup_unknown_prefix_is_empty() {
    // Not an error, just an unregistered device.
    assert!(lookup_manufacturers("AA:BB:CC:DD:EE:FF").is_empty());
    assert!(lookup_manufacturers("ff:ff:ff:ff:ff:ff").is_empty());
}

#[test]
fn test_lookup_malformed_input_is_empty() {
    assert!(lookup_manufacturers("invalid").is_empty());
    assert!(lookup_manufacturers("").is_empty());
    assert!(lookup_manufacturers("f0:27").is_empty());
    assert!(lookup_manufacturers("f0-27-2d-aa-bb-cc").is_empty());
    assert!(lookup_manufacturers("zz:zz:zz:00:00:00").is_empty());
}

#[test]
fn test_lookup_is_idempotent() {
    let first = lookup_manufacturers("18:b4:30:12:34:56");
    let second = lookup_manufacturers("18:b4:30:12:34:56");

    assert_eq!(first, ["nest"]);
    assert_eq!(first, second);
}

#[test]
fn test_lookup_by_parsed_prefix() {
    assert_eq!(manufacturers_for(OuiPrefix::new(0x00, 0x1a, 0x11)), ["google"]);
    assert!(manufacturers_for(OuiPrefix::new(0xde, 0xad, 0x00)).is_empty());
}

#[test]
fn test_repository_trait_resolves_vendors() {
    let repo = OuiRegistry;
    assert_eq!(repo.manufacturers("30:8c:fb:01:02:03"), ["dropcam"]);
    assert!(repo.manufacturers("not a mac").is_empty());
}

#[test]
fn test_strict_parse_rejects_what_lookup_swallows() {
    // The lenient lookup degrades to "no match"; the typed path reports
    // the malformed input instead.
    for input in ["invalid", "", "aa:bb", "f:27:2d"] {
        assert!(lookup_manufacturers(input).is_empty());
        assert!(OuiPrefix::from_address(input).is_err());
    }
}
