use alloy_primitives::hex;
use screener::address::{self, Address};

// Private key 1, i.e. the generator point.
const G_UNCOMPRESSED: &str = "0x0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
const G_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

#[test]
fn checksum_matches_eip55_vectors() {
    for expected in [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ] {
        let addr: Address = expected.to_lowercase().parse().unwrap();
        assert_eq!(addr.to_checksum(), expected);
        assert_eq!(addr.to_string(), expected);
        assert!(address::has_valid_checksum(expected));
    }
}

#[test]
fn parsing_ignores_case_and_prefix() {
    let a: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
    let b: Address = "5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED".parse().unwrap();
    let c: Address = "0X5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn bad_mixed_case_is_still_an_address() {
    let wrong = "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    assert!(address::is_address(wrong));
    assert!(!address::has_valid_checksum(wrong));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in [
        "",
        "0x",
        "0x123",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAedd",
        "0xZaAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "vitalik.eth",
    ] {
        assert!(bad.parse::<Address>().is_err(), "{bad:?} parsed");
    }
}

#[test]
fn derives_address_from_public_key() {
    let key = address::public_key_bytes(G_UNCOMPRESSED).expect("pubkey shape");
    assert_eq!(key.len(), address::UNCOMPRESSED_PUBKEY_LEN);

    let first = Address::from_public_key(&key).unwrap();
    let second = Address::from_public_key(&key).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_checksum(), G_ADDRESS);
}

#[test]
fn compressed_key_derives_same_address() {
    let compressed =
        hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();
    let addr = Address::from_public_key(&compressed).unwrap();
    assert_eq!(addr.to_checksum(), G_ADDRESS);
}

#[test]
fn off_curve_key_is_rejected() {
    let bogus = format!("0x04{}", "00".repeat(64));
    let key = address::public_key_bytes(&bogus).expect("pubkey shape");
    assert!(Address::from_public_key(&key).is_err());
}

#[test]
fn public_key_detection_requires_exact_length() {
    assert!(address::public_key_bytes(&G_UNCOMPRESSED[..G_UNCOMPRESSED.len() - 2]).is_none());
    assert!(address::public_key_bytes(&format!("{G_UNCOMPRESSED}00")).is_none());
    assert!(address::public_key_bytes(&G_UNCOMPRESSED[2..]).is_none());
    assert!(address::public_key_bytes(G_ADDRESS).is_none());
}

#[test]
fn converts_to_and_from_alloy() {
    let addr: Address = G_ADDRESS.parse().unwrap();
    let inner = addr.into_alloy();
    assert_eq!(inner.to_checksum(None), G_ADDRESS);
    assert_eq!(Address::from(inner), addr);
    assert_eq!(addr.as_bytes(), inner.as_slice());
    assert_eq!(addr.to_lower_hex(), G_ADDRESS.to_lowercase());
    assert!(Address::ZERO.is_zero());
    assert!(!addr.is_zero());
}

#[test]
fn shortens_for_display() {
    assert_eq!(
        address::shorten("0x01e2919679362dFBC9ee1644Ba9C6da6D6245BB1"),
        "0x01e29...5BB1"
    );
    assert_eq!(address::shorten("0x1234"), "0x1234");
}

#[test]
fn serde_uses_checksum_form() {
    let addr: Address =
        serde_json::from_str("\"0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed\"").unwrap();
    assert_eq!(
        serde_json::to_string(&addr).unwrap(),
        "\"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\""
    );
    assert!(serde_json::from_str::<Address>("\"0x12\"").is_err());
}
