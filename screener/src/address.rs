//! 20-byte account addresses: lenient hex parsing, EIP-55 rendering and
//! derivation from secp256k1 public keys.

use alloy_primitives::hex;
use anyhow::{anyhow, Context, Result};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Byte length of an uncompressed SEC1 public key (`0x04 || X || Y`).
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Account address compared by its raw bytes. Rendering is always EIP-55.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(alloy_primitives::Address);

impl Address {
    pub const ZERO: Address = Address(alloy_primitives::Address::ZERO);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(alloy_primitives::Address::new(bytes))
    }

    pub const fn from_alloy(inner: alloy_primitives::Address) -> Self {
        Self(inner)
    }

    pub fn into_alloy(self) -> alloy_primitives::Address {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0 .0 .0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Derive the account address for a SEC1-encoded secp256k1 public key.
    ///
    /// The key is validated as a curve point first; the address is the low
    /// 20 bytes of keccak256 over the 64-byte `X || Y` body.
    pub fn from_public_key(sec1: &[u8]) -> Result<Self> {
        let key = k256::PublicKey::from_sec1_bytes(sec1)
            .map_err(|_| anyhow!("not a valid secp256k1 public key"))?;
        let point = key.to_encoded_point(false);
        Ok(Self(alloy_primitives::Address::from_raw_public_key(
            &point.as_bytes()[1..],
        )))
    }

    pub fn to_lower_hex(&self) -> String {
        hex::encode_prefixed(self.0)
    }

    /// EIP-55 mixed-case checksum encoding.
    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(inner: alloy_primitives::Address) -> Self {
        Self(inner)
    }
}

impl From<Address> for alloy_primitives::Address {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

impl FromStr for Address {
    type Err = anyhow::Error;

    /// Accepts 40 hex digits with an optional `0x` prefix in any casing.
    /// Checksum casing is not enforced; see [`has_valid_checksum`].
    fn from_str(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s.trim());
        let inner = alloy_primitives::Address::from_str(digits)
            .with_context(|| format!("{s:?} is not a 20-byte hex address"))?;
        Ok(Self(inner))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// True when `s` parses as an address.
pub fn is_address(s: &str) -> bool {
    s.parse::<Address>().is_ok()
}

/// True for single-case input or input whose mixed casing matches EIP-55.
pub fn has_valid_checksum(s: &str) -> bool {
    let Ok(addr) = s.parse::<Address>() else {
        return false;
    };
    let digits = strip_hex_prefix(s.trim());
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }
    addr.to_checksum()[2..] == *digits
}

/// Returns the decoded key bytes when `s` is `0x`-prefixed hex of exactly
/// the uncompressed public key length.
pub fn public_key_bytes(s: &str) -> Option<Vec<u8>> {
    let digits = s.strip_prefix("0x")?;
    if digits.len() != UNCOMPRESSED_PUBKEY_LEN * 2 {
        return None;
    }
    hex::decode(digits).ok()
}

/// `0x01e2919...5BB1` style abbreviation for display.
pub fn shorten(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 11 {
        return addr.to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
