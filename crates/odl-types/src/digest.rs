use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// 32-byte BLAKE3 commitment value.
///
/// A `Digest` identifies content by its hash: state roots committed to the
/// ledger, Merkle tree nodes, and recomputed account commitments are all
/// digests. Identical content always produces the same `Digest`, which is
/// what makes recorded roots verifiable after the fact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Compute a `Digest` from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create a `Digest` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The null digest (all zeros). Represents "no commitment".
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null digest.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_bytes_is_deterministic() {
        let data = b"checkpoint payload";
        let d1 = Digest::from_bytes(data);
        let d2 = Digest::from_bytes(data);
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_data_produces_different_digests() {
        let d1 = Digest::from_bytes(b"slot 1");
        let d2 = Digest::from_bytes(b"slot 2");
        assert_ne!(d1, d2);
    }

    #[test]
    fn null_is_all_zeros() {
        let null = Digest::null();
        assert!(null.is_null());
        assert_eq!(null.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::from_bytes(b"root");
        let parsed = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = Digest::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            Digest::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn display_is_full_hex() {
        let digest = Digest::from_bytes(b"display");
        let shown = format!("{digest}");
        assert_eq!(shown.len(), 64);
        assert_eq!(shown, digest.to_hex());
    }

    #[test]
    fn serde_roundtrip() {
        let digest = Digest::from_bytes(b"serde");
        let json = serde_json::to_string(&digest).unwrap();
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn ordering_is_consistent() {
        let d1 = Digest::from_hash([0; 32]);
        let d2 = Digest::from_hash([1; 32]);
        assert!(d1 < d2);
    }

    proptest! {
        #[test]
        fn hex_roundtrip_any_hash(hash in proptest::array::uniform32(any::<u8>())) {
            let digest = Digest::from_hash(hash);
            let parsed = Digest::from_hex(&digest.to_hex()).unwrap();
            prop_assert_eq!(digest, parsed);
        }
    }
}
