use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Material used to derive a [`PublisherId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublisherMaterial {
    /// Identity from an ed25519 public key (32 bytes).
    VerifyingKey([u8; 32]),
    /// Named identity for configuration and tests.
    Named(String),
}

/// Identity of a checkpoint publisher.
///
/// A `PublisherId` is derived deterministically from [`PublisherMaterial`]
/// using BLAKE3. The same material always produces the same identity, so a
/// publisher derived from a verifying key cannot be impersonated without
/// that key. Exactly one publisher is recorded per slot, for accountability.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublisherId {
    hash: [u8; 32],
}

impl PublisherId {
    /// Derive a `PublisherId` from identity material.
    pub fn derive(material: &PublisherMaterial) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"odl-publisher-v1:");
        match material {
            PublisherMaterial::VerifyingKey(pk) => {
                hasher.update(b"pubkey:");
                hasher.update(pk);
            }
            PublisherMaterial::Named(name) => {
                hasher.update(b"named:");
                hasher.update(name.as_bytes());
            }
        }
        Self {
            hash: *hasher.finalize().as_bytes(),
        }
    }

    /// Create an ephemeral (random) PublisherId for tests and demos.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self::derive(&PublisherMaterial::VerifyingKey(bytes))
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("pub:{}", hex::encode(&self.hash[..4]))
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("pub:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { hash: arr })
    }

    /// Create from a raw 32-byte hash. Use `derive()` for production code.
    pub fn from_raw(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl fmt::Debug for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublisherId({})", self.short_id())
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
