use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Public-key identifier of an account in the secondary execution
/// environment.
///
/// Keys are opaque 32-byte values to this layer; the execution engine
/// interprets them. A fraud challenge disputes the state of exactly one key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountKey([u8; 32]);

impl AccountKey {
    /// Create a key from its raw 32 bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
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

impl fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for AccountKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Account state in the secondary execution environment.
///
/// Produced by the replay engine, or supplied by a challenger as the claimed
/// state entering replay. The fields mirror the execution environment's
/// account model; `data` is opaque to the dispute layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's public-key identifier.
    pub key: AccountKey,
    /// Program that owns this account.
    pub owner: AccountKey,
    /// Native balance.
    pub balance: u64,
    /// Whether the account holds executable program code.
    pub executable: bool,
    /// Opaque state bytes interpreted only by the execution engine.
    pub data: Vec<u8>,
}

impl Account {
    /// Create an account with empty data, owned by the null program.
    pub fn with_balance(key: AccountKey, balance: u64) -> Self {
        Self {
            key,
            owner: AccountKey::new([0u8; 32]),
            balance,
            executable: false,
            data: Vec::new(),
        }
    }
}
