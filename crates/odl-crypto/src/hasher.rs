use odl_types::Digest;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag (e.g., `"odl-account-v1"`) that is
/// prepended to every hash computation. This prevents cross-type hash
/// collisions: an account state and a raw transaction with identical bytes
/// will produce different digests.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for canonical account-state commitments.
    pub const ACCOUNT: Self = Self {
        domain: "odl-account-v1",
    };
    /// Hasher for internal Merkle tree nodes.
    pub const MERKLE_NODE: Self = Self {
        domain: "odl-merkle-v1",
    };
    /// Hasher for recorded checkpoint payloads.
    pub const RECORD: Self = Self {
        domain: "odl-record-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Hash a pair of digests with domain separation. Used for Merkle
    /// parent nodes.
    pub fn hash_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Verify that data produces the expected digest.
    pub fn verify(&self, data: &[u8], expected: &Digest) -> bool {
        self.hash(data) == *expected
    }

    /// Raw BLAKE3 hash without domain separation (for low-level use).
    pub fn raw_hash(data: &[u8]) -> [u8; 32] {
        *blake3::hash(data).as_bytes()
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"account state";
        assert_eq!(ContentHasher::ACCOUNT.hash(data), ContentHasher::ACCOUNT.hash(data));
    }

    #[test]
    fn different_domains_produce_different_hashes() {
        let data = b"same content";
        let account = ContentHasher::ACCOUNT.hash(data);
        let merkle = ContentHasher::MERKLE_NODE.hash(data);
        let record = ContentHasher::RECORD.hash(data);
        assert_ne!(account, merkle);
        assert_ne!(account, record);
        assert_ne!(merkle, record);
    }

    #[test]
    fn verify_correct_data() {
        let data = b"payload";
        let digest = ContentHasher::RECORD.hash(data);
        assert!(ContentHasher::RECORD.verify(data, &digest));
    }

    #[test]
    fn verify_incorrect_data() {
        let digest = ContentHasher::RECORD.hash(b"original");
        assert!(!ContentHasher::RECORD.verify(b"tampered", &digest));
    }

    #[test]
    fn hash_pair_is_order_sensitive() {
        let a = Digest::from_bytes(b"a");
        let b = Digest::from_bytes(b"b");
        let ab = ContentHasher::MERKLE_NODE.hash_pair(&a, &b);
        let ba = ContentHasher::MERKLE_NODE.hash_pair(&b, &a);
        assert_ne!(ab, ba);
    }

    #[test]
    fn custom_domain() {
        let hasher = ContentHasher::new("odl-custom-v1");
        assert_ne!(hasher.hash(b"data"), ContentHasher::ACCOUNT.hash(b"data"));
    }

    #[test]
    fn raw_hash_no_domain() {
        let h1 = ContentHasher::raw_hash(b"test");
        let h2 = ContentHasher::raw_hash(b"test");
        assert_eq!(h1, h2);
        let domain_hash = ContentHasher::ACCOUNT.hash(b"test");
        assert_ne!(h1, *domain_hash.as_bytes());
    }
}
