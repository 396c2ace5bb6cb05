use odl_types::{Account, Digest};

use crate::hasher::ContentHasher;

/// Compute the canonical commitment for an account's state.
///
/// The encoding is a fixed field order with length-prefixed variable parts,
/// so two accounts commit to the same digest exactly when every field is
/// equal. This is the leaf value a recorded state root commits to, and the
/// value the challenge resolver recomputes from replay output.
pub fn account_commitment(account: &Account) -> Digest {
    let mut buf = Vec::with_capacity(32 + 32 + 8 + 1 + 8 + account.data.len());
    buf.extend_from_slice(account.key.as_bytes());
    buf.extend_from_slice(account.owner.as_bytes());
    buf.extend_from_slice(&account.balance.to_le_bytes());
    buf.push(account.executable as u8);
    buf.extend_from_slice(&(account.data.len() as u64).to_le_bytes());
    buf.extend_from_slice(&account.data);
    ContentHasher::ACCOUNT.hash(&buf)
}

#[cfg(test)]
mod tests {
    use odl_types::AccountKey;

    use super::*;

    fn account() -> Account {
        Account {
            key: AccountKey::new([1u8; 32]),
            owner: AccountKey::new([2u8; 32]),
            balance: 1_000,
            executable: false,
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn commitment_is_deterministic() {
        assert_eq!(account_commitment(&account()), account_commitment(&account()));
    }

    #[test]
    fn every_field_is_commitment_relevant() {
        let base = account_commitment(&account());

        let mut changed = account();
        changed.key = AccountKey::new([9u8; 32]);
        assert_ne!(account_commitment(&changed), base);

        let mut changed = account();
        changed.owner = AccountKey::new([9u8; 32]);
        assert_ne!(account_commitment(&changed), base);

        let mut changed = account();
        changed.balance += 1;
        assert_ne!(account_commitment(&changed), base);

        let mut changed = account();
        changed.executable = true;
        assert_ne!(account_commitment(&changed), base);

        let mut changed = account();
        changed.data.push(4);
        assert_ne!(account_commitment(&changed), base);
    }

    #[test]
    fn length_prefix_prevents_field_bleed() {
        // Same concatenated bytes, different field boundaries.
        let mut a = account();
        a.data = vec![1, 2];
        let mut b = account();
        b.data = vec![1, 2, 0];
        assert_ne!(account_commitment(&a), account_commitment(&b));
    }

    #[test]
    fn empty_data_commits() {
        let mut a = account();
        a.data.clear();
        assert!(!account_commitment(&a).is_null());
    }
}
