//! # Derivation Driver
//!
//! Walks the HD key tree and feeds each leaf public key through the codec
//! and fingerprint layers. The tree walk itself is somebody else's problem:
//! the driver talks to the outside world through [`KeySource`], a two-method
//! capability trait, so the pipeline carries zero dependency on any
//! particular curve-arithmetic library. The production implementation over
//! `bitcoin::bip32` lives in [`bip32`]; tests substitute their own.
//!
//! The walk is fixed-shape on purpose: one intermediate "account" child at
//! index 0, then leaves 0..N below it. One level, one index, no paths, no
//! configuration. Generalizing this is a format change, not a feature flag.
//!
//! Each iteration is a pure function of one key — no state crosses from one
//! index to the next, so the sequential loop below is a choice of clarity,
//! not a correctness requirement.

pub mod bip32;

use crate::codec::{encode_public_key, CurvePoint};
use crate::config::ACCOUNT_INDEX;
use crate::fingerprint::Principal;

/// Capability interface over the external HD key-derivation collaborator.
///
/// Implementors hand out non-hardened children and expose the raw public
/// key point. That is the entire contract — parsing, curve math, and chain
/// codes all stay on the implementor's side of the line.
pub trait KeySource: Sized {
    /// Failure type of the collaborator. Surfaced unchanged by the driver.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derive the non-hardened child at `index`.
    fn derive_child(&self, index: u32) -> Result<Self, Self::Error>;

    /// The public key point of this node.
    fn public_key_point(&self) -> CurvePoint;
}

/// Compute the principal naming a single public key point.
///
/// The codec and fingerprint layers are infallible, so this is too.
pub fn principal_for_point(point: &CurvePoint) -> Principal {
    Principal::self_authenticating(&encode_public_key(point))
}

/// Derive `count` principals from `root`, in leaf-index order.
///
/// Derives the fixed account child first, then one leaf per index in
/// `[0, count)`. `count = 0` is a valid request and yields an empty vector.
///
/// Any collaborator failure aborts the whole run — a partially derived
/// batch is worthless, and skipping a failing index would silently shift
/// every principal after it.
pub fn derive_principals<K: KeySource>(
    root: &K,
    count: u32,
) -> Result<Vec<Principal>, K::Error> {
    let account = root.derive_child(ACCOUNT_INDEX)?;

    let mut principals = Vec::with_capacity(count as usize);
    for index in 0..count {
        let leaf = account.derive_child(index)?;
        let principal = principal_for_point(&leaf.public_key_point());
        tracing::debug!(index, %principal, "derived principal");
        principals.push(principal);
    }
    Ok(principals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELD_BYTES;
    use sha2::{Digest, Sha256};

    /// A deterministic stand-in collaborator. Children are reached by
    /// hashing the parent seed with the child index; "points" are hash
    /// output. Not on any curve — the driver never checks, and shouldn't.
    #[derive(Clone)]
    struct StubSource {
        seed: [u8; 32],
        /// First index at which derivation fails, if any.
        poisoned_at: Option<u32>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("stub derivation refused index {0}")]
    struct StubError(u32);

    impl StubSource {
        fn new(label: &[u8]) -> Self {
            let mut seed = [0u8; 32];
            seed.copy_from_slice(&Sha256::digest(label));
            Self {
                seed,
                poisoned_at: None,
            }
        }

        fn poisoned(label: &[u8], at: u32) -> Self {
            Self {
                poisoned_at: Some(at),
                ..Self::new(label)
            }
        }
    }

    impl KeySource for StubSource {
        type Error = StubError;

        fn derive_child(&self, index: u32) -> Result<Self, Self::Error> {
            if self.poisoned_at == Some(index) {
                return Err(StubError(index));
            }
            let mut hasher = Sha256::new();
            hasher.update(self.seed);
            hasher.update(index.to_be_bytes());
            let mut seed = [0u8; 32];
            seed.copy_from_slice(&hasher.finalize());
            Ok(Self {
                seed,
                poisoned_at: self.poisoned_at,
            })
        }

        fn public_key_point(&self) -> CurvePoint {
            let mut y = [0u8; FIELD_BYTES];
            y.copy_from_slice(&Sha256::digest(self.seed));
            CurvePoint::new(self.seed, y)
        }
    }

    #[test]
    fn zero_count_yields_empty_batch() {
        let root = StubSource::new(b"root");
        let principals = derive_principals(&root, 0).unwrap();
        assert!(principals.is_empty());
    }

    #[test]
    fn batch_is_deterministic_and_ordered() {
        let root = StubSource::new(b"root");
        let a = derive_principals(&root, 5).unwrap();
        let b = derive_principals(&root, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);

        // A shorter run is a prefix of a longer one — index order holds.
        let prefix = derive_principals(&root, 3).unwrap();
        assert_eq!(&a[..3], &prefix[..]);
    }

    #[test]
    fn distinct_indices_yield_distinct_principals() {
        let root = StubSource::new(b"root");
        let principals = derive_principals(&root, 16).unwrap();
        for i in 0..principals.len() {
            for j in (i + 1)..principals.len() {
                assert_ne!(principals[i], principals[j], "indices {i} and {j} collided");
            }
        }
    }

    #[test]
    fn leaves_hang_off_the_fixed_account_child() {
        let root = StubSource::new(b"root");
        let principals = derive_principals(&root, 2).unwrap();

        // Reproduce the walk by hand: root -> account 0 -> leaf i.
        let account = root.derive_child(ACCOUNT_INDEX).unwrap();
        for (i, principal) in principals.iter().enumerate() {
            let leaf = account.derive_child(i as u32).unwrap();
            assert_eq!(*principal, principal_for_point(&leaf.public_key_point()));
        }
    }

    #[test]
    fn collaborator_failure_aborts_the_run() {
        let root = StubSource::poisoned(b"root", 3);
        let err = derive_principals(&root, 8).unwrap_err();
        assert_eq!(err.0, 3);
    }

    #[test]
    fn failure_at_the_account_level_aborts_too() {
        let root = StubSource::poisoned(b"root", ACCOUNT_INDEX);
        assert!(derive_principals(&root, 1).is_err());
    }
}
