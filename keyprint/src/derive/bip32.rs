//! # BIP32 Key Source
//!
//! The production [`KeySource`] implementation, backed by `bitcoin::bip32`.
//! An [`XpubKeySource`] wraps an extended *public* key, so everything here
//! is non-hardened by construction — hardened derivation needs the private
//! key, and this crate never touches private key material.
//!
//! Child derivation uses the process-wide secp256k1 context. Parsing
//! accepts the standard Base58Check `xpub...`/`tpub...` serialization.

use std::str::FromStr;

use bitcoin::bip32::{ChildNumber, Error as Bip32Error, Xpub};
use secp256k1::SECP256K1;
use thiserror::Error;

use crate::codec::CurvePoint;
use crate::derive::KeySource;

/// Error type for xpub parsing and child derivation.
#[derive(Debug, Error)]
pub enum XpubSourceError {
    /// BIP32 derivation error.
    #[error("BIP32 error: {0}")]
    Bip32(#[from] Bip32Error),
}

/// A node in the HD public-key tree.
///
/// Construct the root by parsing a Base58Check extended public key string;
/// children come from [`KeySource::derive_child`]. The wrapped `Xpub`
/// carries the chain code needed to request further children, which is why
/// the driver holds sources rather than bare points.
#[derive(Debug, Clone, Copy)]
pub struct XpubKeySource {
    xpub: Xpub,
}

impl XpubKeySource {
    /// The underlying extended public key.
    pub fn xpub(&self) -> &Xpub {
        &self.xpub
    }
}

impl FromStr for XpubKeySource {
    type Err = XpubSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            xpub: Xpub::from_str(s)?,
        })
    }
}

impl KeySource for XpubKeySource {
    type Error = XpubSourceError;

    fn derive_child(&self, index: u32) -> Result<Self, Self::Error> {
        let child = ChildNumber::from_normal_idx(index)?;
        Ok(Self {
            xpub: self.xpub.ckd_pub(SECP256K1, child)?,
        })
    }

    fn public_key_point(&self) -> CurvePoint {
        let encoded = self.xpub.public_key.serialize_uncompressed();
        CurvePoint::from_uncompressed(&encoded)
            .expect("secp256k1 always serializes a valid uncompressed point")
    }
}
