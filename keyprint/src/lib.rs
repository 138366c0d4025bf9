// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # KEYPRINT — Core Library
//!
//! Deterministic, self-authenticating principals for HD public keys. Give
//! KEYPRINT one extended public key and a count N, and it hands back N
//! identifier strings, each cryptographically bound to the byte-exact DER
//! encoding of one derived secp256k1 public key. Same key material, same
//! principal, on any machine, forever — and flipping a single bit of the
//! key changes the identifier with overwhelming probability. No registry,
//! no authority, no lookup: the data *is* the name.
//!
//! ## Architecture
//!
//! The pipeline is a straight line, and the modules mirror it:
//!
//! - **codec** — Canonical key bytes: SEC1 uncompressed point encoding,
//!   wrapped in a fixed DER SubjectPublicKeyInfo record.
//! - **fingerprint** — DER bytes to principal string: SHA-224, tag byte,
//!   prepended CRC-32, lowercase base32, hyphen groups of five.
//! - **derive** — The driver. Walks root → account 0 → leaf i through the
//!   [`derive::KeySource`] capability trait; `bitcoin::bip32` plugs in
//!   behind it for production use.
//! - **config** — Every constant of the format, in one place.
//!
//! ## Design Philosophy
//!
//! 1. Determinism is the product. Anything that could make two honest
//!    parties disagree on a principal is a bug, full stop.
//! 2. Public keys only. No private material, no hardened derivation,
//!    nothing worth stealing in this process's memory.
//! 3. The core pipeline is pure functions over bytes — the curve library
//!    sits behind a two-method trait and can be swapped without touching
//!    an encoder.
//!
//! ## Example
//!
//! ```no_run
//! use keyprint::derive::bip32::XpubKeySource;
//! use keyprint::derive::derive_principals;
//!
//! let root: XpubKeySource = "xpub661MyMwAqRbc...".parse()?;
//! for principal in derive_principals(&root, 8)? {
//!     println!("{principal}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod config;
pub mod derive;
pub mod fingerprint;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use codec::{encode_public_key, CurvePoint};
pub use derive::{derive_principals, principal_for_point, KeySource};
pub use fingerprint::{FingerprintTag, Principal, PrincipalError};
