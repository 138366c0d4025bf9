//! # Self-Authenticating Fingerprints
//!
//! The identifier-generation half of the pipeline. Given the DER record of
//! a public key, produce the principal string a human can read, share, and
//! re-verify against the key material. The transform, in order:
//!
//! 1. SHA-224 the DER bytes (28 bytes — the truncated SHA-2 variant).
//! 2. Append one tag byte marking this a *self-authenticating* fingerprint.
//! 3. Prepend a big-endian CRC-32 of digest-plus-tag, so a verifier can
//!    reject line noise before ever interpreting the payload.
//! 4. Base32-encode without padding, lowercase.
//! 5. Hyphenate into groups of five characters.
//!
//! Anyone holding the same key bytes computes the same 63-character string;
//! anyone holding the string and candidate key bytes can check the binding
//! with no trust authority in the loop. That's the whole trick.

pub mod principal;
pub mod tag;

pub use principal::{Principal, PrincipalError};
pub use tag::FingerprintTag;
