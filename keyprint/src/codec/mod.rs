//! # Public Key Codec
//!
//! Canonical byte encodings for secp256k1 public keys. Two layers, strictly
//! stacked:
//!
//! 1. **point** — the SEC1 uncompressed point encoding: `0x04 ‖ X ‖ Y`,
//!    65 bytes, coordinates big-endian and zero-padded to the field width.
//! 2. **der** — a DER SubjectPublicKeyInfo record wrapping that point
//!    together with the EC algorithm and named-curve OIDs.
//!
//! Both layers are pure and deterministic: the same point always produces
//! the same bytes, which is the property the whole fingerprint scheme
//! hangs off. There is deliberately no decode path for the DER layer —
//! nothing in this system ever reads one of these records back.

pub mod der;
pub mod point;

pub use der::encode_public_key;
pub use point::CurvePoint;
