//! # Pipeline Constants
//!
//! Every magic number in KEYPRINT lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! Most of these values are frozen by the identifier format itself: change
//! any of them and every principal ever generated stops verifying. Treat
//! this file as append-only.

// ---------------------------------------------------------------------------
// Curve & Point Encoding
// ---------------------------------------------------------------------------

/// Byte length of one secp256k1 field element (X or Y coordinate).
pub const FIELD_BYTES: usize = 32;

/// Marker byte that opens the SEC1 uncompressed point encoding.
pub const UNCOMPRESSED_POINT_MARKER: u8 = 0x04;

/// Total length of an uncompressed point: marker + X + Y.
pub const UNCOMPRESSED_POINT_LEN: usize = 1 + 2 * FIELD_BYTES;

// ---------------------------------------------------------------------------
// ASN.1 Object Identifiers
// ---------------------------------------------------------------------------

/// OID 1.2.840.10045.2.1 — `id-ecPublicKey`, the generic EC public key
/// algorithm identifier from ANSI X9.62 / RFC 5480.
pub const EC_PUBLIC_KEY_OID: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// OID 1.3.132.0.10 — the `secp256k1` named curve from SEC 2.
pub const SECP256K1_OID: &[u64] = &[1, 3, 132, 0, 10];

/// Byte length of the DER SubjectPublicKeyInfo record for an uncompressed
/// secp256k1 key. Fixed because every field of the structure is fixed.
pub const DER_RECORD_LEN: usize = 88;

// ---------------------------------------------------------------------------
// Fingerprint Format
// ---------------------------------------------------------------------------

/// SHA-224 digest length. 28 bytes, not 32 — the format uses the truncated
/// member of the SHA-2 family, and the 63-character text length depends on it.
pub const DIGEST_LEN: usize = 28;

/// Digest plus one trailing tag byte.
pub const PAYLOAD_LEN: usize = DIGEST_LEN + 1;

/// CRC-32 checksum length, prepended to the payload before text encoding.
pub const CHECKSUM_LEN: usize = 4;

/// Base32 characters in the un-grouped text form:
/// ceil((CHECKSUM_LEN + PAYLOAD_LEN) * 8 / 5) = ceil(264 / 5) = 53.
pub const TEXT_BASE32_LEN: usize = 53;

/// Characters per hyphen-separated group. Purely presentational — five
/// characters is what a human can hold in their head while transcribing.
pub const TEXT_GROUP_LEN: usize = 5;

/// Full length of a principal string: 53 base32 characters plus 10 hyphens.
/// Every generated principal is exactly this long; anything else is a bug.
pub const PRINCIPAL_TEXT_LEN: usize = TEXT_BASE32_LEN + (TEXT_BASE32_LEN - 1) / TEXT_GROUP_LEN;

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// The fixed intermediate "account" child index between the root xpub and
/// the per-principal leaves. This is a deliberate single-level scheme, not
/// a general derivation path — do not make it configurable without a new
/// format version.
pub const ACCOUNT_INDEX: u32 = 0;

/// Default number of principals to derive when the caller doesn't say.
pub const DEFAULT_COUNT: u32 = 8;
