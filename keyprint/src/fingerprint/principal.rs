//! # Principals — Self-Authenticating Identifiers
//!
//! A principal is the human-facing name of one public key. It is derived
//! from the key's DER record via SHA-224, tagged, checksummed, and encoded
//! as lowercase hyphen-grouped base32:
//!
//! ```text
//! DER record (88 bytes)
//!     -> SHA-224 -> 28 bytes
//!     -> ‖ 0x02 tag -> 29-byte payload
//!     -> CRC-32 ‖ payload -> 33 bytes
//!     -> base32, lowercase, groups of 5 -> vbei7-rhfom-nizq2-...
//! ```
//!
//! The checksum rides *in front of* the payload, so a verifier can reject
//! a mistyped principal before interpreting a single payload byte. The
//! hyphens carry no meaning — strip them and the identifier is unchanged.
//!
//! ## Why SHA-224 and not SHA-256?
//!
//! Text length. 28 bytes of digest plus tag plus checksum lands on exactly
//! 53 base32 characters; the 256-bit variant would cost six more characters
//! of transcription for security margin nobody needs here. 112-bit collision
//! resistance is comfortably beyond what an identifier format requires.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};
use thiserror::Error;

use crate::config::{CHECKSUM_LEN, DIGEST_LEN, PAYLOAD_LEN, TEXT_GROUP_LEN};
use crate::fingerprint::tag::FingerprintTag;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from parsing a principal string back into its payload.
#[derive(Debug, Error)]
pub enum PrincipalError {
    /// The string contains characters outside the base32 alphabet, or is
    /// not a whole number of base32 groups.
    #[error("base32 decode error: {0}")]
    Base32(String),

    /// The decoded buffer is not checksum + digest + tag sized.
    #[error("invalid principal length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected decoded byte count.
        expected: usize,
        /// Byte count actually decoded.
        got: usize,
    },

    /// The leading CRC-32 does not match the payload. Transcription error.
    #[error("checksum mismatch: declared {declared:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        /// Checksum carried in the string.
        declared: u32,
        /// Checksum recomputed over the payload.
        computed: u32,
    },

    /// The payload is well-formed but tagged as some other identifier
    /// scheme. Not corruption — just not ours.
    #[error("tag byte {0:#04x} does not mark a self-authenticating fingerprint")]
    ForeignTag(u8),
}

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

/// A self-authenticating principal.
///
/// Internally stores the 29-byte payload (SHA-224 digest of the DER record
/// plus the tag byte). The checksum and text form are computed on the fly —
/// they are derived data, and storing them would only invite skew.
///
/// # Examples
///
/// ```
/// use keyprint::fingerprint::Principal;
///
/// let principal = Principal::self_authenticating(b"der bytes of some key");
/// let text = principal.to_text();
/// assert_eq!(text.len(), 63);
///
/// let recovered = Principal::from_text(&text).unwrap();
/// assert_eq!(principal, recovered);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal {
    payload: [u8; PAYLOAD_LEN],
}

impl Principal {
    /// Compute the principal naming `der` — the byte-exact DER record of
    /// a public key.
    ///
    /// Deterministic and infallible: hash, append tag, done. Two parties
    /// holding the same record always land on the same principal.
    pub fn self_authenticating(der: &[u8]) -> Self {
        let digest = Sha224::digest(der);
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[..DIGEST_LEN].copy_from_slice(&digest);
        payload[DIGEST_LEN] = FingerprintTag::SelfAuthenticating.as_byte();
        Self { payload }
    }

    /// Render the canonical text form: lowercase base32 of
    /// `CRC-32 ‖ payload`, hyphenated in groups of five.
    ///
    /// Always exactly 63 characters for this format.
    pub fn to_text(&self) -> String {
        let mut buf = [0u8; CHECKSUM_LEN + PAYLOAD_LEN];
        buf[..CHECKSUM_LEN].copy_from_slice(&crc32fast::hash(&self.payload).to_be_bytes());
        buf[CHECKSUM_LEN..].copy_from_slice(&self.payload);

        let compact = BASE32_NOPAD.encode(&buf).to_ascii_lowercase();
        grouped(&compact)
    }

    /// Parse and verify a principal string.
    ///
    /// Hyphens are stripped wherever they appear (the grouping is purely
    /// presentational) and letter case is ignored. Verification order
    /// follows the wire layout: decode, length, checksum, then tag — so a
    /// garbled string fails on its checksum before the payload is ever
    /// interpreted.
    pub fn from_text(text: &str) -> Result<Self, PrincipalError> {
        let compact: String = text
            .chars()
            .filter(|&c| c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let bytes = BASE32_NOPAD
            .decode(compact.as_bytes())
            .map_err(|e| PrincipalError::Base32(e.to_string()))?;

        if bytes.len() != CHECKSUM_LEN + PAYLOAD_LEN {
            return Err(PrincipalError::InvalidLength {
                expected: CHECKSUM_LEN + PAYLOAD_LEN,
                got: bytes.len(),
            });
        }

        let declared = u32::from_be_bytes(
            bytes[..CHECKSUM_LEN]
                .try_into()
                .expect("slice is CHECKSUM_LEN bytes"),
        );
        let computed = crc32fast::hash(&bytes[CHECKSUM_LEN..]);
        if declared != computed {
            return Err(PrincipalError::ChecksumMismatch { declared, computed });
        }

        let tag_byte = bytes[CHECKSUM_LEN + PAYLOAD_LEN - 1];
        if FingerprintTag::from_byte(tag_byte).is_none() {
            return Err(PrincipalError::ForeignTag(tag_byte));
        }

        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&bytes[CHECKSUM_LEN..]);
        Ok(Self { payload })
    }

    /// The 28-byte SHA-224 digest of the key's DER record.
    pub fn digest(&self) -> &[u8] {
        &self.payload[..DIGEST_LEN]
    }

    /// The fingerprint tag carried by this principal.
    pub fn tag(&self) -> FingerprintTag {
        FingerprintTag::from_byte(self.payload[DIGEST_LEN])
            .expect("constructors only admit known tags")
    }

    /// The raw digest-plus-tag payload.
    pub fn payload(&self) -> &[u8; PAYLOAD_LEN] {
        &self.payload
    }
}

/// Insert a hyphen after every [`TEXT_GROUP_LEN`] characters. The final
/// group keeps the remainder (one to five characters).
fn grouped(compact: &str) -> String {
    let chunks: Vec<&str> = compact
        .as_bytes()
        .chunks(TEXT_GROUP_LEN)
        .map(|chunk| std::str::from_utf8(chunk).expect("base32 output is ASCII"))
        .collect();
    chunks.join("-")
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.to_text())
    }
}

impl Serialize for Principal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_text())
        } else {
            serializer.serialize_bytes(&self.payload)
        }
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Principal::from_text(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != PAYLOAD_LEN {
                return Err(serde::de::Error::custom(format!(
                    "expected {}-byte principal payload, got {}",
                    PAYLOAD_LEN,
                    bytes.len()
                )));
            }
            let tag_byte = bytes[DIGEST_LEN];
            if FingerprintTag::from_byte(tag_byte).is_none() {
                return Err(serde::de::Error::custom(PrincipalError::ForeignTag(
                    tag_byte,
                )));
            }
            let mut payload = [0u8; PAYLOAD_LEN];
            payload.copy_from_slice(&bytes);
            Ok(Principal { payload })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
