//! # DER Public Key Records
//!
//! Serializes a [`CurvePoint`] into the canonical DER structure every
//! principal is computed over:
//!
//! ```text
//! SEQUENCE {
//!   SEQUENCE {
//!     OBJECT IDENTIFIER 1.2.840.10045.2.1   -- id-ecPublicKey
//!     OBJECT IDENTIFIER 1.3.132.0.10        -- secp256k1
//!   }
//!   BIT STRING { 0x04 ‖ X ‖ Y }             -- zero unused bits
//! }
//! ```
//!
//! This is the SubjectPublicKeyInfo shape from RFC 5480, restricted to EC
//! keys. We write the handful of DER primitives ourselves rather than pull
//! in an ASN.1 library: the structure is fixed, every length is known, and
//! the writer below is the entire surface we need. DER (unlike BER) admits
//! exactly one encoding per value, so determinism falls out for free.
//!
//! There is no failure path. Hand this module a point and you get 88 bytes
//! back, every time.

use crate::codec::point::CurvePoint;
use crate::config::{EC_PUBLIC_KEY_OID, SECP256K1_OID};

/// ASN.1 universal tag for OBJECT IDENTIFIER.
const TAG_OID: u8 = 0x06;

/// ASN.1 universal tag for BIT STRING.
const TAG_BIT_STRING: u8 = 0x03;

/// ASN.1 universal tag for a constructed SEQUENCE.
const TAG_SEQUENCE: u8 = 0x30;

/// Encode a public key point as a DER SubjectPublicKeyInfo record.
///
/// Pure and deterministic: identical points yield identical bytes, which
/// is the invariant the fingerprint layer builds on.
pub fn encode_public_key(point: &CurvePoint) -> Vec<u8> {
    let algorithm = tlv(
        TAG_SEQUENCE,
        &[oid(EC_PUBLIC_KEY_OID), oid(SECP256K1_OID)].concat(),
    );

    // BIT STRING content opens with the unused-bit count. The point
    // encoding is a whole number of bytes, so that count is always zero.
    let mut bits = Vec::with_capacity(1 + 65);
    bits.push(0x00);
    bits.extend_from_slice(&point.to_uncompressed());
    let subject_key = tlv(TAG_BIT_STRING, &bits);

    tlv(TAG_SEQUENCE, &[algorithm, subject_key].concat())
}

/// Wrap `content` in a tag-length-value triplet.
fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + content.len());
    out.push(tag);
    push_length(&mut out, content.len());
    out.extend_from_slice(content);
    out
}

/// Append a DER definite length.
///
/// Short form for lengths below 128; long form (length-of-length prefix,
/// minimal big-endian bytes) above. Our fixed record only ever needs the
/// short form, but a length encoder that silently caps at 127 is a trap
/// for the next person who reuses this.
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

/// Encode OID components into DER: first two components packed as
/// `40 * a + b`, the rest in base-128 with continuation bits.
fn oid(components: &[u64]) -> Vec<u8> {
    debug_assert!(components.len() >= 2, "an OID has at least two arcs");
    let mut body = Vec::new();
    push_base128(&mut body, components[0] * 40 + components[1]);
    for &component in &components[2..] {
        push_base128(&mut body, component);
    }
    tlv(TAG_OID, &body)
}

/// Append a value in base-128, most significant group first, with the
/// high bit set on every byte except the last.
fn push_base128(out: &mut Vec<u8>, mut value: u64) {
    let mut groups = [0u8; 10];
    let mut count = 0;
    loop {
        groups[count] = (value & 0x7f) as u8;
        count += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    for i in (1..count).rev() {
        out.push(groups[i] | 0x80);
    }
    out.push(groups[0]);
}
