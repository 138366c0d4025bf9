//! # Curve Point Encoding
//!
//! [`CurvePoint`] carries the affine coordinates of a secp256k1 public key
//! as raw 32-byte big-endian field elements, already padded to the field
//! width. It is a dumb container on purpose: point validation is the job
//! of the curve library that produced the coordinates, and by the time a
//! point reaches this module it is valid by construction. A malformed
//! point here is a precondition violation upstream, not a runtime case.

use std::fmt;

use crate::config::{FIELD_BYTES, UNCOMPRESSED_POINT_LEN, UNCOMPRESSED_POINT_MARKER};

/// An affine secp256k1 point, held as fixed-width big-endian coordinates.
///
/// Copyable and immutable — 64 bytes of plain data. Construction goes
/// through [`CurvePoint::new`] with pre-padded coordinates, or through
/// [`CurvePoint::from_uncompressed`] when starting from a serialized key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint {
    x: [u8; FIELD_BYTES],
    y: [u8; FIELD_BYTES],
}

impl CurvePoint {
    /// Build a point from its big-endian coordinate bytes.
    pub fn new(x: [u8; FIELD_BYTES], y: [u8; FIELD_BYTES]) -> Self {
        Self { x, y }
    }

    /// The X coordinate, big-endian, padded to the field width.
    pub fn x(&self) -> &[u8; FIELD_BYTES] {
        &self.x
    }

    /// The Y coordinate, big-endian, padded to the field width.
    pub fn y(&self) -> &[u8; FIELD_BYTES] {
        &self.y
    }

    /// Serialize to the SEC1 uncompressed encoding: `0x04 ‖ X ‖ Y`.
    ///
    /// Infallible — every representable `CurvePoint` has exactly one
    /// uncompressed encoding, and its length is fixed at 65 bytes.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
        out[0] = UNCOMPRESSED_POINT_MARKER;
        out[1..1 + FIELD_BYTES].copy_from_slice(&self.x);
        out[1 + FIELD_BYTES..].copy_from_slice(&self.y);
        out
    }

    /// Parse an uncompressed encoding back into coordinates.
    ///
    /// Returns `None` if the marker byte is not `0x04`. This does **not**
    /// check that (X, Y) satisfies the curve equation — callers hand us
    /// output from a curve library, which already guarantees that.
    pub fn from_uncompressed(bytes: &[u8; UNCOMPRESSED_POINT_LEN]) -> Option<Self> {
        if bytes[0] != UNCOMPRESSED_POINT_MARKER {
            return None;
        }
        let mut x = [0u8; FIELD_BYTES];
        let mut y = [0u8; FIELD_BYTES];
        x.copy_from_slice(&bytes[1..1 + FIELD_BYTES]);
        y.copy_from_slice(&bytes[1 + FIELD_BYTES..]);
        Some(Self { x, y })
    }
}

impl fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurvePoint(x={}, y={})",
            hex::encode(self.x),
            hex::encode(self.y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The secp256k1 generator point G — the one point everyone agrees on.
    fn generator() -> CurvePoint {
        let x = hex::decode("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
            .unwrap();
        let y = hex::decode("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8")
            .unwrap();
        CurvePoint::new(x.try_into().unwrap(), y.try_into().unwrap())
    }

    #[test]
    fn uncompressed_encoding_of_generator() {
        let encoded = generator().to_uncompressed();
        assert_eq!(encoded.len(), 65);
        assert_eq!(encoded[0], 0x04);
        assert_eq!(
            hex::encode(encoded),
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn uncompressed_roundtrip() {
        let point = generator();
        let encoded = point.to_uncompressed();
        let decoded = CurvePoint::from_uncompressed(&encoded).unwrap();
        assert_eq!(point, decoded);
    }

    #[test]
    fn wrong_marker_rejected() {
        let mut encoded = generator().to_uncompressed();
        encoded[0] = 0x02; // compressed marker — not what this codec speaks
        assert!(CurvePoint::from_uncompressed(&encoded).is_none());
    }

    #[test]
    fn small_coordinates_stay_padded() {
        // A coordinate of 1 must occupy the full 32 bytes in the encoding.
        let mut x = [0u8; 32];
        x[31] = 1;
        let point = CurvePoint::new(x, [0u8; 32]);
        let encoded = point.to_uncompressed();
        assert_eq!(&encoded[1..33], &x);
        assert_eq!(&encoded[33..], &[0u8; 32]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = generator().to_uncompressed();
        let b = generator().to_uncompressed();
        assert_eq!(a, b);
    }
}
