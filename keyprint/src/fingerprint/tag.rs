//! # Fingerprint Tags
//!
//! The single byte appended to the digest before text encoding. It is a
//! format discriminator, not data: it says *what kind of thing* the bytes
//! in front of it are, so that future identifier schemes can share the
//! checksum-and-base32 envelope without colliding with this one.
//!
//! The tag is an enum, not a bare literal, for exactly one reason: the day
//! a second scheme lands, the compiler will walk us to every match site.

use std::fmt;

/// Discriminator byte for fingerprint payloads.
///
/// Today there is one variant. A payload carrying any other byte is *not
/// this identifier type* — decoders report it as foreign rather than
/// treating it as corruption, since the checksum has already vouched for
/// the bytes by the time the tag is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FingerprintTag {
    /// The fingerprint was computed from the key material it names.
    SelfAuthenticating = 0x02,
}

impl FingerprintTag {
    /// The wire value of this tag.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Interpret a payload's trailing byte. `None` means "some other
    /// identifier scheme", not "invalid".
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(Self::SelfAuthenticating),
            _ => None,
        }
    }
}

impl fmt::Display for FingerprintTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfAuthenticating => write!(f, "self-authenticating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let tag = FingerprintTag::SelfAuthenticating;
        assert_eq!(tag.as_byte(), 0x02);
        assert_eq!(FingerprintTag::from_byte(0x02), Some(tag));
    }

    #[test]
    fn foreign_bytes_are_not_errors() {
        assert_eq!(FingerprintTag::from_byte(0x00), None);
        assert_eq!(FingerprintTag::from_byte(0x01), None);
        assert_eq!(FingerprintTag::from_byte(0x03), None);
        assert_eq!(FingerprintTag::from_byte(0xff), None);
    }
}
