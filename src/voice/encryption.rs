//! Encryption schemes offered during voice protocol negotiation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Transport encryption modes for voice RTP packets.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub enum EncryptionMode {
    /// AES-256-GCM over the RTP payload, with a 4B incrementing nonce suffix.
    #[serde(rename = "aead_aes256_gcm_rtpsize")]
    Aes256Gcm,
    /// XChaCha20-Poly1305 over the RTP payload, with a 4B incrementing nonce
    /// suffix. Every voice server supports this mode.
    #[serde(rename = "aead_xchacha20_poly1305_rtpsize")]
    XChaCha20Poly1305,
    /// XSalsa20-Poly1305 using the RTP header as nonce. Deprecated.
    #[serde(rename = "xsalsa20_poly1305")]
    XSalsa20Poly1305,
    /// XSalsa20-Poly1305 with a random 24B nonce suffix. Deprecated.
    #[serde(rename = "xsalsa20_poly1305_suffix")]
    XSalsa20Poly1305Suffix,
    /// XSalsa20-Poly1305 with a 4B incrementing nonce suffix. Deprecated.
    #[serde(rename = "xsalsa20_poly1305_lite")]
    XSalsa20Poly1305Lite,
}

impl EncryptionMode {
    /// Modes in the order a client should prefer them.
    pub const PREFERENCE: &'static [EncryptionMode] = &[
        EncryptionMode::Aes256Gcm,
        EncryptionMode::XChaCha20Poly1305,
    ];

    /// Returns the name of a mode as it will appear during negotiation.
    pub fn to_request_str(self) -> &'static str {
        use EncryptionMode::*;
        match self {
            Aes256Gcm => "aead_aes256_gcm_rtpsize",
            XChaCha20Poly1305 => "aead_xchacha20_poly1305_rtpsize",
            XSalsa20Poly1305 => "xsalsa20_poly1305",
            XSalsa20Poly1305Suffix => "xsalsa20_poly1305_suffix",
            XSalsa20Poly1305Lite => "xsalsa20_poly1305_lite",
        }
    }

    /// Parses a mode name as sent by the voice server.
    pub fn from_request_str(name: &str) -> Option<Self> {
        use EncryptionMode::*;
        Some(match name {
            "aead_aes256_gcm_rtpsize" => Aes256Gcm,
            "aead_xchacha20_poly1305_rtpsize" => XChaCha20Poly1305,
            "xsalsa20_poly1305" => XSalsa20Poly1305,
            "xsalsa20_poly1305_suffix" => XSalsa20Poly1305Suffix,
            "xsalsa20_poly1305_lite" => XSalsa20Poly1305Lite,
            _ => return None,
        })
    }

    /// Returns whether Discord has announced this mode's removal.
    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            EncryptionMode::XSalsa20Poly1305
                | EncryptionMode::XSalsa20Poly1305Suffix
                | EncryptionMode::XSalsa20Poly1305Lite
        )
    }

    /// Returns the number of nonce bytes appended to each packet.
    pub fn nonce_suffix_len(self) -> usize {
        use EncryptionMode::*;
        match self {
            XSalsa20Poly1305 => 0,
            XSalsa20Poly1305Suffix => 24,
            Aes256Gcm | XChaCha20Poly1305 | XSalsa20Poly1305Lite => 4,
        }
    }

    /// Picks the first mode of `preference` that the server offers.
    ///
    /// Offered names this crate does not know are skipped.
    pub fn negotiate<S: AsRef<str>>(offered: &[S], preference: &[EncryptionMode]) -> Option<Self> {
        preference.iter().copied().find(|mode| {
            offered
                .iter()
                .any(|name| name.as_ref() == mode.to_request_str())
        })
    }
}

impl Display for EncryptionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.to_request_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_names_parse_back() {
        for mode in [
            EncryptionMode::Aes256Gcm,
            EncryptionMode::XChaCha20Poly1305,
            EncryptionMode::XSalsa20Poly1305Lite,
        ]
        .iter()
        {
            assert_eq!(EncryptionMode::from_request_str(mode.to_request_str()), Some(*mode));
        }
        assert_eq!(EncryptionMode::from_request_str("aead_aes256_gcm"), None);
    }

    #[test]
    fn negotiation_follows_preference() {
        let offered = ["xsalsa20_poly1305_lite", "aead_xchacha20_poly1305_rtpsize", "aead_aes256_gcm_rtpsize"];
        assert_eq!(
            EncryptionMode::negotiate(&offered, EncryptionMode::PREFERENCE),
            Some(EncryptionMode::Aes256Gcm)
        );

        let offered = ["xsalsa20_poly1305"];
        assert_eq!(EncryptionMode::negotiate(&offered, EncryptionMode::PREFERENCE), None);
        assert_eq!(
            EncryptionMode::negotiate(&offered, &[EncryptionMode::XSalsa20Poly1305]),
            Some(EncryptionMode::XSalsa20Poly1305)
        );
        assert!(EncryptionMode::XSalsa20Poly1305.is_deprecated());
    }
}
