//! AES-256 key wrap (RFC 3394), used as the `A256KW` part of `ECDH-ES+A256KW`
//! and `ECDH-1PU+A256KW`.
use std::convert::TryFrom;

use aes_kw::KekAes256;

use crate::{Error, Result};

/// Wraps content encryption key `cek` with key encryption key `kek`.
pub fn wrap(kek: &[u8], cek: &[u8]) -> Result<Vec<u8>> {
    KekAes256::try_from(kek)
        .map_err(|e| Error::Crypto(e.to_string()))?
        .wrap_vec(cek)
        .map_err(|e| Error::Crypto(e.to_string()))
}

/// Unwraps `encrypted_key`. Integrity check failure means the key was not
/// wrapped for us or was tampered with, so it's reported as malformed input.
pub fn unwrap(kek: &[u8], encrypted_key: &[u8]) -> Result<Vec<u8>> {
    KekAes256::try_from(kek)
        .map_err(|e| Error::Crypto(e.to_string()))?
        .unwrap_vec(encrypted_key)
        .map_err(|e| Error::Malformed(format!("unable to unwrap content encryption key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 3394 4.6: wrap 256 bits of key data with a 256-bit KEK
    const KEK: [u8; 32] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F,
    ];
    const KEY_DATA: [u8; 32] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF,
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    ];
    const WRAPPED: [u8; 40] = [
        0x28, 0xC9, 0xF4, 0x04, 0xC4, 0xB8, 0x10, 0xF4, 0xCB, 0xCC, 0xB3, 0x5C, 0xFB, 0x87, 0xF8, 0x26,
        0x3F, 0x57, 0x86, 0xE2, 0xD8, 0x0E, 0xD3, 0x26, 0xCB, 0xC7, 0xF0, 0xE7, 0x1A, 0x99, 0xF4, 0x3B,
        0xFB, 0x98, 0x8B, 0x9B, 0x7A, 0x02, 0xDD, 0x21,
    ];

    #[test]
    fn rfc3394_vector() -> Result<()> {
        assert_eq!(wrap(&KEK, &KEY_DATA)?, WRAPPED.to_vec());
        assert_eq!(unwrap(&KEK, &WRAPPED)?, KEY_DATA.to_vec());
        Ok(())
    }

    #[test]
    fn wrong_kek_is_malformed() {
        let mut other = KEK;
        other[0] ^= 0xff;
        assert!(matches!(unwrap(&other, &WRAPPED), Err(Error::Malformed(_))));
    }
}
