use std::convert::TryFrom;

use aes::Aes256;
use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm,
    Nonce,
};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use super::*;
use crate::Error;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type HmacSha512 = Hmac<Sha512>;

/// Pluggable closure generator enum, which creates instance of crypto function
///     based on selected content encryption algorithm (JWA `enc`).
/// # Attention:
/// Immutable by design and should be instance per invocation to make sure no
///     sensitive data is been stored in memory longer than necessary.
/// Underlying algorithms are implemented by Rust-crypto crate family.
///
/// Allowed (and implemented) content encryption algorithms.
/// According to [DIDComm messaging](https://identity.foundation/didcomm-messaging/spec/#curves-and-content-encryption-algorithms)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CryptoAlgorithm {
    /// AES-256-CBC with HMAC-SHA-512, the only one allowed for authcrypt.
    A256CBCHS512,
    XC20P,
    A256GCM,
}

impl CryptoAlgorithm {
    /// `enc` header value.
    pub fn enc(&self) -> &'static str {
        match self {
            CryptoAlgorithm::A256CBCHS512 => "A256CBC-HS512",
            CryptoAlgorithm::XC20P => "XC20P",
            CryptoAlgorithm::A256GCM => "A256GCM",
        }
    }

    pub fn key_len(&self) -> usize {
        match self {
            CryptoAlgorithm::A256CBCHS512 => 64,
            CryptoAlgorithm::XC20P | CryptoAlgorithm::A256GCM => 32,
        }
    }

    pub fn nonce_len(&self) -> usize {
        match self {
            CryptoAlgorithm::A256CBCHS512 => 16,
            CryptoAlgorithm::XC20P => 24,
            CryptoAlgorithm::A256GCM => 12,
        }
    }

    pub fn tag_len(&self) -> usize {
        match self {
            CryptoAlgorithm::A256CBCHS512 => 32,
            CryptoAlgorithm::XC20P | CryptoAlgorithm::A256GCM => 16,
        }
    }
}

impl Cypher for CryptoAlgorithm {
    /// Generates + invokes crypto of `SymmetricCypherMethod` which performs encryption.
    /// Algorithm selected is based on struct's `CryptoAlgorithm` property.
    fn encryptor(&self) -> SymmetricCypherMethod {
        let alg = *self;
        match self {
            CryptoAlgorithm::A256CBCHS512 => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    let (mac_key, enc_key) = key.split_at(32);
                    let mut output = Aes256CbcEnc::new_from_slices(enc_key, nonce)
                        .map_err(|e| Error::Crypto(e.to_string()))?
                        .encrypt_padded_vec_mut::<Pkcs7>(message);
                    let tag = cbc_hmac_tag(mac_key, aad, nonce, &output)?;
                    output.extend_from_slice(&tag);
                    Ok(output)
                },
            ),
            CryptoAlgorithm::XC20P => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    let aead = XChaCha20Poly1305::new_from_slice(key)
                        .map_err(|e| Error::Crypto(e.to_string()))?;
                    aead.encrypt(XNonce::from_slice(nonce), Payload { msg: message, aad })
                        .map_err(|e| Error::Crypto(e.to_string()))
                },
            ),
            CryptoAlgorithm::A256GCM => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    let aead =
                        Aes256Gcm::new_from_slice(key).map_err(|e| Error::Crypto(e.to_string()))?;
                    aead.encrypt(Nonce::from_slice(nonce), Payload { msg: message, aad })
                        .map_err(|e| Error::Crypto(e.to_string()))
                },
            ),
        }
    }

    /// Generates + invokes crypto of `SymmetricCypherMethod` which performs decryption.
    /// Authentication failures are reported as malformed messages.
    fn decryptor(&self) -> SymmetricCypherMethod {
        let alg = *self;
        match self {
            CryptoAlgorithm::A256CBCHS512 => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    if message.len() < alg.tag_len() {
                        return Err(Error::Malformed("ciphertext is too short".into()));
                    }
                    let (mac_key, enc_key) = key.split_at(32);
                    let (ciphertext, tag) = message.split_at(message.len() - alg.tag_len());
                    let mac = cbc_hmac(mac_key, aad, nonce, ciphertext)?;
                    mac.verify_truncated_left(tag)
                        .map_err(|_| Error::Malformed("authentication tag mismatch".into()))?;
                    Aes256CbcDec::new_from_slices(enc_key, nonce)
                        .map_err(|e| Error::Crypto(e.to_string()))?
                        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                        .map_err(|_| Error::Malformed("invalid content padding".into()))
                },
            ),
            CryptoAlgorithm::XC20P => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    let aead = XChaCha20Poly1305::new_from_slice(key)
                        .map_err(|e| Error::Crypto(e.to_string()))?;
                    aead.decrypt(XNonce::from_slice(nonce), Payload { msg: message, aad })
                        .map_err(|_| Error::Malformed("unable to decrypt content".into()))
                },
            ),
            CryptoAlgorithm::A256GCM => Box::new(
                move |nonce: &[u8], key: &[u8], message: &[u8], aad: &[u8]| -> Result<Vec<u8>> {
                    check_sizes(alg, nonce, key)?;
                    let aead =
                        Aes256Gcm::new_from_slice(key).map_err(|e| Error::Crypto(e.to_string()))?;
                    aead.decrypt(Nonce::from_slice(nonce), Payload { msg: message, aad })
                        .map_err(|_| Error::Malformed("unable to decrypt content".into()))
                },
            ),
        }
    }
}

impl TryFrom<&String> for CryptoAlgorithm {
    type Error = Error;
    fn try_from(incoming: &String) -> Result<Self> {
        match &incoming[..] {
            "A256CBC-HS512" => Ok(Self::A256CBCHS512),
            "XC20P" => Ok(Self::XC20P),
            "A256GCM" => Ok(Self::A256GCM),
            other => Err(Error::Malformed(format!("unsupported 'enc' value '{}'", other))),
        }
    }
}

// RFC 7518 5.2.2.1: MAC over AAD || IV || ciphertext || AL
fn cbc_hmac(mac_key: &[u8], aad: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<HmacSha512> {
    let mut mac = <HmacSha512 as Mac>::new_from_slice(mac_key)
        .map_err(|e| Error::Crypto(e.to_string()))?;
    let al = ((aad.len() as u64) * 8).to_be_bytes();
    mac.update(aad);
    mac.update(iv);
    mac.update(ciphertext);
    mac.update(&al);
    Ok(mac)
}

fn cbc_hmac_tag(mac_key: &[u8], aad: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let full = cbc_hmac(mac_key, aad, iv, ciphertext)?.finalize().into_bytes();
    Ok(full[..32].to_vec())
}

// inner helper function
fn check_sizes(alg: CryptoAlgorithm, nonce: &[u8], key: &[u8]) -> Result<()> {
    if nonce.len() != alg.nonce_len() {
        return Err(Error::Malformed(format!(
            "{} requires {} byte iv, got {}",
            alg.enc(),
            alg.nonce_len(),
            nonce.len()
        )));
    }
    if key.len() != alg.key_len() {
        return Err(Error::Crypto(format!(
            "{} requires {} byte key, got {}",
            alg.enc(),
            alg.key_len(),
            key.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod batteries_tests {
    use super::*;

    const PAYLOAD: &[u8] = br#"{"test":"message's body - can be anything..."}"#;
    const AAD: &[u8] = b"eyJhbGciOiJFQ0RILUVTK0EyNTZLVyJ9";

    fn round_trip(alg: CryptoAlgorithm) -> Result<()> {
        // Arrange
        let key = vec![7u8; alg.key_len()];
        let nonce = vec![3u8; alg.nonce_len()];
        // Act
        let sealed = alg.encryptor()(&nonce, &key, PAYLOAD, AAD)?;
        let opened = alg.decryptor()(&nonce, &key, &sealed, AAD)?;
        // Assert
        assert_eq!(opened, PAYLOAD);
        assert!(sealed.len() >= PAYLOAD.len() + alg.tag_len());
        Ok(())
    }

    #[test]
    fn xc20p_test() -> Result<()> {
        round_trip(CryptoAlgorithm::XC20P)
    }

    #[test]
    fn a256gcm_test() -> Result<()> {
        round_trip(CryptoAlgorithm::A256GCM)
    }

    #[test]
    fn a256cbc_hs512_test() -> Result<()> {
        round_trip(CryptoAlgorithm::A256CBCHS512)
    }

    #[test]
    fn tampered_aad_is_rejected() -> Result<()> {
        for alg in [CryptoAlgorithm::A256CBCHS512, CryptoAlgorithm::XC20P, CryptoAlgorithm::A256GCM] {
            let key = vec![1u8; alg.key_len()];
            let nonce = vec![2u8; alg.nonce_len()];
            let sealed = alg.encryptor()(&nonce, &key, PAYLOAD, AAD)?;
            let result = alg.decryptor()(&nonce, &key, &sealed, b"other aad");
            assert!(matches!(result, Err(Error::Malformed(_))), "{}", alg.enc());
        }
        Ok(())
    }

    #[test]
    fn wrong_nonce_size_is_rejected() {
        let alg = CryptoAlgorithm::XC20P;
        let result = alg.encryptor()(&[0u8; 12], &[0u8; 32], PAYLOAD, AAD);
        assert!(result.is_err());
    }
}
