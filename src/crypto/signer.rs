use std::convert::TryFrom;

use super::{Signer, SigningMethod, ValidationMethod};
use crate::{Error, Result};

/// Signature related batteries for DIDComm.
/// Implementation of all algorithms required by [DIDComm messaging](https://identity.foundation/didcomm-messaging/spec/#algorithms)
///
/// Signing keys are raw 32 byte private scalars. Validation keys are raw
/// 32 byte public keys for `EdDsa` and uncompressed SEC1 points otherwise.
/// Signatures are raw `r || s` for the ECDSA variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    EdDsa,
    /// `ECDSA/P-256` signatures.
    Es256,
    /// `ECDSA/secp256k1` signatures.
    Es256k,
}

impl SignatureAlgorithm {
    /// `alg` header value.
    pub fn alg(&self) -> &'static str {
        match self {
            SignatureAlgorithm::EdDsa => "EdDSA",
            SignatureAlgorithm::Es256 => "ES256",
            SignatureAlgorithm::Es256k => "ES256K",
        }
    }
}

impl Signer for SignatureAlgorithm {
    /// Builds signer FnOnce, which performs signing.
    ///
    /// # Examples
    /// ```
    /// # fn main() {
    /// use didcomm_v2::crypto::{Signer, SignatureAlgorithm};
    /// let signer = SignatureAlgorithm::Es256k.signer();
    /// # }
    ///```
    ///
    fn signer(&self) -> SigningMethod {
        match self {
            SignatureAlgorithm::EdDsa => Box::new(|key: &[u8], message: &[u8]| -> Result<Vec<u8>> {
                use ed25519_dalek::{Signer, SigningKey};
                let key = <[u8; 32]>::try_from(key)
                    .map_err(|_| Error::Crypto("Ed25519 private key must be 32 bytes".into()))?;
                let sk = SigningKey::from_bytes(&key);
                Ok(sk.sign(message).to_bytes().to_vec())
            }),
            SignatureAlgorithm::Es256 => Box::new(|key: &[u8], message: &[u8]| -> Result<Vec<u8>> {
                use p256::ecdsa::{signature::Signer, Signature, SigningKey};
                let sk = SigningKey::from_slice(key).map_err(|e| Error::Crypto(e.to_string()))?;
                let signature: Signature = sk.sign(message);
                Ok(signature.to_bytes().to_vec())
            }),
            SignatureAlgorithm::Es256k => Box::new(|key: &[u8], message: &[u8]| -> Result<Vec<u8>> {
                use k256::ecdsa::{signature::Signer, Signature, SigningKey};
                let sk = SigningKey::from_slice(key).map_err(|e| Error::Crypto(e.to_string()))?;
                let signature: Signature = sk.sign(message);
                Ok(signature.to_bytes().to_vec())
            }),
        }
    }

    /// Builds validator FnOnce, which performs signature validation.
    /// Malformed keys are errors, malformed signatures simply do not validate.
    ///
    /// # Examples
    /// ```
    /// # fn main() {
    /// use didcomm_v2::crypto::{Signer, SignatureAlgorithm};
    /// let validator = SignatureAlgorithm::Es256k.validator();
    /// # }
    /// ```
    ///
    fn validator(&self) -> ValidationMethod {
        match self {
            SignatureAlgorithm::EdDsa => Box::new(
                |key: &[u8], message: &[u8], signature: &[u8]| -> Result<bool> {
                    use ed25519_dalek::{Signature, Verifier, VerifyingKey};
                    let key = <[u8; 32]>::try_from(key)
                        .map_err(|_| Error::Crypto("Ed25519 public key must be 32 bytes".into()))?;
                    let vk = VerifyingKey::from_bytes(&key).map_err(|e| Error::Crypto(e.to_string()))?;
                    let signature = match Signature::from_slice(signature) {
                        Ok(signature) => signature,
                        Err(_) => return Ok(false),
                    };
                    Ok(vk.verify(message, &signature).is_ok())
                },
            ),
            SignatureAlgorithm::Es256 => Box::new(
                |key: &[u8], message: &[u8], signature: &[u8]| -> Result<bool> {
                    use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
                    let vk = VerifyingKey::from_sec1_bytes(key).map_err(|e| Error::Crypto(e.to_string()))?;
                    let signature = match Signature::from_slice(signature) {
                        Ok(signature) => signature,
                        Err(_) => return Ok(false),
                    };
                    Ok(vk.verify(message, &signature).is_ok())
                },
            ),
            SignatureAlgorithm::Es256k => Box::new(
                |key: &[u8], message: &[u8], signature: &[u8]| -> Result<bool> {
                    use k256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
                    let vk = VerifyingKey::from_sec1_bytes(key).map_err(|e| Error::Crypto(e.to_string()))?;
                    let signature = match Signature::from_slice(signature) {
                        Ok(signature) => signature,
                        Err(_) => return Ok(false),
                    };
                    Ok(vk.verify(message, &signature).is_ok())
                },
            ),
        }
    }
}

impl TryFrom<&String> for SignatureAlgorithm {
    type Error = Error;
    fn try_from(incoming: &String) -> Result<Self> {
        match &incoming[..] {
            "EdDSA" => Ok(Self::EdDsa),
            "ES256" => Ok(Self::Es256),
            "ES256K" => Ok(Self::Es256k),
            other => Err(Error::Malformed(format!("unsupported signature 'alg' value '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = b"this is the message we're signing in this test...";

    #[test]
    fn es256k_test() -> Result<()> {
        // Arrange
        let sk = k256::ecdsa::SigningKey::random(&mut rand_core::OsRng);
        let vk = sk.verifying_key().to_encoded_point(false);
        // Act
        let signature = SignatureAlgorithm::Es256k.signer()(&sk.to_bytes(), MESSAGE)?;
        let validation = SignatureAlgorithm::Es256k.validator()(vk.as_bytes(), MESSAGE, &signature)?;
        // Assert
        assert!(validation);
        assert_eq!(signature.len(), 64);
        Ok(())
    }

    #[test]
    fn es256_test() -> Result<()> {
        // Arrange
        let sk = p256::ecdsa::SigningKey::random(&mut rand_core::OsRng);
        let vk = sk.verifying_key().to_encoded_point(false);
        // Act
        let signature = SignatureAlgorithm::Es256.signer()(&sk.to_bytes(), MESSAGE)?;
        let validation = SignatureAlgorithm::Es256.validator()(vk.as_bytes(), MESSAGE, &signature)?;
        let other = SignatureAlgorithm::Es256.validator()(vk.as_bytes(), b"other", &signature)?;
        // Assert
        assert!(validation);
        assert!(!other);
        Ok(())
    }

    #[test]
    fn eddsa_test() -> Result<()> {
        // Arrange
        let sk = ed25519_dalek::SigningKey::from_bytes(&[9u8; 32]);
        let vk = sk.verifying_key().to_bytes();
        // Act
        let signature = SignatureAlgorithm::EdDsa.signer()(&sk.to_bytes(), MESSAGE)?;
        let validation = SignatureAlgorithm::EdDsa.validator()(&vk, MESSAGE, &signature)?;
        let truncated = SignatureAlgorithm::EdDsa.validator()(&vk, MESSAGE, &signature[..10])?;
        // Assert
        assert!(validation);
        assert!(!truncated);
        Ok(())
    }
}
