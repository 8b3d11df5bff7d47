//! Collection of utilities for cryptography related components.
pub mod ecdh;
pub mod encryptor;
pub mod kdf;
pub mod key_wrap;
pub mod signer;

pub use {encryptor::CryptoAlgorithm, signer::SignatureAlgorithm};

use crate::Result;

/// Return `Fn` signature definition for symmetric cryptography method.
/// Arguments sequence: Nonce, Key, Message, AAD.
/// Encryptors return ciphertext with the authentication tag appended,
/// decryptors expect the same layout.
pub type SymmetricCypherMethod = Box<dyn Fn(&[u8], &[u8], &[u8], &[u8]) -> Result<Vec<u8>>>;

/// Return `Fn` signature definition for signature signing method.
/// .0 == `key: &[u8]`; .1 == `message`;
pub type SigningMethod = Box<dyn Fn(&[u8], &[u8]) -> Result<Vec<u8>>>;

/// Return `Fn` signature definition for signature validating method.
/// .0 == `key: &[u8]`; .1 == `message`; .2 == `signature`;
pub type ValidationMethod = Box<dyn Fn(&[u8], &[u8], &[u8]) -> Result<bool>>;

/// Trait must be implemented for pluggable cryptography.
/// Implemented by `CryptoAlgorithm`.
pub trait Cypher {
    fn encryptor(&self) -> SymmetricCypherMethod;
    fn decryptor(&self) -> SymmetricCypherMethod;
}

/// Trait must be implemented for pluggable signatures.
/// Implemented by `SignatureAlgorithm`.
pub trait Signer {
    fn signer(&self) -> SigningMethod;
    fn validator(&self) -> ValidationMethod;
}
