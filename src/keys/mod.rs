//! One curve-typed [`Key`] for every supported encoding of verification
//! methods and secrets.
mod jwk;

pub use jwk::Jwk;

use std::convert::TryFrom;

use base58::FromBase58;

use crate::{
    dids::{VerificationMaterial, VerificationMethod, VerificationMethodType},
    secrets::{Secret, SecretMaterial, SecretType},
    util::base64helper::{from_base64, to_base64},
    Error,
    Result,
};

const X25519_MULTICODEC: [u8; 2] = [0xec, 0x01];
const ED25519_MULTICODEC: [u8; 2] = [0xed, 0x01];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    X25519,
    Ed25519,
    P256,
    Secp256k1,
}

impl Curve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::X25519 => "X25519",
            Curve::Ed25519 => "Ed25519",
            Curve::P256 => "P-256",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    pub(crate) fn kty(&self) -> &'static str {
        match self {
            Curve::X25519 | Curve::Ed25519 => "OKP",
            Curve::P256 | Curve::Secp256k1 => "EC",
        }
    }
}

impl TryFrom<&str> for Curve {
    type Error = Error;
    fn try_from(crv: &str) -> Result<Self> {
        match crv {
            "X25519" => Ok(Curve::X25519),
            "Ed25519" => Ok(Curve::Ed25519),
            "P-256" => Ok(Curve::P256),
            "secp256k1" => Ok(Curve::Secp256k1),
            _ => Err(Error::Unsupported(format!("curve '{}'", crv))),
        }
    }
}

/// Normalized key. `id` is the DID URL of the verification method or secret.
#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    pub id: String,
    pub curve: Curve,
    pub jwk: Jwk,
}

impl Key {
    /// Public key from a DID Doc verification method.
    pub fn from_verification_method(method: &VerificationMethod) -> Result<Self> {
        let unsupported_format = || Error::UnsupportedVerificationMethodMaterialFormat {
            format: method.verification_material.format().to_string(),
            type_: method.type_.as_str().to_string(),
        };
        match (&method.type_, &method.verification_material) {
            (VerificationMethodType::JsonWebKey2020, VerificationMaterial::Jwk(value)) => {
                Self::from_jwk_value(&method.id, value)
            }
            (VerificationMethodType::X25519KeyAgreementKey2019, VerificationMaterial::Base58(value)) => {
                Self::from_raw(&method.id, Curve::X25519, &decode_base58(value)?)
            }
            (VerificationMethodType::Ed25519VerificationKey2018, VerificationMaterial::Base58(value)) => {
                Self::from_raw(&method.id, Curve::Ed25519, &decode_base58(value)?)
            }
            (VerificationMethodType::X25519KeyAgreementKey2020, VerificationMaterial::Multibase(value)) => {
                let raw = decode_multicodec(value, &X25519_MULTICODEC)?;
                Self::from_raw(&method.id, Curve::X25519, &raw)
            }
            (VerificationMethodType::Ed25519VerificationKey2020, VerificationMaterial::Multibase(value)) => {
                let raw = decode_multicodec(value, &ED25519_MULTICODEC)?;
                Self::from_raw(&method.id, Curve::Ed25519, &raw)
            }
            (VerificationMethodType::Other(type_), _) => {
                Err(Error::UnsupportedVerificationMethodType(type_.clone()))
            }
            _ => Err(unsupported_format()),
        }
    }

    /// Private key from a secret. Only JWK encoded secrets are supported.
    pub fn from_secret(secret: &Secret) -> Result<Self> {
        match (&secret.type_, &secret.secret_material) {
            (SecretType::JsonWebKey2020, SecretMaterial::Jwk(value)) => {
                let key = Self::from_jwk_value(&secret.id, value)?;
                if !key.is_private() {
                    return Err(Error::Crypto(format!(
                        "secret '{}' has no private key part",
                        secret.id
                    )));
                }
                Ok(key)
            }
            (SecretType::JsonWebKey2020, material) => Err(Error::UnsupportedSecretMaterialFormat {
                format: material.format().to_string(),
                type_: secret.type_.as_str().to_string(),
            }),
            (type_, _) => Err(Error::UnsupportedSecretType(type_.as_str().to_string())),
        }
    }

    pub fn is_private(&self) -> bool {
        self.jwk.d.is_some()
    }

    pub(crate) fn from_jwk(id: &str, jwk: Jwk) -> Result<Self> {
        let curve = Curve::try_from(jwk.crv.as_str())?;
        if jwk.kty != curve.kty() {
            return Err(Error::Crypto(format!(
                "key '{}': kty '{}' does not match curve {}",
                id,
                jwk.kty,
                curve.as_str()
            )));
        }
        let key = Key {
            id: id.to_string(),
            curve,
            jwk,
        };
        key.x()?;
        if curve.kty() == "EC" {
            key.y()?;
        }
        if key.is_private() {
            key.d()?;
        }
        Ok(key)
    }

    fn from_jwk_value(id: &str, value: &serde_json::Value) -> Result<Self> {
        let jwk: Jwk = serde_json::from_value(value.clone())
            .map_err(|e| Error::Crypto(format!("key '{}' is not a valid JWK: {}", id, e)))?;
        Self::from_jwk(id, jwk)
    }

    fn from_raw(id: &str, curve: Curve, raw: &[u8]) -> Result<Self> {
        Self::from_jwk(
            id,
            Jwk::ephemeral(curve.kty(), curve.as_str(), to_base64(raw), None),
        )
    }

    /// Public key with same id and curve.
    pub fn to_public(&self) -> Self {
        Key {
            id: self.id.clone(),
            curve: self.curve,
            jwk: self.jwk.to_public(),
        }
    }

    pub(crate) fn x(&self) -> Result<[u8; 32]> {
        coordinate(&self.id, "x", &self.jwk.x)
    }

    pub(crate) fn y(&self) -> Result<[u8; 32]> {
        let y = self
            .jwk
            .y
            .as_ref()
            .ok_or_else(|| Error::Crypto(format!("key '{}' has no 'y' coordinate", self.id)))?;
        coordinate(&self.id, "y", y)
    }

    pub(crate) fn d(&self) -> Result<[u8; 32]> {
        let d = self
            .jwk
            .d
            .as_ref()
            .ok_or_else(|| Error::Crypto(format!("key '{}' is not private", self.id)))?;
        coordinate(&self.id, "d", d)
    }

    /// Uncompressed SEC1 point for `EC` keys.
    pub(crate) fn sec1(&self) -> Result<Vec<u8>> {
        let mut point = vec![0x04];
        point.extend_from_slice(&self.x()?);
        point.extend_from_slice(&self.y()?);
        Ok(point)
    }
}

fn coordinate(id: &str, name: &str, encoded: &str) -> Result<[u8; 32]> {
    let decoded = from_base64(encoded)?;
    <[u8; 32]>::try_from(decoded.as_slice()).map_err(|_| {
        Error::Crypto(format!(
            "key '{}': '{}' must be 32 bytes, got {}",
            id,
            name,
            decoded.len()
        ))
    })
}

fn decode_base58(value: &str) -> Result<Vec<u8>> {
    value
        .from_base58()
        .map_err(|e| Error::Crypto(format!("invalid base58 key material: {:?}", e)))
}

fn decode_multicodec(value: &str, codec: &[u8; 2]) -> Result<Vec<u8>> {
    let (_, decoded) = multibase::decode(value)
        .map_err(|e| Error::Crypto(format!("invalid multibase key material: {}", e)))?;
    match decoded.strip_prefix(&codec[..]) {
        Some(raw) => Ok(raw.to_vec()),
        None => Err(Error::Crypto(format!(
            "multicodec prefix {:02x?} expected",
            codec
        ))),
    }
}
