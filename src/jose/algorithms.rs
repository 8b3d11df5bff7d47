use std::convert::TryFrom;

use crate::{
    crypto::{CryptoAlgorithm, SignatureAlgorithm},
    keys::Curve,
    Error,
    Result,
};

/// Authenticated encryption algorithms (`alg` + `enc`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCryptAlg {
    /// `ECDH-1PU+A256KW` key agreement with `A256CBC-HS512` content encryption.
    #[serde(rename = "A256CBC-HS512+ECDH-1PU+A256KW")]
    A256cbcHs512Ecdh1puA256kw,
}

impl AuthCryptAlg {
    pub fn alg(&self) -> &'static str {
        "ECDH-1PU+A256KW"
    }

    pub fn enc(&self) -> CryptoAlgorithm {
        CryptoAlgorithm::A256CBCHS512
    }
}

impl Default for AuthCryptAlg {
    fn default() -> Self {
        AuthCryptAlg::A256cbcHs512Ecdh1puA256kw
    }
}

/// Anonymous encryption algorithms (`alg` + `enc`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonCryptAlg {
    #[serde(rename = "A256CBC-HS512+ECDH-ES+A256KW")]
    A256cbcHs512EcdhEsA256kw,
    #[serde(rename = "XC20P+ECDH-ES+A256KW")]
    Xc20pEcdhEsA256kw,
    #[serde(rename = "A256GCM+ECDH-ES+A256KW")]
    A256gcmEcdhEsA256kw,
}

impl AnonCryptAlg {
    pub fn alg(&self) -> &'static str {
        "ECDH-ES+A256KW"
    }

    pub fn enc(&self) -> CryptoAlgorithm {
        match self {
            AnonCryptAlg::A256cbcHs512EcdhEsA256kw => CryptoAlgorithm::A256CBCHS512,
            AnonCryptAlg::Xc20pEcdhEsA256kw => CryptoAlgorithm::XC20P,
            AnonCryptAlg::A256gcmEcdhEsA256kw => CryptoAlgorithm::A256GCM,
        }
    }
}

impl Default for AnonCryptAlg {
    fn default() -> Self {
        AnonCryptAlg::Xc20pEcdhEsA256kw
    }
}

/// Signature algorithms. Always chosen from the curve of the signing key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignAlg {
    #[serde(rename = "EdDSA")]
    EdDsa,
    #[serde(rename = "ES256")]
    Es256,
    #[serde(rename = "ES256K")]
    Es256k,
}

impl SignAlg {
    pub fn for_curve(curve: Curve) -> Result<Self> {
        match curve {
            Curve::Ed25519 => Ok(SignAlg::EdDsa),
            Curve::P256 => Ok(SignAlg::Es256),
            Curve::Secp256k1 => Ok(SignAlg::Es256k),
            Curve::X25519 => Err(Error::Unsupported("signing with X25519 keys".into())),
        }
    }

    pub fn primitive(&self) -> SignatureAlgorithm {
        match self {
            SignAlg::EdDsa => SignatureAlgorithm::EdDsa,
            SignAlg::Es256 => SignatureAlgorithm::Es256,
            SignAlg::Es256k => SignatureAlgorithm::Es256k,
        }
    }

    pub fn alg(&self) -> &'static str {
        self.primitive().alg()
    }
}

impl TryFrom<&String> for SignAlg {
    type Error = Error;
    fn try_from(incoming: &String) -> Result<Self> {
        match SignatureAlgorithm::try_from(incoming)? {
            SignatureAlgorithm::EdDsa => Ok(SignAlg::EdDsa),
            SignatureAlgorithm::Es256 => Ok(SignAlg::Es256),
            SignatureAlgorithm::Es256k => Ok(SignAlg::Es256k),
        }
    }
}

/// Encryption algorithm family of a received JWE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptAlg {
    Auth(AuthCryptAlg),
    Anon(AnonCryptAlg),
}

/// Maps JWE `alg`/`enc` header values back to a supported algorithm.
pub fn get_crypto_alg(alg: &str, enc: &str) -> Result<CryptAlg> {
    match (alg, enc) {
        ("ECDH-1PU+A256KW", "A256CBC-HS512") => Ok(CryptAlg::Auth(AuthCryptAlg::A256cbcHs512Ecdh1puA256kw)),
        ("ECDH-ES+A256KW", "A256CBC-HS512") => Ok(CryptAlg::Anon(AnonCryptAlg::A256cbcHs512EcdhEsA256kw)),
        ("ECDH-ES+A256KW", "XC20P") => Ok(CryptAlg::Anon(AnonCryptAlg::Xc20pEcdhEsA256kw)),
        ("ECDH-ES+A256KW", "A256GCM") => Ok(CryptAlg::Anon(AnonCryptAlg::A256gcmEcdhEsA256kw)),
        _ => Err(Error::Malformed(format!(
            "unsupported encryption algorithm alg='{}' enc='{}'",
            alg, enc
        ))),
    }
}
