//! Elliptic curve Diffie-Hellman over the key agreement curves DIDComm allows.
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand_core::OsRng;

use crate::{
    keys::{Curve, Jwk, Key},
    util::base64helper::to_base64,
    Error,
    Result,
};

/// Generates fresh private key on `curve`, used as the JWE `epk`.
pub fn generate_ephemeral(curve: Curve) -> Result<Key> {
    let jwk = match curve {
        Curve::X25519 => {
            let sk = x25519_dalek::StaticSecret::random_from_rng(OsRng);
            let pk = x25519_dalek::PublicKey::from(&sk);
            Jwk {
                d: Some(to_base64(sk.to_bytes())),
                ..Jwk::ephemeral("OKP", curve.as_str(), to_base64(pk.as_bytes()), None)
            }
        }
        Curve::P256 => {
            let sk = p256::SecretKey::random(&mut OsRng);
            let point = sk.public_key().to_encoded_point(false);
            ec_jwk(
                curve,
                point.x().map(|v| v.as_slice()),
                point.y().map(|v| v.as_slice()),
                &sk.to_bytes(),
            )?
        }
        Curve::Secp256k1 => {
            let sk = k256::SecretKey::random(&mut OsRng);
            let point = sk.public_key().to_encoded_point(false);
            ec_jwk(
                curve,
                point.x().map(|v| v.as_slice()),
                point.y().map(|v| v.as_slice()),
                &sk.to_bytes(),
            )?
        }
        Curve::Ed25519 => return Err(no_key_agreement(curve)),
    };
    Key::from_jwk("", jwk)
}

/// Raw shared secret `Z` between `private` and `public`.
pub fn shared_secret(private: &Key, public: &Key) -> Result<Vec<u8>> {
    if private.curve != public.curve {
        return Err(Error::IncompatibleCrypto(format!(
            "can't agree on a key between {} key '{}' and {} key '{}'",
            private.curve.as_str(),
            private.id,
            public.curve.as_str(),
            public.id
        )));
    }
    match private.curve {
        Curve::X25519 => {
            let sk = x25519_dalek::StaticSecret::from(private.d()?);
            let pk = x25519_dalek::PublicKey::from(public.x()?);
            let shared = sk.diffie_hellman(&pk);
            if !shared.was_contributory() {
                return Err(Error::Crypto(format!(
                    "non contributory X25519 agreement with '{}'",
                    public.id
                )));
            }
            Ok(shared.as_bytes().to_vec())
        }
        Curve::P256 => {
            let sk = p256::SecretKey::from_slice(&private.d()?)
                .map_err(|e| Error::Crypto(e.to_string()))?;
            let pk = p256::PublicKey::from_sec1_bytes(&public.sec1()?)
                .map_err(|e| Error::Crypto(format!("invalid P-256 key '{}': {}", public.id, e)))?;
            let shared = p256::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine());
            Ok(shared.raw_secret_bytes().to_vec())
        }
        Curve::Secp256k1 => {
            let sk = k256::SecretKey::from_slice(&private.d()?)
                .map_err(|e| Error::Crypto(e.to_string()))?;
            let pk = k256::PublicKey::from_sec1_bytes(&public.sec1()?)
                .map_err(|e| Error::Crypto(format!("invalid secp256k1 key '{}': {}", public.id, e)))?;
            let shared = k256::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine());
            Ok(shared.raw_secret_bytes().to_vec())
        }
        Curve::Ed25519 => Err(no_key_agreement(private.curve)),
    }
}

fn ec_jwk(curve: Curve, x: Option<&[u8]>, y: Option<&[u8]>, d: &[u8]) -> Result<Jwk> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Jwk {
            d: Some(to_base64(d)),
            ..Jwk::ephemeral("EC", curve.as_str(), to_base64(x), Some(to_base64(y)))
        }),
        _ => Err(Error::Crypto("identity point generated".into())),
    }
}

fn no_key_agreement(curve: Curve) -> Error {
    Error::Unsupported(format!("key agreement over {}", curve.as_str()))
}
