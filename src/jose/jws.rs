//! JWS in general JSON serialization (signed DIDComm messages) and in compact
//! serialization (`from_prior` JWTs).
use std::convert::TryFrom;

use super::SignAlg;
use crate::{
    crypto::Signer,
    keys::{Curve, Key},
    messages::MessageType,
    util::base64helper::{from_base64, from_base64_json, to_base64},
    Error,
    Result,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Jws {
    pub payload: String,
    pub signatures: Vec<Signature>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Signature {
    /// base64url encoded [`ProtectedHeader`], kept as received.
    pub protected: String,
    pub signature: String,
    pub header: SignatureHeader,
}

/// Unprotected per-signature header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignatureHeader {
    pub kid: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProtectedHeader {
    pub typ: String,
    pub alg: String,
}

/// Header of a compact JWS.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompactHeader {
    pub typ: String,
    pub alg: String,
    pub kid: String,
}

/// Decoded compact JWS, `signing_input` is the raw `header.payload` text.
#[derive(Debug, Clone)]
pub struct CompactJws<'a> {
    pub header: CompactHeader,
    signing_input: &'a str,
    payload: &'a str,
    signature: Vec<u8>,
}

/// Signs `payload` with `key`, producing general JSON serialization.
pub fn sign(payload: &[u8], key: &Key) -> Result<String> {
    let alg = SignAlg::for_curve(key.curve)?;
    trace!("signing with {} key {}", alg.alg(), key.id);
    let protected = to_base64(serde_json::to_vec(&ProtectedHeader {
        typ: MessageType::DidCommJws.as_str().to_string(),
        alg: alg.alg().to_string(),
    })?);
    let payload = to_base64(payload);
    let signature = sign_input(&format!("{}.{}", protected, payload), alg, key)?;
    let jws = Jws {
        payload,
        signatures: vec![Signature {
            protected,
            signature: to_base64(signature),
            header: SignatureHeader { kid: key.id.clone() },
        }],
    };
    Ok(serde_json::to_string(&jws)?)
}

/// Signs `payload` into compact serialization with `kid` in protected header.
pub fn sign_compact(payload: &[u8], key: &Key, typ: &str) -> Result<String> {
    let alg = SignAlg::for_curve(key.curve)?;
    let header = to_base64(serde_json::to_vec(&CompactHeader {
        typ: typ.to_string(),
        alg: alg.alg().to_string(),
        kid: key.id.clone(),
    })?);
    let signing_input = format!("{}.{}", header, to_base64(payload));
    let signature = sign_input(&signing_input, alg, key)?;
    Ok(format!("{}.{}", signing_input, to_base64(signature)))
}

/// Parses received text as JWS, any failure is [`Error::Malformed`].
pub fn parse(jws: &str) -> Result<Jws> {
    let jws: Jws = serde_json::from_str(jws)
        .map_err(|e| Error::Malformed(format!("unable to parse JWS: {}", e)))?;
    if jws.signatures.is_empty() {
        return Err(Error::Malformed("JWS has no signatures".into()));
    }
    Ok(jws)
}

pub fn parse_compact(jws: &str) -> Result<CompactJws<'_>> {
    let parts: Vec<&str> = jws.split('.').collect();
    if parts.len() != 3 {
        return Err(Error::Malformed("compact JWS must have 3 parts".into()));
    }
    let header: CompactHeader = from_base64_json(parts[0])?;
    let signing_input = &jws[..parts[0].len() + 1 + parts[1].len()];
    Ok(CompactJws {
        header,
        signing_input,
        payload: parts[1],
        signature: from_base64(parts[2])?,
    })
}

impl Jws {
    pub fn payload(&self) -> Result<Vec<u8>> {
        from_base64(&self.payload)
    }
}

impl Signature {
    pub fn protected_header(&self) -> Result<ProtectedHeader> {
        from_base64_json(&self.protected)
    }

    pub fn alg(&self) -> Result<SignAlg> {
        let header = self.protected_header()?;
        SignAlg::try_from(&header.alg)
    }
}

/// Verifies one signature of `jws` made with `alg` against public `key`.
pub fn verify(jws: &Jws, signature: &Signature, alg: SignAlg, key: &Key) -> Result<()> {
    let signature_bytes = from_base64(&signature.signature)?;
    let input = format!("{}.{}", signature.protected, jws.payload);
    verify_input(&input, &signature_bytes, alg, key)
}

impl<'a> CompactJws<'a> {
    pub fn payload(&self) -> Result<Vec<u8>> {
        from_base64(self.payload)
    }

    pub fn verify(&self, key: &Key) -> Result<()> {
        let alg = SignAlg::try_from(&self.header.alg)?;
        verify_input(self.signing_input, &self.signature, alg, key)
    }
}

fn sign_input(input: &str, alg: SignAlg, key: &Key) -> Result<Vec<u8>> {
    alg.primitive().signer()(&key.d()?, input.as_bytes())
}

fn verify_input(input: &str, signature: &[u8], alg: SignAlg, key: &Key) -> Result<()> {
    if SignAlg::for_curve(key.curve)? != alg {
        return Err(Error::Malformed(format!(
            "signature algorithm {} does not match {} key '{}'",
            alg.alg(),
            key.curve.as_str(),
            key.id
        )));
    }
    let public = match key.curve {
        Curve::Ed25519 => key.x()?.to_vec(),
        _ => key.sec1()?,
    };
    if alg.primitive().validator()(&public, input.as_bytes(), signature)? {
        Ok(())
    } else {
        Err(Error::Malformed(format!("wrong signature by '{}'", key.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::Secret;

    fn alice_key(kid: &str) -> Key {
        let secrets: Vec<Secret> = serde_json::from_str(utilities::ALICE_SECRETS).unwrap();
        let secret = secrets.iter().find(|s| s.id == kid).unwrap();
        Key::from_secret(secret).unwrap()
    }

    #[test]
    fn signs_and_verifies_with_every_curve() -> Result<()> {
        for kid in ["did:example:alice#key-1", "did:example:alice#key-2", "did:example:alice#key-3"] {
            // Arrange
            let key = alice_key(kid);
            // Act
            let jws = parse(&sign(b"{}", &key)?)?;
            let signature = &jws.signatures[0];
            // Assert
            assert_eq!(signature.header.kid, kid);
            assert_eq!(signature.protected_header()?.typ, "application/didcomm-signed+json");
            verify(&jws, signature, signature.alg()?, &key.to_public())?;
            assert_eq!(jws.payload()?, b"{}");
        }
        Ok(())
    }

    #[test]
    fn tampered_payload_is_malformed() -> Result<()> {
        let key = alice_key("did:example:alice#key-1");
        let mut jws = parse(&sign(b"{\"a\":1}", &key)?)?;
        jws.payload = to_base64(b"{\"a\":2}");
        let signature = jws.signatures[0].clone();
        let result = verify(&jws, &signature, signature.alg()?, &key);
        assert!(matches!(result, Err(Error::Malformed(_))));
        Ok(())
    }

    #[test]
    fn alg_must_match_key() -> Result<()> {
        let key = alice_key("did:example:alice#key-1");
        let jws = parse(&sign(b"{}", &key)?)?;
        let result = verify(&jws, &jws.signatures[0], SignAlg::Es256, &key);
        assert!(matches!(result, Err(Error::Malformed(_))));
        Ok(())
    }

    #[test]
    fn compact_round_trip() -> Result<()> {
        let key = alice_key("did:example:alice#key-2");
        let jwt = sign_compact(b"{\"iss\":\"did:example:alice\"}", &key, "JWT")?;
        let parsed = parse_compact(&jwt)?;
        assert_eq!(parsed.header.kid, "did:example:alice#key-2");
        assert_eq!(parsed.header.alg, "ES256");
        parsed.verify(&key)?;
        assert_eq!(parsed.payload()?, b"{\"iss\":\"did:example:alice\"}");
        Ok(())
    }
}
