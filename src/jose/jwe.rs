//! JWE in general JSON serialization with one content encryption key shared
//! by all recipients and wrapped per recipient.
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::{
    crypto::{ecdh, kdf::concat_kdf, key_wrap, CryptoAlgorithm, Cypher},
    keys::{Jwk, Key},
    messages::MessageType,
    util::base64helper::{from_base64, from_base64_json, to_base64},
    Error,
    Result,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Jwe {
    /// base64url encoded [`ProtectedHeader`], kept as received since it is the AAD.
    pub protected: String,
    pub recipients: Vec<Recipient>,
    pub iv: String,
    pub ciphertext: String,
    pub tag: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipient {
    pub header: RecipientHeader,
    pub encrypted_key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecipientHeader {
    pub kid: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProtectedHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    pub alg: String,
    pub enc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apu: Option<String>,
    pub apv: String,
    pub epk: Jwk,
}

/// Received JWE with decoded protected header.
#[derive(Debug, Clone)]
pub struct ParsedJwe {
    pub jwe: Jwe,
    pub protected: ProtectedHeader,
    pub apu: Option<Vec<u8>>,
    pub apv: Vec<u8>,
}

/// `apv`: base64url(SHA-256 of recipient kids sorted and joined with `.`).
pub fn calculate_apv(kids: &[String]) -> String {
    let mut kids = kids.to_vec();
    kids.sort();
    to_base64(Sha256::digest(kids.join(".").as_bytes()))
}

/// Parses received text as JWE, any failure is [`Error::Malformed`].
pub fn parse(jwe: &str) -> Result<ParsedJwe> {
    let jwe: Jwe = serde_json::from_str(jwe)
        .map_err(|e| Error::Malformed(format!("unable to parse JWE: {}", e)))?;
    if jwe.recipients.is_empty() {
        return Err(Error::Malformed("JWE has no recipients".into()));
    }
    let protected: ProtectedHeader = from_base64_json(&jwe.protected)?;
    let apu = protected.apu.as_deref().map(from_base64).transpose()?;
    let apv = from_base64(&protected.apv)?;
    Ok(ParsedJwe {
        jwe,
        protected,
        apu,
        apv,
    })
}

impl ParsedJwe {
    pub fn to_kids(&self) -> Vec<String> {
        self.jwe
            .recipients
            .iter()
            .map(|r| r.header.kid.clone())
            .collect()
    }

    /// `apv` must commit to exactly the listed recipients.
    pub fn verify_apv(&self) -> Result<()> {
        if calculate_apv(&self.to_kids()) != self.protected.apv {
            return Err(Error::Malformed("apv is invalid".into()));
        }
        Ok(())
    }

    /// `apu` must decode to `skid`, missing `skid` is taken from `apu`.
    pub fn verify_apu(&mut self) -> Result<()> {
        let apu = match &self.apu {
            Some(apu) => Some(
                String::from_utf8(apu.clone())
                    .map_err(|_| Error::Malformed("apu is not a valid UTF-8 string".into()))?,
            ),
            None => None,
        };
        match (&self.protected.skid, apu) {
            (Some(skid), Some(apu)) if *skid != apu => {
                Err(Error::Malformed("apu is not equal to skid".into()))
            }
            (None, Some(apu)) => {
                self.protected.skid = Some(apu);
                Ok(())
            }
            (None, None) => Err(Error::Malformed("sender key id is not set".into())),
            _ => Ok(()),
        }
    }
}

/// Encrypts `payload` for every key of `recipients`.
///
/// The content is encrypted once with a random CEK. The first recipient's
/// wrap happens right after, and every further recipient gets the same CEK
/// wrapped with its own KEK. With a `sender` (ECDH-1PU) each KEK also binds
/// the content tag, which is why content encryption must come first.
pub(crate) fn encrypt(
    payload: &[u8],
    alg: &str,
    enc: CryptoAlgorithm,
    sender: Option<&Key>,
    recipients: &[Key],
) -> Result<String> {
    let curve = match recipients.first() {
        Some(first) => first.curve,
        None => return Err(Error::IllegalArgument("no recipient keys to encrypt for".into())),
    };
    if let Some(mismatch) = recipients
        .iter()
        .chain(sender)
        .find(|key| key.curve != curve)
    {
        return Err(Error::IncompatibleCrypto(format!(
            "key '{}' is not on curve {}",
            mismatch.id,
            curve.as_str()
        )));
    }

    let kids: Vec<String> = recipients.iter().map(|key| key.id.clone()).collect();
    let epk = ecdh::generate_ephemeral(curve)?;
    let header = ProtectedHeader {
        typ: Some(MessageType::DidCommJwe.as_str().to_string()),
        alg: alg.to_string(),
        enc: enc.enc().to_string(),
        skid: sender.map(|key| key.id.clone()),
        apu: sender.map(|key| to_base64(&key.id)),
        apv: calculate_apv(&kids),
        epk: epk.jwk.to_public(),
    };
    let protected = to_base64(serde_json::to_vec(&header)?);
    trace!("encrypting {} with {} for {:?}", alg, enc.enc(), kids);

    let mut cek = vec![0u8; enc.key_len()];
    OsRng.fill_bytes(&mut cek);
    let mut iv = vec![0u8; enc.nonce_len()];
    OsRng.fill_bytes(&mut iv);
    let sealed = enc.encryptor()(&iv, &cek, payload, protected.as_bytes())?;
    let (ciphertext, tag) = sealed.split_at(sealed.len() - enc.tag_len());

    let apu = sender.map(|key| key.id.as_bytes().to_vec());
    let apv = from_base64(&header.apv)?;
    let recipients = recipients
        .iter()
        .map(|recipient| -> Result<Recipient> {
            let mut z = ecdh::shared_secret(&epk, recipient)?;
            if let Some(sender) = sender {
                z.extend(ecdh::shared_secret(sender, recipient)?);
            }
            let kek = concat_kdf(
                &z,
                alg,
                apu.as_deref(),
                Some(&apv),
                sender.map(|_| tag),
            )?;
            Ok(Recipient {
                header: RecipientHeader {
                    kid: recipient.id.clone(),
                },
                encrypted_key: to_base64(key_wrap::wrap(&kek, &cek)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let jwe = Jwe {
        protected,
        recipients,
        iv: to_base64(iv),
        ciphertext: to_base64(ciphertext),
        tag: to_base64(tag),
    };
    Ok(serde_json::to_string(&jwe)?)
}

/// Decrypts with private `recipient` key. `sender` is the public key
/// named by `skid` for ECDH-1PU, `None` for ECDH-ES.
pub(crate) fn decrypt(parsed: &ParsedJwe, sender: Option<&Key>, recipient: &Key) -> Result<Vec<u8>> {
    let entry = parsed
        .jwe
        .recipients
        .iter()
        .find(|r| r.header.kid == recipient.id)
        .ok_or_else(|| Error::Malformed(format!("no recipient entry for '{}'", recipient.id)))?;
    let enc = CryptoAlgorithm::try_from(&parsed.protected.enc)?;
    let epk = Key::from_jwk("epk", parsed.protected.epk.clone())
        .map_err(|e| Error::Malformed(format!("invalid epk: {}", e)))?;
    let tag = from_base64(&parsed.jwe.tag)?;

    let mut z = ecdh::shared_secret(recipient, &epk).map_err(|e| match e {
        Error::IncompatibleCrypto(reason) => Error::Malformed(reason),
        other => other,
    })?;
    if let Some(sender) = sender {
        z.extend(ecdh::shared_secret(recipient, sender)?);
    }
    let kek = concat_kdf(
        &z,
        &parsed.protected.alg,
        parsed.apu.as_deref(),
        Some(&parsed.apv),
        sender.map(|_| tag.as_slice()),
    )?;
    let cek = key_wrap::unwrap(&kek, &from_base64(&entry.encrypted_key)?)?;

    let mut sealed = from_base64(&parsed.jwe.ciphertext)?;
    sealed.extend(&tag);
    let iv = from_base64(&parsed.jwe.iv)?;
    enc.decryptor()(&iv, &cek, &sealed, parsed.jwe.protected.as_bytes())
}

/// Decrypts with each of `recipients` in order.
///
/// Returns the payload and the kids which decrypted it. Unless
/// `decrypt_by_all_keys` is set the first key that succeeds wins, otherwise
/// every key must succeed and yield the same payload.
pub(crate) fn decrypt_by_keys(
    parsed: &ParsedJwe,
    sender: Option<&Key>,
    recipients: &[Key],
    decrypt_by_all_keys: bool,
) -> Result<(Vec<u8>, Vec<String>)> {
    let mut payload: Option<Vec<u8>> = None;
    let mut decrypted_by = vec![];
    let mut last_error = None;

    for recipient in recipients {
        match decrypt(parsed, sender, recipient) {
            Ok(decrypted) => {
                if let Some(previous) = &payload {
                    if *previous != decrypted {
                        return Err(Error::Malformed(
                            "recipients decrypted to different payloads".into(),
                        ));
                    }
                }
                payload = Some(decrypted);
                decrypted_by.push(recipient.id.clone());
                if !decrypt_by_all_keys {
                    break;
                }
            }
            Err(e) if decrypt_by_all_keys => return Err(e),
            Err(e) => {
                debug!("decryption by {} failed: {}", recipient.id, e);
                last_error = Some(e);
            }
        }
    }

    match payload {
        Some(payload) => Ok((payload, decrypted_by)),
        None => Err(last_error
            .unwrap_or_else(|| Error::Malformed("no keys to decrypt the message".into()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn apv_literal() {
        let kids = vec!["key1".to_string(), "key2".to_string()];
        assert_eq!(calculate_apv(&kids), "_Xzta7iZsfJXb_-2CaL6LCzZJOKmfYzPnGZ5-52RtK0");
    }

    #[quickcheck]
    fn apv_does_not_depend_on_order(kids: Vec<String>) -> bool {
        let mut reversed = kids.clone();
        reversed.reverse();
        calculate_apv(&kids) == calculate_apv(&reversed)
    }

    #[test]
    fn skid_is_derived_from_apu() -> Result<()> {
        // Arrange
        let epk = ecdh::generate_ephemeral(crate::keys::Curve::X25519)?;
        let mut parsed = ParsedJwe {
            jwe: Jwe {
                protected: String::new(),
                recipients: vec![],
                iv: String::new(),
                ciphertext: String::new(),
                tag: String::new(),
            },
            protected: ProtectedHeader {
                typ: None,
                alg: "ECDH-1PU+A256KW".into(),
                enc: "A256CBC-HS512".into(),
                skid: None,
                apu: Some(to_base64("did:example:alice#key-x25519-1")),
                apv: calculate_apv(&[]),
                epk: epk.jwk.to_public(),
            },
            apu: Some(b"did:example:alice#key-x25519-1".to_vec()),
            apv: vec![],
        };
        // Act
        parsed.verify_apu()?;
        // Assert
        assert_eq!(parsed.protected.skid.as_deref(), Some("did:example:alice#key-x25519-1"));

        parsed.protected.skid = Some("did:example:mallory#key-x25519-1".into());
        assert!(matches!(parsed.verify_apu(), Err(Error::Malformed(m)) if m == "apu is not equal to skid"));
        Ok(())
    }
}
