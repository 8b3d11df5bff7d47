mod forward;

pub use forward::UnpackForwardResult;

use std::sync::Arc;

use serde_json::Value;

use crate::{
    dids::DidResolver,
    jose::{
        anoncrypt::anon_decrypt,
        authcrypt::auth_decrypt,
        get_crypto_alg,
        jwe::{self, ParsedJwe},
        jws::{self, Jws},
        AnonCryptAlg,
        AuthCryptAlg,
        CryptAlg,
        SignAlg,
    },
    keys::Key,
    messages::{FromPrior, Message},
    protocols::routing::try_parse_forward,
    secrets::SecretsResolver,
    selectors::RecipientKeySelector,
    util::did_url::did_of,
    DidComm,
    Error,
    Result,
};

#[derive(Clone)]
pub struct UnpackParams {
    /// Every recipient key we hold must decrypt the message, not just one.
    pub expect_decrypt_by_all_keys: bool,
    /// Continue into a forward message addressed to us.
    pub unwrap_re_wrapping_forward: bool,
    pub did_resolver: Option<Arc<dyn DidResolver>>,
    pub secrets_resolver: Option<Arc<dyn SecretsResolver>>,
}

impl Default for UnpackParams {
    fn default() -> Self {
        UnpackParams {
            expect_decrypt_by_all_keys: false,
            unwrap_re_wrapping_forward: true,
            did_resolver: None,
            secrets_resolver: None,
        }
    }
}

/// What was learned about a message while unpacking it.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct UnpackMetadata {
    /// Message was encrypted.
    pub encrypted: bool,
    /// Sender is known either by authcrypt or by signature.
    pub authenticated: bool,
    /// Message was signed.
    pub non_repudiation: bool,
    /// Message was anoncrypted.
    pub anonymous_sender: bool,
    /// Message came in a forward addressed to us and was unpacked further.
    pub re_wrapped_in_forward: bool,
    /// Kids of every held key among the JWE recipients. With
    /// `expect_decrypt_by_all_keys` unset only the first of them is
    /// required to unwrap the content key.
    pub encrypted_to: Option<Vec<String>>,
    pub encrypted_from: Option<String>,
    pub sign_from: Option<String>,
    pub from_prior_issuer_kid: Option<String>,
    pub enc_alg_auth: Option<AuthCryptAlg>,
    pub enc_alg_anon: Option<AnonCryptAlg>,
    pub sign_alg: Option<SignAlg>,
    /// Received JWS, kept as proof of non-repudiation.
    pub signed_message: Option<String>,
    pub from_prior_jwt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnpackResult {
    pub message: Message,
    pub metadata: UnpackMetadata,
}

/// Received envelope layer.
enum Envelope {
    Encrypted(ParsedJwe),
    Signed(Jws),
    Plaintext(Value),
}

/// Encryption layer which was removed last.
/// Envelopes nest only as anon > auth > signed > plain.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Layer {
    None,
    Anon,
    Auth,
}

fn sniff(msg: &str) -> Result<Envelope> {
    let value: Value =
        serde_json::from_str(msg).map_err(|e| Error::Malformed(format!("message is not JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::Malformed("message is not a JSON object".into()))?;
    if object.contains_key("recipients") {
        Ok(Envelope::Encrypted(jwe::parse(msg)?))
    } else if object.contains_key("signatures") {
        Ok(Envelope::Signed(jws::parse(msg)?))
    } else {
        Ok(Envelope::Plaintext(value))
    }
}

/// Recipient kids we hold secrets for, whichever of them decrypted.
fn key_ids(keys: &[Key]) -> Vec<String> {
    keys.iter().map(|key| key.id.clone()).collect()
}

fn utf8(payload: Vec<u8>) -> Result<String> {
    String::from_utf8(payload).map_err(|_| Error::Malformed("payload is not UTF-8".into()))
}

struct Unpacker<'a> {
    params: &'a UnpackParams,
    selector: RecipientKeySelector<'a>,
}

impl<'a> Unpacker<'a> {
    /// Removes envelope layers down to the plaintext.
    /// Returns the message with its not yet verified `from_prior` JWT.
    fn unpack_layer(&self, msg: &str, prev: Layer, metadata: &mut UnpackMetadata) -> Result<(Message, Option<String>)> {
        match sniff(msg)? {
            Envelope::Encrypted(parsed) => match get_crypto_alg(&parsed.protected.alg, &parsed.protected.enc)? {
                CryptAlg::Anon(alg) => self.anon_layer(parsed, alg, prev, metadata),
                CryptAlg::Auth(alg) => self.auth_layer(parsed, alg, prev, metadata),
            },
            Envelope::Signed(jws) => self.signed_layer(msg, jws, metadata),
            Envelope::Plaintext(value) => Message::from_wire(value),
        }
    }

    fn anon_layer(
        &self,
        parsed: ParsedJwe,
        alg: AnonCryptAlg,
        prev: Layer,
        metadata: &mut UnpackMetadata,
    ) -> Result<(Message, Option<String>)> {
        if prev != Layer::None {
            return Err(Error::Malformed("anoncrypt must be the outermost envelope".into()));
        }
        let keys = self.selector.find_anon_crypt_keys(&parsed.to_kids())?;
        let (payload, decrypted_by) = anon_decrypt(&parsed, &keys, self.params.expect_decrypt_by_all_keys)?;
        trace!("anon decrypted by {:?}", decrypted_by);
        metadata.encrypted = true;
        metadata.anonymous_sender = true;
        metadata.enc_alg_anon = Some(alg);
        metadata.encrypted_to = Some(key_ids(&keys));
        let payload = utf8(payload)?;

        if self.params.unwrap_re_wrapping_forward {
            if let Some(forwarded) = self.forward_to_us(&payload)? {
                debug!("unwrapping forward re-wrapped for us");
                *metadata = UnpackMetadata {
                    re_wrapped_in_forward: true,
                    ..UnpackMetadata::default()
                };
                return self.unpack_layer(&forwarded, Layer::None, metadata);
            }
        }
        self.unpack_layer(&payload, Layer::Anon, metadata)
    }

    /// Forwarded message if `payload` is a forward whose `next` is one of us.
    fn forward_to_us(&self, payload: &str) -> Result<Option<String>> {
        let value = match sniff(payload)? {
            Envelope::Plaintext(value) => value,
            _ => return Ok(None),
        };
        let (msg, _) = Message::from_wire(value)?;
        match try_parse_forward(&msg) {
            Some(forward) if self.selector.has_keys_for_forward_next(&forward.next)? => {
                Ok(Some(serde_json::to_string(&forward.forwarded_msg)?))
            }
            _ => Ok(None),
        }
    }

    fn auth_layer(
        &self,
        mut parsed: ParsedJwe,
        alg: AuthCryptAlg,
        prev: Layer,
        metadata: &mut UnpackMetadata,
    ) -> Result<(Message, Option<String>)> {
        if prev != Layer::None && prev != Layer::Anon {
            return Err(Error::Malformed("authcrypt can be wrapped only by anoncrypt".into()));
        }
        parsed.verify_apu()?;
        let skid = parsed
            .protected
            .skid
            .clone()
            .ok_or_else(|| Error::Malformed("sender key id is not set".into()))?;
        let (from_key, to_keys) = self.selector.find_auth_crypt_keys(&skid, &parsed.to_kids())?;
        let (payload, decrypted_by) =
            auth_decrypt(&parsed, &from_key, &to_keys, self.params.expect_decrypt_by_all_keys)?;
        trace!("auth decrypted from {} by {:?}", skid, decrypted_by);
        metadata.encrypted = true;
        metadata.authenticated = true;
        metadata.enc_alg_auth = Some(alg);
        metadata.encrypted_from = Some(skid);
        metadata.encrypted_to = Some(key_ids(&to_keys));
        self.unpack_layer(&utf8(payload)?, Layer::Auth, metadata)
    }

    fn signed_layer(
        &self,
        msg: &str,
        jws: Jws,
        metadata: &mut UnpackMetadata,
    ) -> Result<(Message, Option<String>)> {
        let mut first_signer = None;
        for signature in &jws.signatures {
            let alg = signature.alg()?;
            let key = self.selector.find_verification_key(&signature.header.kid)?;
            jws::verify(&jws, signature, alg, &key)?;
            trace!("signature of {} verified", key.id);
            if first_signer.is_none() {
                first_signer = Some((key.id, alg));
            }
        }
        let (sign_from, sign_alg) =
            first_signer.ok_or_else(|| Error::Malformed("JWS has no signatures".into()))?;
        metadata.authenticated = true;
        metadata.non_repudiation = true;
        metadata.sign_from = Some(sign_from);
        metadata.sign_alg = Some(sign_alg);
        metadata.signed_message = Some(msg.to_string());

        let payload = utf8(jws.payload()?)?;
        match sniff(&payload)? {
            Envelope::Plaintext(value) => Message::from_wire(value),
            _ => Err(Error::Malformed("signed payload must be a plaintext message".into())),
        }
    }
}

impl DidComm {
    /// Unpacks any DIDComm message: plaintext, signed, encrypted or
    /// a combination of them. Sender and signer keys are checked to
    /// belong to `message.from` and `from_prior` is verified.
    pub fn unpack(&self, msg: &str, params: &UnpackParams) -> Result<UnpackResult> {
        let (did_resolver, secrets_resolver) = self.resolvers(&params.did_resolver, &params.secrets_resolver);
        let unpacker = Unpacker {
            params,
            selector: RecipientKeySelector::new(did_resolver, secrets_resolver),
        };
        let mut metadata = UnpackMetadata::default();
        let (mut message, from_prior_jwt) = unpacker.unpack_layer(msg, Layer::None, &mut metadata)?;

        if let Some(jwt) = from_prior_jwt {
            let (claims, issuer_kid) = FromPrior::unpack(&jwt, &unpacker.selector)?;
            if message.from.as_deref() != Some(claims.sub.as_str()) {
                return Err(Error::Malformed(
                    "from_prior `sub` value is not equal to message `from` value".into(),
                ));
            }
            message.from_prior = Some(claims);
            metadata.from_prior_issuer_kid = Some(issuer_kid);
            metadata.from_prior_jwt = Some(jwt);
        }

        check_sender(&metadata.encrypted_from, &message, "encrypted")?;
        check_sender(&metadata.sign_from, &message, "signed")?;
        debug!("unpacked message {}", message.id);
        Ok(UnpackResult { message, metadata })
    }
}

fn check_sender(kid: &Option<String>, message: &Message, how: &str) -> Result<()> {
    match kid {
        Some(kid) if message.from.as_deref() != Some(did_of(kid)) => Err(Error::Malformed(format!(
            "message is {} by '{}' which does not belong to `from`",
            how, kid
        ))),
        _ => Ok(()),
    }
}
