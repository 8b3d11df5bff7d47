use super::{key_ids, sniff, utf8, Envelope, UnpackParams};
use crate::{
    jose::{anoncrypt::anon_decrypt, get_crypto_alg, CryptAlg},
    messages::Message,
    protocols::routing::try_parse_forward,
    selectors::RecipientKeySelector,
    DidComm,
    Error,
    Result,
};

/// One removed forward layer, as seen by a mediator.
#[derive(Debug, Clone, PartialEq)]
pub struct UnpackForwardResult {
    pub forward_msg: Message,
    /// DID or key the forwarded message is for.
    pub next: String,
    /// Packed message to pass on, untouched.
    pub forwarded_msg: String,
    /// Kids of every held key among the forward recipients.
    pub encrypted_to: Vec<String>,
}

impl DidComm {
    /// Decrypts one anoncrypted `routing/2.0/forward` message without
    /// looking into the message it carries.
    pub fn unpack_forward(&self, msg: &str, params: &UnpackParams) -> Result<UnpackForwardResult> {
        let (did_resolver, secrets_resolver) = self.resolvers(&params.did_resolver, &params.secrets_resolver);
        let selector = RecipientKeySelector::new(did_resolver, secrets_resolver);

        let parsed = match sniff(msg)? {
            Envelope::Encrypted(parsed) => parsed,
            _ => return Err(Error::Malformed("forward message must be anoncrypted".into())),
        };
        if !matches!(
            get_crypto_alg(&parsed.protected.alg, &parsed.protected.enc)?,
            CryptAlg::Anon(_)
        ) {
            return Err(Error::Malformed("forward message must be anoncrypted".into()));
        }
        let keys = selector.find_anon_crypt_keys(&parsed.to_kids())?;
        let (payload, _) = anon_decrypt(&parsed, &keys, params.expect_decrypt_by_all_keys)?;

        let value = match sniff(&utf8(payload)?)? {
            Envelope::Plaintext(value) => value,
            _ => return Err(Error::Malformed("forward payload must be a plaintext message".into())),
        };
        let (forward_msg, _) = Message::from_wire(value)?;
        let forward = try_parse_forward(&forward_msg)
            .ok_or_else(|| Error::Malformed(format!("message {} is not a valid forward", forward_msg.id)))?;
        debug!("forward {} for {}", forward_msg.id, forward.next);

        Ok(UnpackForwardResult {
            forwarded_msg: serde_json::to_string(&forward.forwarded_msg)?,
            next: forward.next,
            forward_msg,
            encrypted_to: key_ids(&keys),
        })
    }
}
