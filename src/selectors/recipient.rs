use crate::{
    dids::{resolve_required, DidResolver},
    keys::Key,
    secrets::SecretsResolver,
    util::did_url::{did_of, is_did_url},
    Error,
    Result,
};

/// Picks keys named by a received message while unpacking.
pub struct RecipientKeySelector<'a> {
    did_resolver: &'a dyn DidResolver,
    secrets_resolver: &'a dyn SecretsResolver,
}

impl<'a> RecipientKeySelector<'a> {
    pub fn new(did_resolver: &'a dyn DidResolver, secrets_resolver: &'a dyn SecretsResolver) -> Self {
        RecipientKeySelector {
            did_resolver,
            secrets_resolver,
        }
    }

    /// Public key of signature `kid`.
    pub fn find_verification_key(&self, kid: &str) -> Result<Key> {
        if !is_did_url(kid) {
            return Err(Error::Malformed(format!("signer kid '{}' is not a DID URL", kid)));
        }
        let did_doc = resolve_required(self.did_resolver, did_of(kid))?;
        Key::from_verification_method(did_doc.verification_method(kid)?)
    }

    /// Sender public key named by `skid` and our private keys among `to_kids`
    /// on the same curve.
    pub fn find_auth_crypt_keys(&self, from_kid: &str, to_kids: &[String]) -> Result<(Key, Vec<Key>)> {
        if !is_did_url(from_kid) {
            return Err(Error::Malformed(format!("skid '{}' is not a DID URL", from_kid)));
        }
        let from_doc = resolve_required(self.did_resolver, did_of(from_kid))?;
        let sender = Key::from_verification_method(from_doc.verification_method(from_kid)?)?;

        let recipients: Vec<Key> = self
            .find_private_keys(to_kids)?
            .into_iter()
            .filter(|key| key.curve == sender.curve)
            .collect();
        if recipients.is_empty() {
            return Err(Error::IncompatibleCrypto(format!(
                "no recipient secrets on curve {} of sender key '{}'",
                sender.curve.as_str(),
                from_kid
            )));
        }
        Ok((sender, recipients))
    }

    /// Our private keys among `to_kids`.
    pub fn find_anon_crypt_keys(&self, to_kids: &[String]) -> Result<Vec<Key>> {
        self.find_private_keys(to_kids)
    }

    /// `true` if we hold a secret for the forward `next`, which is a key or a DID.
    pub fn has_keys_for_forward_next(&self, next: &str) -> Result<bool> {
        let kids = if is_did_url(next) {
            vec![next.to_string()]
        } else {
            match self.did_resolver.resolve(next)? {
                Some(did_doc) => did_doc.key_agreements,
                None => return Ok(false),
            }
        };
        Ok(!self.secrets_resolver.find_secrets(&kids)?.is_empty())
    }

    fn find_private_keys(&self, kids: &[String]) -> Result<Vec<Key>> {
        let held = self.secrets_resolver.find_secrets(kids)?;
        if held.is_empty() {
            return Err(Error::SecretNotFound(format!("none of {:?}", kids)));
        }
        held.iter()
            .map(|kid| {
                let secret = self
                    .secrets_resolver
                    .get_secret(kid)?
                    .ok_or_else(|| Error::SecretNotFound(kid.clone()))?;
                Key::from_secret(&secret)
            })
            .collect()
    }
}
