use crate::{
    dids::{resolve_required, DidResolver},
    keys::Key,
    secrets::SecretsResolver,
    util::did_url::{did_of, is_did_url},
    Error,
    Result,
};

/// Picks our private keys and the recipients' public keys while packing.
/// Candidates are always tried in DID Doc declaration order.
pub struct SenderKeySelector<'a> {
    did_resolver: &'a dyn DidResolver,
    secrets_resolver: &'a dyn SecretsResolver,
}

impl<'a> SenderKeySelector<'a> {
    pub fn new(did_resolver: &'a dyn DidResolver, secrets_resolver: &'a dyn SecretsResolver) -> Self {
        SenderKeySelector {
            did_resolver,
            secrets_resolver,
        }
    }

    /// Private key for signing. A bare DID selects the first `authentication`
    /// entry we hold a secret for.
    pub fn find_signing_key(&self, sign_from: &str) -> Result<Key> {
        let did_doc = resolve_required(self.did_resolver, did_of(sign_from))?;
        let kid = if is_did_url(sign_from) {
            did_doc.verification_method(sign_from)?;
            sign_from.to_string()
        } else {
            if did_doc.authentications.is_empty() {
                return Err(Error::DidDoc(format!(
                    "no authentication verification methods in '{}'",
                    sign_from
                )));
            }
            self.secrets_resolver
                .find_secrets(&did_doc.authentications)?
                .into_iter()
                .next()
                .ok_or_else(|| Error::SecretNotFound(sign_from.to_string()))?
        };
        trace!("signing key {} selected for {}", kid, sign_from);
        self.private_key(&kid)
    }

    /// Sender private key and same-curve recipient public keys for ECDH-1PU.
    ///
    /// A bare `from` DID tries each of its key agreement keys we hold secrets
    /// for and stops at the first one with a non-empty recipient set.
    pub fn find_auth_crypt_keys(&self, from: &str, to: &str) -> Result<(Key, Vec<Key>)> {
        let from_doc = resolve_required(self.did_resolver, did_of(from))?;
        let recipients = self.find_recipient_keys(to)?;

        let sender_kids = if is_did_url(from) {
            if !from_doc.key_agreements.iter().any(|kid| kid == from) {
                return Err(Error::DidUrlNotFound(from.to_string()));
            }
            vec![from.to_string()]
        } else {
            let held = self.secrets_resolver.find_secrets(&from_doc.key_agreements)?;
            if held.is_empty() {
                return Err(Error::SecretNotFound(format!(
                    "no key agreement secrets for '{}'",
                    from
                )));
            }
            held
        };

        for kid in &sender_kids {
            let sender = self.private_key(kid)?;
            let compatible: Vec<Key> = recipients
                .iter()
                .filter(|key| key.curve == sender.curve)
                .cloned()
                .collect();
            if !compatible.is_empty() {
                trace!("authcrypt from {} to {:?}", sender.id, compatible.iter().map(|k| &k.id).collect::<Vec<_>>());
                return Ok((sender, compatible));
            }
        }

        Err(Error::IncompatibleCrypto(format!(
            "no common key agreement curve between '{}' and '{}'",
            from, to
        )))
    }

    /// Recipient public keys for ECDH-ES. A bare DID selects all key
    /// agreement keys on the curve of the first one.
    pub fn find_anon_crypt_keys(&self, to: &str) -> Result<Vec<Key>> {
        let recipients = self.find_recipient_keys(to)?;
        let curve = recipients[0].curve;
        Ok(recipients.into_iter().filter(|key| key.curve == curve).collect())
    }

    /// All key agreement keys of `to`, or the single one it names. Never empty.
    fn find_recipient_keys(&self, to: &str) -> Result<Vec<Key>> {
        let to_doc = resolve_required(self.did_resolver, did_of(to))?;
        if is_did_url(to) {
            if !to_doc.key_agreements.iter().any(|kid| kid == to) {
                return Err(Error::DidUrlNotFound(to.to_string()));
            }
            return Ok(vec![Key::from_verification_method(to_doc.verification_method(to)?)?]);
        }
        if to_doc.key_agreements.is_empty() {
            return Err(Error::DidDoc(format!("no key agreement verification methods in '{}'", to)));
        }
        to_doc
            .key_agreement_methods()?
            .into_iter()
            .map(Key::from_verification_method)
            .collect()
    }

    fn private_key(&self, kid: &str) -> Result<Key> {
        let secret = self
            .secrets_resolver
            .get_secret(kid)?
            .ok_or_else(|| Error::SecretNotFound(kid.to_string()))?;
        Key::from_secret(&secret)
    }
}
