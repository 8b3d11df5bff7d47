use std::sync::Arc;

use super::pack_from_prior;
use crate::{
    dids::DidResolver,
    messages::Message,
    secrets::SecretsResolver,
    selectors::SenderKeySelector,
    DidComm,
    Result,
};

#[derive(Clone, Default)]
pub struct PackPlaintextParams {
    /// Key to sign `from_prior` with. The first authentication key of
    /// `from_prior.iss` with a secret is used when absent.
    pub from_prior_issuer_kid: Option<String>,
    pub did_resolver: Option<Arc<dyn DidResolver>>,
    pub secrets_resolver: Option<Arc<dyn SecretsResolver>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackPlaintextResult {
    pub packed_message: String,
    pub from_prior_issuer_kid: Option<String>,
}

impl DidComm {
    /// Serializes `msg` as plaintext DIDComm message. Nothing is signed or
    /// encrypted except `from_prior`.
    pub fn pack_plaintext(&self, msg: &Message, params: &PackPlaintextParams) -> Result<PackPlaintextResult> {
        msg.validate()?;
        let (did_resolver, secrets_resolver) = self.resolvers(&params.did_resolver, &params.secrets_resolver);
        let selector = SenderKeySelector::new(did_resolver, secrets_resolver);

        let (from_prior_jwt, from_prior_issuer_kid) =
            pack_from_prior(msg, params.from_prior_issuer_kid.as_deref(), &selector)?;
        let packed_message = msg.to_wire(from_prior_jwt.as_deref())?;
        debug!("packed plaintext message {}", msg.id);

        Ok(PackPlaintextResult {
            packed_message,
            from_prior_issuer_kid,
        })
    }
}
