use std::sync::Arc;

use super::pack_from_prior;
use crate::{
    dids::DidResolver,
    jose::jws,
    messages::Message,
    secrets::SecretsResolver,
    selectors::SenderKeySelector,
    util::did_url::{did_of, validate_did_or_did_url},
    DidComm,
    Error,
    Result,
};

#[derive(Clone, Default)]
pub struct PackSignedParams {
    pub from_prior_issuer_kid: Option<String>,
    pub did_resolver: Option<Arc<dyn DidResolver>>,
    pub secrets_resolver: Option<Arc<dyn SecretsResolver>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackSignedResult {
    pub packed_message: String,
    /// Key which actually signed the message.
    pub sign_by_kid: String,
    pub from_prior_issuer_kid: Option<String>,
}

impl DidComm {
    /// Produces a non-repudiable signed message.
    ///
    /// `sign_by` is a DID (first authentication key with a secret is used)
    /// or a DID URL of a concrete key. Its DID must be `msg.from`.
    pub fn pack_signed(&self, msg: &Message, sign_by: &str, params: &PackSignedParams) -> Result<PackSignedResult> {
        msg.validate()?;
        validate_sign_by(msg, sign_by)?;
        let (did_resolver, secrets_resolver) = self.resolvers(&params.did_resolver, &params.secrets_resolver);
        let selector = SenderKeySelector::new(did_resolver, secrets_resolver);

        let (from_prior_jwt, from_prior_issuer_kid) =
            pack_from_prior(msg, params.from_prior_issuer_kid.as_deref(), &selector)?;
        let payload = msg.to_wire(from_prior_jwt.as_deref())?;

        let key = selector.find_signing_key(sign_by)?;
        let packed_message = jws::sign(payload.as_bytes(), &key)?;
        debug!("signed message {} by {}", msg.id, key.id);

        Ok(PackSignedResult {
            packed_message,
            sign_by_kid: key.id,
            from_prior_issuer_kid,
        })
    }
}

pub(crate) fn validate_sign_by(msg: &Message, sign_by: &str) -> Result<()> {
    validate_did_or_did_url(sign_by, "sign_by")?;
    if msg.from.as_deref() != Some(did_of(sign_by)) {
        return Err(Error::IllegalArgument(format!(
            "`message.from` value is not equal to `sign_by` DID '{}'",
            did_of(sign_by)
        )));
    }
    Ok(())
}
