use std::{collections::HashMap, sync::Arc};

use serde_json::Value;

use super::{pack_from_prior, signed::validate_sign_by};
use crate::{
    dids::DidResolver,
    jose::{anoncrypt::anoncrypt, authcrypt::authcrypt, jws, AnonCryptAlg, AuthCryptAlg},
    messages::Message,
    protocols::routing::{resolve_did_services_chain, wrap_in_forward, ServiceMetadata},
    secrets::SecretsResolver,
    selectors::SenderKeySelector,
    util::did_url::{did_of, validate_did_or_did_url},
    DidComm,
    Error,
    Result,
};

#[derive(Clone)]
pub struct PackEncryptedParams {
    /// Hides sender identity by wrapping the authcrypted message in anoncrypt.
    pub protect_sender: bool,
    /// Wraps the message in forward envelopes when the recipient service
    /// declares routing keys.
    pub forward: bool,
    /// Extra headers of the produced forward messages.
    pub forward_headers: Option<HashMap<String, Value>>,
    /// Recipient service to use. First `didcomm/v2` service when absent.
    pub forward_service_id: Option<String>,
    pub from_prior_issuer_kid: Option<String>,
    pub enc_alg_auth: AuthCryptAlg,
    pub enc_alg_anon: AnonCryptAlg,
    pub did_resolver: Option<Arc<dyn DidResolver>>,
    pub secrets_resolver: Option<Arc<dyn SecretsResolver>>,
}

impl Default for PackEncryptedParams {
    fn default() -> Self {
        PackEncryptedParams {
            protect_sender: false,
            forward: true,
            forward_headers: None,
            forward_service_id: None,
            from_prior_issuer_kid: None,
            enc_alg_auth: AuthCryptAlg::default(),
            enc_alg_anon: AnonCryptAlg::default(),
            did_resolver: None,
            secrets_resolver: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackEncryptedResult {
    pub packed_message: String,
    /// Recipient keys the message was encrypted for.
    pub to_kids: Vec<String>,
    /// Sender key of authcrypt, `None` for anoncrypt.
    pub from_kid: Option<String>,
    pub sign_by_kid: Option<String>,
    pub from_prior_issuer_kid: Option<String>,
    /// Set if the message must be delivered through the recipient's
    /// DIDComm service.
    pub service_metadata: Option<ServiceMetadata>,
}

impl DidComm {
    /// Produces an encrypted message for `to`.
    ///
    /// With `from` the message is authcrypted (ECDH-1PU), otherwise it is
    /// anoncrypted (ECDH-ES). `sign_by` additionally signs the plaintext
    /// before encryption. `to`, `from` and `sign_by` are DIDs or DID URLs
    /// of concrete keys.
    pub fn pack_encrypted(
        &self,
        msg: &Message,
        to: &str,
        from: Option<&str>,
        sign_by: Option<&str>,
        params: &PackEncryptedParams,
    ) -> Result<PackEncryptedResult> {
        validate(msg, to, from, sign_by)?;
        let (did_resolver, secrets_resolver) = self.resolvers(&params.did_resolver, &params.secrets_resolver);
        let selector = SenderKeySelector::new(did_resolver, secrets_resolver);

        let (from_prior_jwt, from_prior_issuer_kid) =
            pack_from_prior(msg, params.from_prior_issuer_kid.as_deref(), &selector)?;
        let mut payload = msg.to_wire(from_prior_jwt.as_deref())?;

        let sign_by_kid = match sign_by {
            Some(sign_by) => {
                let key = selector.find_signing_key(sign_by)?;
                payload = jws::sign(payload.as_bytes(), &key)?;
                Some(key.id)
            }
            None => None,
        };

        let (mut packed_message, to_kids, from_kid) = match from {
            Some(from) => {
                let (from_key, to_keys) = selector.find_auth_crypt_keys(from, to)?;
                let (packed, to_kids, from_kid) = authcrypt(&payload, &params.enc_alg_auth, &from_key, &to_keys)?;
                let packed = if params.protect_sender {
                    trace!("protecting sender {}", from_kid);
                    anoncrypt(&packed, &params.enc_alg_anon, &to_keys)?.0
                } else {
                    packed
                };
                (packed, to_kids, Some(from_kid))
            }
            None => {
                let to_keys = selector.find_anon_crypt_keys(to)?;
                let (packed, to_kids) = anoncrypt(&payload, &params.enc_alg_anon, &to_keys)?;
                (packed, to_kids, None)
            }
        };
        debug!("encrypted message {} for {:?}", msg.id, to_kids);

        let mut service_metadata = None;
        if params.forward {
            let services = resolve_did_services_chain(did_resolver, to, params.forward_service_id.as_deref())?;
            if let (Some(first), Some(last)) = (services.first(), services.last()) {
                let routing_keys: Vec<String> = services
                    .iter()
                    .flat_map(|service| service.routing_keys.iter().cloned())
                    .collect();
                if routing_keys.is_empty() && services.len() > 1 {
                    return Err(Error::DidCommService {
                        did: did_of(to).to_string(),
                        reason: "no routing keys found for mediated service".into(),
                    });
                }
                if !routing_keys.is_empty() {
                    packed_message = wrap_in_forward(
                        &packed_message,
                        params.forward_headers.as_ref(),
                        to,
                        &routing_keys,
                        &params.enc_alg_anon,
                        did_resolver,
                    )?;
                    debug!("message {} wrapped in {} forward(s)", msg.id, routing_keys.len());
                }
                service_metadata = Some(ServiceMetadata {
                    id: last.id.clone(),
                    service_endpoint: first.service_endpoint.clone(),
                });
            }
        }

        Ok(PackEncryptedResult {
            packed_message,
            to_kids,
            from_kid,
            sign_by_kid,
            from_prior_issuer_kid,
            service_metadata,
        })
    }
}

fn validate(msg: &Message, to: &str, from: Option<&str>, sign_by: Option<&str>) -> Result<()> {
    msg.validate()?;
    validate_did_or_did_url(to, "to")?;
    if let Some(msg_to) = &msg.to {
        if !msg_to.iter().any(|did| did == did_of(to)) {
            return Err(Error::IllegalArgument(format!(
                "`message.to` value does not contain `to` DID '{}'",
                did_of(to)
            )));
        }
    }
    if let Some(from) = from {
        validate_did_or_did_url(from, "from")?;
        if msg.from.as_deref() != Some(did_of(from)) {
            return Err(Error::IllegalArgument(format!(
                "`message.from` value is not equal to `from` DID '{}'",
                did_of(from)
            )));
        }
    }
    if let Some(sign_by) = sign_by {
        validate_sign_by(msg, sign_by)?;
    }
    Ok(())
}
