use std::collections::HashMap;

use serde_json::{json, Value};

use crate::{
    dids::{resolve_required, DidResolver, Service},
    jose::{anoncrypt::anoncrypt, AnonCryptAlg},
    messages::{Attachment, AttachmentData, Message},
    secrets::NoSecrets,
    selectors::SenderKeySelector,
    util::did_url::{did_of, parse},
    Error,
    Result,
};

pub const FORWARD_MSG_TYPE: &str = "https://didcomm.org/routing/2.0/forward";

/// Where the outermost packed envelope must be delivered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceMetadata {
    /// Id of the recipient DIDComm service.
    pub id: String,
    /// Transport endpoint of the first hop.
    pub service_endpoint: String,
}

/// Forward message with its `next` hint and the opaque message it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedForward {
    pub msg: Message,
    pub next: String,
    pub forwarded_msg: Value,
}

/// `Some` if `msg` is a well formed `routing/2.0/forward` message.
pub fn try_parse_forward(msg: &Message) -> Option<ParsedForward> {
    if msg.m_type != FORWARD_MSG_TYPE {
        return None;
    }
    let next = match msg.body.get("next").and_then(Value::as_str) {
        Some(next) => next.to_string(),
        None => {
            warn!("forward message {} has no `next`", msg.id);
            return None;
        }
    };
    let forwarded_msg = match msg.attachments.as_deref() {
        Some([attachment]) => match &attachment.data {
            AttachmentData::Json(data) => data.json.clone(),
            AttachmentData::Base64(data) => {
                let decoded = crate::util::base64helper::from_base64(&data.base64).ok()?;
                serde_json::from_slice(&decoded).ok()?
            }
            AttachmentData::Links(_) => return None,
        },
        _ => {
            warn!("forward message {} must carry exactly one attachment", msg.id);
            return None;
        }
    };
    Some(ParsedForward {
        msg: msg.clone(),
        next,
        forwarded_msg,
    })
}

/// Chain of DIDComm services from the first hop to the service of `to`.
/// Empty if `to` declares no service. At most one mediator indirection
/// (a service endpoint which is a DID) is followed.
pub fn resolve_did_services_chain(
    did_resolver: &dyn DidResolver,
    to: &str,
    service_id: Option<&str>,
) -> Result<Vec<Service>> {
    let to_did = did_of(to);
    let to_doc = resolve_required(did_resolver, to_did)?;
    let service = match find_service(&to_doc.services, to_did, service_id)? {
        Some(service) => service,
        None => return Ok(vec![]),
    };
    if !is_did(&service.service_endpoint) {
        return Ok(vec![service]);
    }

    let mediator_did = service.service_endpoint.clone();
    debug!("{} is served by mediator {}", to_did, mediator_did);
    let mediator_doc = resolve_required(did_resolver, &mediator_did)?;
    let mediator_service = find_service(&mediator_doc.services, &mediator_did, None)?.ok_or_else(|| {
        Error::DidCommService {
            did: mediator_did.clone(),
            reason: "mediator has no DIDComm service".into(),
        }
    })?;
    if is_did(&mediator_service.service_endpoint) {
        return Err(Error::DidCommService {
            did: mediator_did,
            reason: "mediator defines alternative endpoint recursively".into(),
        });
    }
    Ok(vec![mediator_service, service])
}

fn find_service(services: &[Service], did: &str, service_id: Option<&str>) -> Result<Option<Service>> {
    match service_id {
        Some(id) => {
            let service = services.iter().find(|s| s.id == id).ok_or_else(|| Error::DidCommService {
                did: did.to_string(),
                reason: format!("service '{}' not found", id),
            })?;
            if !service.accepts_didcomm_v2() {
                return Err(Error::DidCommService {
                    did: did.to_string(),
                    reason: format!("service '{}' does not accept didcomm/v2 profile", id),
                });
            }
            Ok(Some(service.clone()))
        }
        None => Ok(services
            .iter()
            .filter(|s| s.type_ == crate::dids::DIDCOMM_SERVICE_TYPE)
            .find(|s| s.accepts_didcomm_v2())
            .cloned()),
    }
}

fn is_did(endpoint: &str) -> bool {
    endpoint.starts_with("did:") && parse(endpoint).is_ok()
}

/// Wraps packed `msg` into forward messages, one per routing key.
/// The innermost forward names `to` as `next`, the outermost one is
/// encrypted for `routing_keys[0]`.
pub fn wrap_in_forward(
    msg: &str,
    headers: Option<&HashMap<String, Value>>,
    to: &str,
    routing_keys: &[String],
    enc_alg_anon: &AnonCryptAlg,
    did_resolver: &dyn DidResolver,
) -> Result<String> {
    let selector = SenderKeySelector::new(did_resolver, &NoSecrets);

    let mut nexts: Vec<&str> = routing_keys.iter().skip(1).map(String::as_str).collect();
    nexts.push(to);

    let mut packed = msg.to_string();
    for (routing_key, next) in routing_keys.iter().rev().zip(nexts.into_iter().rev()) {
        let forward = build_forward(&packed, next, headers)?;
        let keys = selector.find_anon_crypt_keys(routing_key)?;
        packed = anoncrypt(&forward.to_wire(None)?, enc_alg_anon, &keys)?.0;
        trace!("wrapped forward to {} for {}", next, routing_key);
    }
    Ok(packed)
}

fn build_forward(packed: &str, next: &str, headers: Option<&HashMap<String, Value>>) -> Result<Message> {
    let forwarded: Value = serde_json::from_str(packed)?;
    let mut forward =
        Message::new(FORWARD_MSG_TYPE, json!({ "next": next })).attachment(Attachment::json(forwarded));
    if let Some(headers) = headers {
        for (key, value) in headers {
            forward = forward.header(key, value.clone());
        }
    }
    forward.validate()?;
    Ok(forward)
}
