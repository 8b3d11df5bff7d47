use std::collections::HashMap;

use serde_json::Value;

use super::{Attachment, FromPrior, MessageType};
use crate::{util::did_url::validate_did, Error, Result};

/// Header names which can't be used as extra headers.
pub const RESERVED_HEADERS: [&str; 14] = [
    "id",
    "typ",
    "type",
    "body",
    "from",
    "to",
    "thid",
    "pthid",
    "created_time",
    "expires_time",
    "from_prior",
    "attachments",
    "please_ack",
    "ack",
];

/// DIDComm plaintext message.
/// [Specification](https://identity.foundation/didcomm-messaging/spec/#message-structure)
///
/// `from_prior` holds the claims here. Packing replaces them by a signed JWT
/// on the wire and unpacking verifies that JWT and restores the claims.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,

    #[serde(default)]
    pub typ: MessageType,

    #[serde(rename = "type")]
    pub m_type: String,

    pub body: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pthid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_time: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_prior: Option<FromPrior>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub please_ack: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack: Option<String>,

    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    pub extra_headers: HashMap<String, Value>,
}

impl Message {
    /// New message of protocol `m_type` with random `id`.
    pub fn new(m_type: &str, body: Value) -> Self {
        Message {
            id: Message::gen_random_id(),
            typ: MessageType::DidCommRaw,
            m_type: m_type.to_string(),
            body,
            from: None,
            to: None,
            thid: None,
            pthid: None,
            created_time: None,
            expires_time: None,
            from_prior: None,
            attachments: None,
            please_ack: None,
            ack: None,
            extra_headers: HashMap::new(),
        }
    }

    /// Generates random `id`
    pub fn gen_random_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn to(mut self, to: &[&str]) -> Self {
        self.to = Some(to.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn thid(mut self, thid: &str) -> Self {
        self.thid = Some(thid.to_string());
        self
    }

    pub fn pthid(mut self, pthid: &str) -> Self {
        self.pthid = Some(pthid.to_string());
        self
    }

    pub fn created_time(mut self, created_time: u64) -> Self {
        self.created_time = Some(created_time);
        self
    }

    pub fn expires_time(mut self, expires_time: u64) -> Self {
        self.expires_time = Some(expires_time);
        self
    }

    pub fn from_prior(mut self, from_prior: FromPrior) -> Self {
        self.from_prior = Some(from_prior);
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    pub fn please_ack(mut self, please_ack: bool) -> Self {
        self.please_ack = Some(please_ack);
        self
    }

    pub fn ack(mut self, ack: &str) -> Self {
        self.ack = Some(ack.to_string());
        self
    }

    /// Adds (or updates) custom header. Reserved names are rejected by [`Message::validate`].
    pub fn header(mut self, key: &str, value: Value) -> Self {
        self.extra_headers.insert(key.to_string(), value);
        self
    }

    /// Checks the message can be sent: `from`/`to` are DIDs without fragment,
    /// extra headers don't shadow reserved ones, `from_prior.sub` is `from`.
    pub fn validate(&self) -> Result<()> {
        if self.typ != MessageType::DidCommRaw {
            return Err(Error::IllegalArgument(format!(
                "`typ` must be {}",
                MessageType::DidCommRaw.as_str()
            )));
        }
        if !self.body.is_object() {
            return Err(Error::IllegalArgument("`body` must be a JSON object".into()));
        }
        if let Some(from) = &self.from {
            validate_did(from, "from")?;
        }
        for to in self.to.iter().flatten() {
            validate_did(to, "to")?;
        }
        if let Some(reserved) = self
            .extra_headers
            .keys()
            .find(|key| RESERVED_HEADERS.contains(&key.as_str()))
        {
            return Err(Error::IllegalArgument(format!(
                "extra header '{}' collides with a reserved header",
                reserved
            )));
        }
        if let Some(from_prior) = &self.from_prior {
            from_prior.validate()?;
            if let Some(from) = &self.from {
                if &from_prior.sub != from {
                    return Err(Error::IllegalArgument(
                        "from_prior `sub` value is not equal to message `from` value".into(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Wire JSON with `from_prior` carried as `from_prior_jwt`.
    pub(crate) fn to_wire(&self, from_prior_jwt: Option<&str>) -> Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let (Some(jwt), Some(object)) = (from_prior_jwt, value.as_object_mut()) {
            object.insert("from_prior".into(), Value::String(jwt.to_string()));
        }
        Ok(serde_json::to_string(&value)?)
    }

    /// Parses wire JSON. The still unverified `from_prior` JWT is returned
    /// separately and the message field is left empty.
    pub(crate) fn from_wire(value: Value) -> Result<(Message, Option<String>)> {
        let mut value = value;
        let jwt = match value.as_object_mut().and_then(|object| object.remove("from_prior")) {
            None | Some(Value::Null) => None,
            Some(Value::String(jwt)) => Some(jwt),
            Some(_) => {
                return Err(Error::Malformed("from_prior must be a signed JWT".into()));
            }
        };
        let message: Message = serde_json::from_value(value)
            .map_err(|e| Error::Malformed(format!("unable to parse plaintext message: {}", e)))?;
        Ok((message, jwt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{uuid::UUIDv4, Fake};
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() -> Result<()> {
        // Arrange
        let id: String = UUIDv4.fake();
        let message = Message::new("https://example.com/protocols/lets_do_lunch/1.0/proposal", json!({}))
            .id(&id)
            .from("did:example:alice");
        // Act
        let value = serde_json::to_value(&message)?;
        // Assert
        assert_eq!(
            value,
            json!({
                "id": id,
                "typ": "application/didcomm-plain+json",
                "type": "https://example.com/protocols/lets_do_lunch/1.0/proposal",
                "body": {},
                "from": "did:example:alice"
            })
        );
        Ok(())
    }

    #[test]
    fn extra_headers_round_trip() -> Result<()> {
        let message = Message::new("example/1.0", json!({"a": 1}))
            .to(&["did:example:bob"])
            .header("example-header-1", json!("example-header-1-value"))
            .please_ack(true);
        let parsed: Message = serde_json::from_str(&serde_json::to_string(&message)?)?;
        assert_eq!(parsed, message);
        assert_eq!(parsed.extra_headers["example-header-1"], json!("example-header-1-value"));
        Ok(())
    }

    #[test]
    fn validation_rules() {
        let base = Message::new("example/1.0", json!({}));
        assert!(base.clone().from("did:example:alice").to(&["did:example:bob"]).validate().is_ok());
        assert!(matches!(
            base.clone().from("did:example:alice#key-1").validate(),
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            base.clone().to(&["did:example:bob", "did:example:bob#key-1"]).validate(),
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            base.clone().header("thid", json!("x")).validate(),
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            Message::new("example/1.0", json!([1])).validate(),
            Err(Error::IllegalArgument(_))
        ));
        assert!(matches!(
            base.from("did:example:alice")
                .from_prior(FromPrior::new("did:example:charlie", "did:example:bob"))
                .validate(),
            Err(Error::IllegalArgument(_))
        ));
    }

    #[test]
    fn wire_form_carries_jwt() -> Result<()> {
        let message = Message::new("example/1.0", json!({}))
            .from("did:example:alice")
            .from_prior(FromPrior::new("did:example:charlie", "did:example:alice"));
        let wire = message.to_wire(Some("a.b.c"))?;
        let (parsed, jwt) = Message::from_wire(serde_json::from_str(&wire)?)?;
        assert_eq!(jwt.as_deref(), Some("a.b.c"));
        assert!(parsed.from_prior.is_none());

        let unsigned = serde_json::to_value(&message)?;
        assert!(matches!(Message::from_wire(unsigned), Err(Error::Malformed(_))));
        Ok(())
    }
}
