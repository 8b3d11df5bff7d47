/// DIDComm media types, used as `typ` of plaintext messages and of the
/// protected headers of signed and encrypted envelopes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    #[serde(rename = "application/didcomm-plain+json")]
    DidCommRaw,
    #[serde(rename = "application/didcomm-signed+json")]
    DidCommJws,
    #[serde(rename = "application/didcomm-encrypted+json")]
    DidCommJwe,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::DidCommRaw => "application/didcomm-plain+json",
            MessageType::DidCommJws => "application/didcomm-signed+json",
            MessageType::DidCommJwe => "application/didcomm-encrypted+json",
        }
    }
}

impl Default for MessageType {
    fn default() -> Self {
        MessageType::DidCommRaw
    }
}
