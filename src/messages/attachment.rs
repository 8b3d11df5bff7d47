use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub data: AttachmentData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_count: Option<u64>,
}

/// Attachment content, distinguished by which of `links`, `base64` or `json` is present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AttachmentData {
    Links(LinksData),
    Base64(Base64Data),
    Json(JsonData),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LinksData {
    pub links: Vec<String>,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jws: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Base64Data {
    pub base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jws: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JsonData {
    pub json: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jws: Option<Value>,
}

impl Attachment {
    fn with_data(data: AttachmentData) -> Self {
        Attachment {
            id: None,
            data,
            description: None,
            filename: None,
            media_type: None,
            format: None,
            lastmod_time: None,
            byte_count: None,
        }
    }

    pub fn json(json: Value) -> Self {
        Self::with_data(AttachmentData::Json(JsonData {
            json,
            hash: None,
            jws: None,
        }))
    }

    pub fn base64(base64: impl Into<String>) -> Self {
        Self::with_data(AttachmentData::Base64(Base64Data {
            base64: base64.into(),
            hash: None,
            jws: None,
        }))
    }

    pub fn links(links: Vec<String>, hash: impl Into<String>) -> Self {
        Self::with_data(AttachmentData::Links(LinksData {
            links,
            hash: hash.into(),
            jws: None,
        }))
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn media_type(mut self, media_type: &str) -> Self {
        self.media_type = Some(media_type.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
