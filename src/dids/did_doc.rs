use serde_json::Value;

use crate::{Error, Result};

/// DID Document restricted to what DIDComm needs: key relationships,
/// verification methods and DIDComm services.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DidDoc {
    #[serde(rename = "id")]
    pub did: String,

    /// Ids of verification methods usable for key agreement, in declared order.
    #[serde(default, rename = "keyAgreement")]
    pub key_agreements: Vec<String>,

    /// Ids of verification methods usable for signing, in declared order.
    #[serde(default, rename = "authentication")]
    pub authentications: Vec<String>,

    #[serde(default, rename = "verificationMethod")]
    pub verification_methods: Vec<VerificationMethod>,

    #[serde(default, rename = "service")]
    pub services: Vec<Service>,
}

impl DidDoc {
    /// Looks up verification method by its DID URL.
    pub fn verification_method(&self, id: &str) -> Result<&VerificationMethod> {
        self.verification_methods
            .iter()
            .find(|vm| vm.id == id)
            .ok_or_else(|| Error::DidUrlNotFound(id.to_string()))
    }

    /// Key agreement verification methods in declared order.
    pub fn key_agreement_methods(&self) -> Result<Vec<&VerificationMethod>> {
        self.key_agreements
            .iter()
            .map(|kid| self.verification_method(kid))
            .collect()
    }

    /// DIDComm messaging services only.
    pub fn didcomm_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.type_ == DIDCOMM_SERVICE_TYPE)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: VerificationMethodType,
    pub controller: String,
    #[serde(flatten)]
    pub verification_material: VerificationMaterial,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum VerificationMethodType {
    JsonWebKey2020,
    X25519KeyAgreementKey2019,
    X25519KeyAgreementKey2020,
    Ed25519VerificationKey2018,
    Ed25519VerificationKey2020,
    /// Any other type, kept as declared.
    Other(String),
}

impl VerificationMethodType {
    pub fn as_str(&self) -> &str {
        match self {
            VerificationMethodType::JsonWebKey2020 => "JsonWebKey2020",
            VerificationMethodType::X25519KeyAgreementKey2019 => "X25519KeyAgreementKey2019",
            VerificationMethodType::X25519KeyAgreementKey2020 => "X25519KeyAgreementKey2020",
            VerificationMethodType::Ed25519VerificationKey2018 => "Ed25519VerificationKey2018",
            VerificationMethodType::Ed25519VerificationKey2020 => "Ed25519VerificationKey2020",
            VerificationMethodType::Other(type_) => type_,
        }
    }
}

impl From<String> for VerificationMethodType {
    fn from(type_: String) -> Self {
        match type_.as_str() {
            "JsonWebKey2020" => VerificationMethodType::JsonWebKey2020,
            "X25519KeyAgreementKey2019" => VerificationMethodType::X25519KeyAgreementKey2019,
            "X25519KeyAgreementKey2020" => VerificationMethodType::X25519KeyAgreementKey2020,
            "Ed25519VerificationKey2018" => VerificationMethodType::Ed25519VerificationKey2018,
            "Ed25519VerificationKey2020" => VerificationMethodType::Ed25519VerificationKey2020,
            _ => VerificationMethodType::Other(type_),
        }
    }
}

impl From<VerificationMethodType> for String {
    fn from(type_: VerificationMethodType) -> Self {
        type_.as_str().to_string()
    }
}

/// Public key material in one of the encodings DID Documents use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum VerificationMaterial {
    #[serde(rename = "publicKeyJwk")]
    Jwk(Value),
    #[serde(rename = "publicKeyBase58")]
    Base58(String),
    #[serde(rename = "publicKeyMultibase")]
    Multibase(String),
}

impl VerificationMaterial {
    pub(crate) fn format(&self) -> &'static str {
        match self {
            VerificationMaterial::Jwk(_) => "JWK",
            VerificationMaterial::Base58(_) => "Base58",
            VerificationMaterial::Multibase(_) => "Multibase",
        }
    }
}

pub const DIDCOMM_SERVICE_TYPE: &str = "DIDCommMessaging";
pub const PROFILE_DIDCOMM_V2: &str = "didcomm/v2";

/// DIDComm messaging service entry.
/// `service_endpoint` is either a transport URI or the DID of a mediator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub service_endpoint: String,
    #[serde(default)]
    pub routing_keys: Vec<String>,
    #[serde(default)]
    pub accept: Vec<String>,
}

impl Service {
    /// Services which declare no profiles at all are treated as accepting `didcomm/v2`.
    pub fn accepts_didcomm_v2(&self) -> bool {
        self.accept.is_empty() || self.accept.iter().any(|p| p == PROFILE_DIDCOMM_V2)
    }
}
