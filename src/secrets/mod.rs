//! Private key counterpart of verification methods and the secrets resolver seam.
use serde_json::Value;

use crate::Result;

/// Private key bound to a verification method by `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Secret {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: SecretType,
    #[serde(flatten)]
    pub secret_material: SecretMaterial,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum SecretType {
    JsonWebKey2020,
    X25519KeyAgreementKey2019,
    X25519KeyAgreementKey2020,
    Ed25519VerificationKey2018,
    Ed25519VerificationKey2020,
    /// Any other type, kept as declared.
    Other(String),
}

impl SecretType {
    pub fn as_str(&self) -> &str {
        match self {
            SecretType::JsonWebKey2020 => "JsonWebKey2020",
            SecretType::X25519KeyAgreementKey2019 => "X25519KeyAgreementKey2019",
            SecretType::X25519KeyAgreementKey2020 => "X25519KeyAgreementKey2020",
            SecretType::Ed25519VerificationKey2018 => "Ed25519VerificationKey2018",
            SecretType::Ed25519VerificationKey2020 => "Ed25519VerificationKey2020",
            SecretType::Other(type_) => type_,
        }
    }
}

impl From<String> for SecretType {
    fn from(type_: String) -> Self {
        match type_.as_str() {
            "JsonWebKey2020" => SecretType::JsonWebKey2020,
            "X25519KeyAgreementKey2019" => SecretType::X25519KeyAgreementKey2019,
            "X25519KeyAgreementKey2020" => SecretType::X25519KeyAgreementKey2020,
            "Ed25519VerificationKey2018" => SecretType::Ed25519VerificationKey2018,
            "Ed25519VerificationKey2020" => SecretType::Ed25519VerificationKey2020,
            _ => SecretType::Other(type_),
        }
    }
}

impl From<SecretType> for String {
    fn from(type_: SecretType) -> Self {
        type_.as_str().to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SecretMaterial {
    #[serde(rename = "privateKeyJwk")]
    Jwk(Value),
    #[serde(rename = "privateKeyBase58")]
    Base58(String),
    #[serde(rename = "privateKeyMultibase")]
    Multibase(String),
}

impl SecretMaterial {
    pub(crate) fn format(&self) -> &'static str {
        match self {
            SecretMaterial::Jwk(_) => "JWK",
            SecretMaterial::Base58(_) => "Base58",
            SecretMaterial::Multibase(_) => "Multibase",
        }
    }
}

/// Access to private keys. Key storage is up to the application.
pub trait SecretsResolver: Send + Sync {
    /// Returns the secret with given DID URL, `Ok(None)` if it's not held.
    fn get_secret(&self, secret_id: &str) -> Result<Option<Secret>>;

    /// Returns the subset of `secret_ids` held by this resolver, preserving order.
    fn find_secrets(&self, secret_ids: &[String]) -> Result<Vec<String>>;
}

/// Holds nothing. Used where only public keys are looked up.
pub(crate) struct NoSecrets;

impl SecretsResolver for NoSecrets {
    fn get_secret(&self, _secret_id: &str) -> Result<Option<Secret>> {
        Ok(None)
    }

    fn find_secrets(&self, _secret_ids: &[String]) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Secrets resolver over a fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct ExampleSecretsResolver {
    known_secrets: Vec<Secret>,
}

impl ExampleSecretsResolver {
    pub fn new(known_secrets: Vec<Secret>) -> Self {
        ExampleSecretsResolver { known_secrets }
    }
}

impl SecretsResolver for ExampleSecretsResolver {
    fn get_secret(&self, secret_id: &str) -> Result<Option<Secret>> {
        Ok(self
            .known_secrets
            .iter()
            .find(|s| s.id == secret_id)
            .cloned())
    }

    fn find_secrets(&self, secret_ids: &[String]) -> Result<Vec<String>> {
        Ok(secret_ids
            .iter()
            .filter(|sid| self.known_secrets.iter().any(|s| &s.id == *sid))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_secrets_keeps_requested_order() -> Result<()> {
        // Arrange
        let secrets: Vec<Secret> = serde_json::from_str(
            r#"[
                {"id": "did:example:bob#key-2", "type": "JsonWebKey2020", "privateKeyJwk": {"kty": "OKP"}},
                {"id": "did:example:bob#key-1", "type": "JsonWebKey2020", "privateKeyJwk": {"kty": "OKP"}}
            ]"#,
        )?;
        let resolver = ExampleSecretsResolver::new(secrets);
        let requested = vec![
            "did:example:bob#key-1".to_string(),
            "did:example:bob#key-3".to_string(),
            "did:example:bob#key-2".to_string(),
        ];
        // Act
        let found = resolver.find_secrets(&requested)?;
        // Assert
        assert_eq!(found, vec!["did:example:bob#key-1", "did:example:bob#key-2"]);
        assert!(resolver.get_secret("did:example:bob#key-3")?.is_none());
        Ok(())
    }

    #[test]
    fn no_secrets_holds_nothing() -> Result<()> {
        let kids = vec!["did:example:bob#key-x25519-1".to_string()];
        assert!(NoSecrets.find_secrets(&kids)?.is_empty());
        assert!(NoSecrets.get_secret(&kids[0])?.is_none());
        Ok(())
    }

    #[test]
    fn unknown_type_and_material_parse() -> Result<()> {
        let secret: Secret = serde_json::from_str(
            r#"{"id": "did:example:bob#key-1", "type": "Bls12381G2Key2020", "privateKeyBase58": "3x"}"#,
        )?;
        assert_eq!(secret.type_, SecretType::Other("Bls12381G2Key2020".into()));
        assert_eq!(secret.secret_material.format(), "Base58");
        Ok(())
    }
}
