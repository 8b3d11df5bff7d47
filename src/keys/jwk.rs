/// JSON Web Key restricted to the elliptic curve shapes DIDComm uses
/// (`OKP` and `EC`). `d` is only present for private keys.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Jwk {
    pub kty: String,
    pub crv: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl Jwk {
    /// Creates public `epk` jwk entry with required properties.
    /// Correctness is not verified by this constructor and totally relies on caller.
    pub fn ephemeral(kty: &str, crv: &str, x: String, y: Option<String>) -> Self {
        Jwk {
            kty: kty.to_string(),
            crv: crv.to_string(),
            x,
            y,
            d: None,
        }
    }

    /// Same key without private part.
    pub fn to_public(&self) -> Self {
        Jwk {
            d: None,
            ..self.clone()
        }
    }
}
