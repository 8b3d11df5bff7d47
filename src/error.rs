/// Every failure of the pack/unpack pipeline.
///
/// Variants are kept distinct so callers can tell attacker controlled input
/// (`Malformed`) apart from local configuration problems (`SecretNotFound`,
/// `DidNotResolved`, ...).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed message: {0}")]
    Malformed(String),
    #[error("DID Doc error: {0}")]
    DidDoc(String),
    #[error("DID URL not found: {0}")]
    DidUrlNotFound(String),
    #[error("DID '{0}' is not resolved")]
    DidNotResolved(String),
    #[error("secret '{0}' is not found")]
    SecretNotFound(String),
    #[error("incompatible crypto: {0}")]
    IncompatibleCrypto(String),
    #[error("unsupported verification method type: {0}")]
    UnsupportedVerificationMethodType(String),
    #[error("unsupported material format '{format}' for verification method type '{type_}'")]
    UnsupportedVerificationMethodMaterialFormat { format: String, type_: String },
    #[error("unsupported secret type: {0}")]
    UnsupportedSecretType(String),
    #[error("unsupported material format '{format}' for secret type '{type_}'")]
    UnsupportedSecretMaterialFormat { format: String, type_: String },
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
    #[error("DIDComm service error for '{did}': {reason}")]
    DidCommService { did: String, reason: String },
    #[error("cryptography failure: {0}")]
    Crypto(String),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    RegexError(#[from] regex::Error),
}

impl Error {
    /// `true` if the error was caused by the received message itself
    /// rather than by local configuration.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }
}
