use crate::{
    jose::jws::{parse_compact, sign_compact},
    selectors::{RecipientKeySelector, SenderKeySelector},
    util::did_url::{did_of, is_did_url, validate_did},
    Error,
    Result,
};

/// Claims of a `from_prior` JWT, announcing that `sub` replaces `iss`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FromPrior {
    pub iss: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl FromPrior {
    pub fn new(iss: &str, sub: &str) -> Self {
        FromPrior {
            iss: iss.to_string(),
            sub: sub.to_string(),
            aud: None,
            exp: None,
            nbf: None,
            iat: None,
            jti: None,
        }
    }

    pub fn aud(mut self, aud: &str) -> Self {
        self.aud = Some(aud.to_string());
        self
    }

    pub fn exp(mut self, exp: u64) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn nbf(mut self, nbf: u64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    pub fn iat(mut self, iat: u64) -> Self {
        self.iat = Some(iat);
        self
    }

    pub fn jti(mut self, jti: &str) -> Self {
        self.jti = Some(jti.to_string());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_did(&self.iss, "from_prior.iss")?;
        validate_did(&self.sub, "from_prior.sub")?;
        if self.iss == self.sub {
            return Err(Error::IllegalArgument(
                "from_prior `iss` and `sub` values must not be equal".into(),
            ));
        }
        Ok(())
    }

    /// Signs claims as compact JWS with key of `iss`.
    /// Returns the JWT and the kid actually used.
    pub(crate) fn pack(&self, issuer_kid: Option<&str>, selector: &SenderKeySelector) -> Result<(String, String)> {
        self.validate()?;
        if let Some(kid) = issuer_kid {
            if !is_did_url(kid) || did_of(kid) != self.iss {
                return Err(Error::IllegalArgument(format!(
                    "from_prior issuer kid '{}' is not a key of '{}'",
                    kid, self.iss
                )));
            }
        }
        let key = selector.find_signing_key(issuer_kid.unwrap_or(&self.iss))?;
        let jwt = sign_compact(&serde_json::to_vec(self)?, &key, "JWT")?;
        debug!("from_prior signed by {}", key.id);
        Ok((jwt, key.id))
    }

    /// Verifies received JWT and returns its claims with the issuer kid.
    pub(crate) fn unpack(jwt: &str, selector: &RecipientKeySelector) -> Result<(FromPrior, String)> {
        let parsed = parse_compact(jwt)?;
        let kid = parsed.header.kid.clone();
        let key = selector.find_verification_key(&kid)?;
        parsed.verify(&key)?;
        let claims: FromPrior = serde_json::from_slice(&parsed.payload()?)
            .map_err(|e| Error::Malformed(format!("invalid from_prior claims: {}", e)))?;
        if did_of(&kid) != claims.iss {
            return Err(Error::Malformed(format!(
                "from_prior signed by '{}' which is not a key of issuer '{}'",
                kid, claims.iss
            )));
        }
        claims
            .validate()
            .map_err(|e| Error::Malformed(format!("invalid from_prior claims: {}", e)))?;
        Ok((claims, kid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dids::{DidDoc, ExampleDidResolver},
        secrets::{ExampleSecretsResolver, Secret},
    };

    fn resolvers() -> (ExampleDidResolver, ExampleSecretsResolver) {
        let docs = vec![
            serde_json::from_str::<DidDoc>(utilities::ALICE_DID_DOC).unwrap(),
            serde_json::from_str::<DidDoc>(utilities::CHARLIE_DID_DOC).unwrap(),
        ];
        let secrets: Vec<Secret> = serde_json::from_str(utilities::CHARLIE_SECRETS).unwrap();
        (ExampleDidResolver::new(docs), ExampleSecretsResolver::new(secrets))
    }

    #[test]
    fn signed_claims_verify() -> Result<()> {
        // Arrange
        let (dids, secrets) = resolvers();
        let claims = FromPrior::new("did:example:charlie", "did:example:alice")
            .aud("123")
            .iat(1516239022)
            .jti("dfg");
        // Act
        let (jwt, kid) = claims.pack(None, &SenderKeySelector::new(&dids, &secrets))?;
        let (unpacked, issuer_kid) = FromPrior::unpack(&jwt, &RecipientKeySelector::new(&dids, &secrets))?;
        // Assert
        assert_eq!(kid, "did:example:charlie#key-1");
        assert_eq!(issuer_kid, kid);
        assert_eq!(unpacked, claims);
        Ok(())
    }

    #[test]
    fn issuer_kid_must_belong_to_iss() {
        let (dids, secrets) = resolvers();
        let claims = FromPrior::new("did:example:charlie", "did:example:alice");
        let result = claims.pack(Some("did:example:alice#key-1"), &SenderKeySelector::new(&dids, &secrets));
        assert!(matches!(result, Err(Error::IllegalArgument(_))));
    }

    #[test]
    fn iss_and_sub_differ() {
        assert!(FromPrior::new("did:example:alice", "did:example:alice").validate().is_err());
        assert!(FromPrior::new("did:example:alice#key-1", "did:example:bob").validate().is_err());
    }
}
