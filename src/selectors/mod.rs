//! Key selection over DID Docs and secrets.
mod recipient;
mod sender;

pub use recipient::RecipientKeySelector;
pub use sender::SenderKeySelector;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dids::{DidDoc, ExampleDidResolver},
        keys::Curve,
        secrets::{ExampleSecretsResolver, Secret},
        Error,
        Result,
    };

    fn did_resolver() -> ExampleDidResolver {
        ExampleDidResolver::new(
            utilities::did_docs()
                .into_iter()
                .map(|doc| serde_json::from_str::<DidDoc>(doc).unwrap())
                .collect(),
        )
    }

    fn secrets(sets: &[&str]) -> ExampleSecretsResolver {
        ExampleSecretsResolver::new(
            sets.iter()
                .flat_map(|set| serde_json::from_str::<Vec<Secret>>(set).unwrap())
                .collect(),
        )
    }

    #[test]
    fn signing_key_is_first_authentication_with_secret() -> Result<()> {
        // Arrange
        let dids = did_resolver();
        let secrets = secrets(&[utilities::ALICE_SECRETS]);
        let selector = SenderKeySelector::new(&dids, &secrets);
        // Act
        let bare = selector.find_signing_key("did:example:alice")?;
        let explicit = selector.find_signing_key("did:example:alice#key-3")?;
        // Assert
        assert_eq!(bare.id, "did:example:alice#key-1");
        assert_eq!(explicit.curve, Curve::Secp256k1);
        Ok(())
    }

    #[test]
    fn signing_key_skips_entries_without_secret() -> Result<()> {
        let dids = did_resolver();
        let mut held: Vec<Secret> = serde_json::from_str(utilities::ALICE_SECRETS)?;
        held.retain(|s| s.id != "did:example:alice#key-1");
        let secrets = ExampleSecretsResolver::new(held);
        let key = SenderKeySelector::new(&dids, &secrets).find_signing_key("did:example:alice")?;
        assert_eq!(key.id, "did:example:alice#key-2");
        Ok(())
    }

    #[test]
    fn signing_errors() {
        let dids = did_resolver();
        let none = secrets(&[]);
        let selector = SenderKeySelector::new(&dids, &none);
        assert!(matches!(selector.find_signing_key("did:example:alice"), Err(Error::SecretNotFound(_))));
        assert!(matches!(selector.find_signing_key("did:example:frank"), Err(Error::DidDoc(_))));
        assert!(matches!(
            selector.find_signing_key("did:example:alice#key-404"),
            Err(Error::DidUrlNotFound(_))
        ));
        assert!(matches!(selector.find_signing_key("did:example:nobody"), Err(Error::DidNotResolved(_))));
    }

    #[test]
    fn authcrypt_keys_use_first_compatible_sender_key() -> Result<()> {
        // Arrange
        let dids = did_resolver();
        let secrets = secrets(&[utilities::ALICE_SECRETS]);
        let selector = SenderKeySelector::new(&dids, &secrets);
        // Act
        let (from, to) = selector.find_auth_crypt_keys("did:example:alice", "did:example:bob")?;
        let (p256_from, p256_to) = selector.find_auth_crypt_keys("did:example:alice", "did:example:ellie")?;
        // Assert
        assert_eq!(from.id, "did:example:alice#key-x25519-1");
        assert_eq!(
            to.iter().map(|k| k.id.as_str()).collect::<Vec<_>>(),
            vec![
                "did:example:bob#key-x25519-1",
                "did:example:bob#key-x25519-2",
                "did:example:bob#key-x25519-3"
            ]
        );
        assert_eq!(p256_from.id, "did:example:alice#key-p256-1");
        assert_eq!(p256_to.len(), 1);
        Ok(())
    }

    #[test]
    fn authcrypt_keys_with_explicit_kids() -> Result<()> {
        let dids = did_resolver();
        let secrets = secrets(&[utilities::ALICE_SECRETS]);
        let selector = SenderKeySelector::new(&dids, &secrets);

        let (from, to) =
            selector.find_auth_crypt_keys("did:example:alice#key-p256-1", "did:example:bob")?;
        assert_eq!(from.curve, Curve::P256);
        assert_eq!(to.len(), 2);

        let result = selector.find_auth_crypt_keys("did:example:alice#key-p256-1", "did:example:bob#key-x25519-2");
        assert!(matches!(result, Err(Error::IncompatibleCrypto(_))));
        Ok(())
    }

    #[test]
    fn authcrypt_without_common_curve() {
        let dids = did_resolver();
        let secrets = secrets(&[utilities::ALICE_SECRETS]);
        let selector = SenderKeySelector::new(&dids, &secrets);
        match selector.find_auth_crypt_keys("did:example:alice", "did:example:frank") {
            Err(Error::IncompatibleCrypto(reason)) => {
                assert!(reason.contains("did:example:alice"));
                assert!(reason.contains("did:example:frank"));
            }
            other => panic!("unexpected {:?}", other.map(|(k, _)| k.id)),
        }
    }

    #[test]
    fn anoncrypt_keys_share_first_curve() -> Result<()> {
        let dids = did_resolver();
        let none = secrets(&[]);
        let selector = SenderKeySelector::new(&dids, &none);
        let keys = selector.find_anon_crypt_keys("did:example:bob")?;
        assert_eq!(keys.len(), 3);
        assert!(keys.iter().all(|k| k.curve == Curve::X25519 && !k.is_private()));
        let single = selector.find_anon_crypt_keys("did:example:bob#key-p256-2")?;
        assert_eq!(single[0].id, "did:example:bob#key-p256-2");
        assert!(matches!(
            selector.find_anon_crypt_keys("did:example:bob#key-1"),
            Err(Error::DidUrlNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn recipient_side_selection() -> Result<()> {
        let dids = did_resolver();
        let secrets = secrets(&[utilities::BOB_SECRETS]);
        let selector = RecipientKeySelector::new(&dids, &secrets);
        let to_kids = vec![
            "did:example:bob#key-p256-1".to_string(),
            "did:example:bob#key-x25519-1".to_string(),
            "did:example:bob#key-x25519-9".to_string(),
        ];

        let (sender, recipients) = selector.find_auth_crypt_keys("did:example:alice#key-x25519-1", &to_kids)?;
        assert_eq!(sender.curve, Curve::X25519);
        assert_eq!(recipients.len(), 1);
        assert_eq!(selector.find_anon_crypt_keys(&to_kids)?.len(), 2);

        assert!(selector.has_keys_for_forward_next("did:example:bob")?);
        assert!(selector.has_keys_for_forward_next("did:example:bob#key-x25519-2")?);
        assert!(!selector.has_keys_for_forward_next("did:example:mediator1")?);
        assert!(matches!(
            selector.find_anon_crypt_keys(&["did:example:charlie#key-x25519-1".to_string()]),
            Err(Error::SecretNotFound(_))
        ));
        assert!(matches!(
            selector.find_verification_key("did:example:alice"),
            Err(Error::Malformed(_))
        ));
        assert_eq!(selector.find_verification_key("did:example:alice#key-2")?.curve, Curve::P256);
        Ok(())
    }

    #[test]
    fn recipient_authcrypt_without_key_on_sender_curve() -> Result<()> {
        let dids = did_resolver();
        let secrets = secrets(&[utilities::BOB_SECRETS]);
        let selector = RecipientKeySelector::new(&dids, &secrets);
        let to_kids = vec!["did:example:bob#key-x25519-1".to_string()];

        match selector.find_auth_crypt_keys("did:example:alice#key-p256-1", &to_kids) {
            Err(Error::IncompatibleCrypto(reason)) => {
                assert!(reason.contains("P-256"));
                assert!(reason.contains("did:example:alice#key-p256-1"));
            }
            other => panic!("unexpected {:?}", other.map(|(k, _)| k.id)),
        }
        Ok(())
    }

    #[test]
    fn anoncrypt_to_did_without_key_agreements() {
        let dids = ExampleDidResolver::new(vec![DidDoc {
            did: "did:example:signer".into(),
            key_agreements: vec![],
            authentications: vec![],
            verification_methods: vec![],
            services: vec![],
        }]);
        let none = secrets(&[]);
        let selector = SenderKeySelector::new(&dids, &none);
        assert!(matches!(
            selector.find_anon_crypt_keys("did:example:signer"),
            Err(Error::DidDoc(_))
        ));
    }
}
