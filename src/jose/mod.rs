//! JOSE envelopes: JWS signing and multi-recipient JWE encryption.
mod algorithms;
pub mod anoncrypt;
pub mod authcrypt;
pub mod jwe;
pub mod jws;

pub use algorithms::*;

#[cfg(test)]
mod tests {
    use super::{anoncrypt::*, authcrypt::*, *};
    use crate::{keys::Key, secrets::Secret, util::base64helper::to_base64, Error, Result};

    fn keys(secrets: &str, kids: &[&str]) -> Vec<Key> {
        let secrets: Vec<Secret> = serde_json::from_str(secrets).unwrap();
        kids.iter()
            .map(|kid| Key::from_secret(secrets.iter().find(|s| s.id == *kid).unwrap()).unwrap())
            .collect()
    }

    fn bob_x25519() -> Vec<Key> {
        keys(
            utilities::BOB_SECRETS,
            &[
                "did:example:bob#key-x25519-1",
                "did:example:bob#key-x25519-2",
                "did:example:bob#key-x25519-3",
            ],
        )
    }

    #[test]
    fn anoncrypt_multi_recipient() -> Result<()> {
        for alg in [
            AnonCryptAlg::A256cbcHs512EcdhEsA256kw,
            AnonCryptAlg::Xc20pEcdhEsA256kw,
            AnonCryptAlg::A256gcmEcdhEsA256kw,
        ] {
            // Arrange
            let bob = bob_x25519();
            let public: Vec<Key> = bob.iter().map(Key::to_public).collect();
            // Act
            let (packed, to_kids) = anoncrypt("{\"hi\":1}", &alg, &public)?;
            let parsed = jwe::parse(&packed)?;
            let (payload, decrypted_by) = anon_decrypt(&parsed, &bob, true)?;
            // Assert
            assert_eq!(payload, b"{\"hi\":1}");
            assert_eq!(to_kids, decrypted_by);
            assert_eq!(parsed.protected.enc, alg.enc().enc());
            assert_eq!(parsed.protected.typ.as_deref(), Some("application/didcomm-encrypted+json"));
        }
        Ok(())
    }

    #[test]
    fn authcrypt_on_p256() -> Result<()> {
        // Arrange
        let alice = keys(utilities::ALICE_SECRETS, &["did:example:alice#key-p256-1"]);
        let bob = keys(utilities::BOB_SECRETS, &["did:example:bob#key-p256-1", "did:example:bob#key-p256-2"]);
        let public: Vec<Key> = bob.iter().map(Key::to_public).collect();
        // Act
        let (packed, _, from_kid) =
            authcrypt("{}", &AuthCryptAlg::A256cbcHs512Ecdh1puA256kw, &alice[0], &public)?;
        let mut parsed = jwe::parse(&packed)?;
        parsed.verify_apu()?;
        let (payload, decrypted_by) = auth_decrypt(&parsed, &alice[0].to_public(), &bob[1..], false)?;
        // Assert
        assert_eq!(from_kid, "did:example:alice#key-p256-1");
        assert_eq!(payload, b"{}");
        assert_eq!(decrypted_by, vec!["did:example:bob#key-p256-2"]);
        Ok(())
    }

    #[test]
    fn forged_apv_is_rejected() -> Result<()> {
        // Arrange
        let bob = bob_x25519();
        let (packed, _) = anoncrypt("{}", &AnonCryptAlg::default(), &[bob[0].to_public()])?;
        let mut parsed = jwe::parse(&packed)?;
        // Act
        parsed.jwe.recipients[0].header.kid = "did:example:bob#key-x25519-2".into();
        // Assert
        assert!(matches!(anon_decrypt(&parsed, &bob, false), Err(Error::Malformed(m)) if m == "apv is invalid"));
        Ok(())
    }

    #[test]
    fn sender_must_match_skid() -> Result<()> {
        let alice = keys(utilities::ALICE_SECRETS, &["did:example:alice#key-x25519-1"]);
        let bob = bob_x25519();
        let (packed, _, _) =
            authcrypt("{}", &AuthCryptAlg::default(), &alice[0], &[bob[0].to_public()])?;
        let mut parsed = jwe::parse(&packed)?;
        parsed.protected.apu = Some(to_base64("did:example:charlie#key-x25519-1"));
        parsed.apu = Some(b"did:example:charlie#key-x25519-1".to_vec());
        assert!(matches!(parsed.verify_apu(), Err(Error::Malformed(m)) if m == "apu is not equal to skid"));
        Ok(())
    }

    #[test]
    fn mixed_curve_recipients_are_incompatible() {
        let bob = keys(utilities::BOB_SECRETS, &["did:example:bob#key-x25519-1", "did:example:bob#key-p256-1"]);
        let result = anoncrypt("{}", &AnonCryptAlg::default(), &bob);
        assert!(matches!(result, Err(Error::IncompatibleCrypto(_))));
    }
}
