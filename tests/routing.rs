/// Delivery through mediators with `routing/2.0/forward` messages.
mod common;

use common::*;
use didcomm_v2::{wrap_in_forward, AnonCryptAlg, FORWARD_MSG_TYPE};
use serde_json::json;

#[test]
fn forward_through_two_mediators() {
    // Arrange
    let message = lunch_message(&["did:example:charlie"]);
    let mediator1 = agent(&[utilities::MEDIATOR1_SECRETS]);
    let mediator2 = agent(&[utilities::MEDIATOR2_SECRETS]);

    // Act
    let packed = alice()
        .pack_encrypted(
            &message,
            "did:example:charlie",
            Some("did:example:alice"),
            None,
            &PackEncryptedParams::default(),
        )
        .unwrap();
    let at_mediator1 = mediator1
        .unpack_forward(&packed.packed_message, &UnpackParams::default())
        .unwrap();
    let at_mediator2 = mediator2
        .unpack_forward(&at_mediator1.forwarded_msg, &UnpackParams::default())
        .unwrap();
    let at_charlie = charlie()
        .unpack(&at_mediator2.forwarded_msg, &UnpackParams::default())
        .unwrap();

    // Assert
    let service = packed.service_metadata.unwrap();
    assert_eq!(service.id, "did:example:charlie#didcomm-1");
    assert_eq!(service.service_endpoint, "http://example.com/mediator1");
    assert_eq!(at_mediator1.next, "did:example:mediator2#key-x25519-1");
    assert_eq!(at_mediator1.forward_msg.m_type, FORWARD_MSG_TYPE);
    assert_eq!(at_mediator1.encrypted_to, vec!["did:example:mediator1#key-x25519-1".to_string()]);
    assert_eq!(at_mediator2.next, "did:example:charlie");
    assert_eq!(at_charlie.message, message);
    assert!(at_charlie.metadata.authenticated);
    assert!(!at_charlie.metadata.re_wrapped_in_forward);
}

#[test]
fn mediator_does_not_unwrap_foreign_forward() {
    let mediator1 = agent(&[utilities::MEDIATOR1_SECRETS]);
    let packed = alice()
        .pack_encrypted(
            &lunch_message(&["did:example:charlie"]),
            "did:example:charlie",
            None,
            None,
            &PackEncryptedParams::default(),
        )
        .unwrap();

    let unpacked = mediator1.unpack(&packed.packed_message, &UnpackParams::default()).unwrap();

    assert_eq!(unpacked.message.m_type, FORWARD_MSG_TYPE);
    assert_eq!(unpacked.message.body, json!({"next": "did:example:mediator2#key-x25519-1"}));
    assert!(unpacked.metadata.anonymous_sender);
    assert!(!unpacked.metadata.re_wrapped_in_forward);
}

#[test]
fn forward_headers_are_set() {
    let mediator1 = agent(&[utilities::MEDIATOR1_SECRETS]);
    let params = PackEncryptedParams {
        forward_headers: Some(
            vec![("expires_in".to_string(), json!(99))]
                .into_iter()
                .collect(),
        ),
        ..PackEncryptedParams::default()
    };
    let packed = alice()
        .pack_encrypted(&lunch_message(&["did:example:charlie"]), "did:example:charlie", None, None, &params)
        .unwrap();
    let forward = mediator1
        .unpack_forward(&packed.packed_message, &UnpackParams::default())
        .unwrap();
    assert_eq!(forward.forward_msg.extra_headers["expires_in"], json!(99));
}

#[test]
fn re_wrapped_forward_is_unpacked() {
    // Arrange: Bob's own mediator re-wraps the message for him
    let message = lunch_message(&["did:example:bob"]);
    let packed = alice()
        .pack_encrypted(&message, "did:example:bob", Some("did:example:alice"), None, &direct())
        .unwrap();
    let resolver = did_resolver();
    let re_wrapped = wrap_in_forward(
        &packed.packed_message,
        None,
        "did:example:bob",
        &["did:example:bob#key-x25519-1".to_string()],
        &AnonCryptAlg::default(),
        resolver.as_ref(),
    )
    .unwrap();

    // Act
    let unpacked = bob().unpack(&re_wrapped, &UnpackParams::default()).unwrap();
    let stopped = bob()
        .unpack(
            &re_wrapped,
            &UnpackParams {
                unwrap_re_wrapping_forward: false,
                ..UnpackParams::default()
            },
        )
        .unwrap();

    // Assert
    assert_eq!(unpacked.message, message);
    assert!(unpacked.metadata.re_wrapped_in_forward);
    assert!(unpacked.metadata.authenticated);
    assert!(!unpacked.metadata.anonymous_sender);
    assert_eq!(stopped.message.m_type, FORWARD_MSG_TYPE);
    assert!(!stopped.metadata.re_wrapped_in_forward);
}

#[test]
fn recursive_mediator_is_rejected() {
    let message = Message::new(LUNCH_PROPOSAL, json!({})).to(&["did:example:dave"]);
    let result = alice().pack_encrypted(&message, "did:example:dave", None, None, &PackEncryptedParams::default());
    match result {
        Err(Error::DidCommService { reason, .. }) => {
            assert_eq!(reason, "mediator defines alternative endpoint recursively")
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn forwarding_can_be_disabled() {
    let packed = alice()
        .pack_encrypted(
            &lunch_message(&["did:example:charlie"]),
            "did:example:charlie",
            None,
            None,
            &direct(),
        )
        .unwrap();
    assert!(packed.service_metadata.is_none());
    assert!(charlie().unpack(&packed.packed_message, &UnpackParams::default()).is_ok());
}

#[test]
fn unknown_service_id() {
    let params = PackEncryptedParams {
        forward_service_id: Some("did:example:bob#didcomm-9".into()),
        ..PackEncryptedParams::default()
    };
    let result = alice().pack_encrypted(&lunch_message(&["did:example:bob"]), "did:example:bob", None, None, &params);
    assert!(matches!(result, Err(Error::DidCommService { .. })));
}

#[test]
fn unpack_forward_rejects_plain_messages() {
    let packed = alice()
        .pack_plaintext(&lunch_message(&["did:example:bob"]), &PackPlaintextParams::default())
        .unwrap();
    let result = bob().unpack_forward(&packed.packed_message, &UnpackParams::default());
    assert!(matches!(result, Err(Error::Malformed(_))));
}
