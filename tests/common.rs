extern crate didcomm_v2;

use std::sync::Arc;

#[allow(unused_imports)]
pub use didcomm_v2::{
    DidComm, DidDoc, Error, ExampleDidResolver, ExampleSecretsResolver, Message, PackEncryptedParams,
    PackPlaintextParams, PackSignedParams, Secret, UnpackParams,
};
use serde_json::json;

pub const LUNCH_PROPOSAL: &str = "https://example.com/protocols/lets_do_lunch/1.0/proposal";

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resolver knowing every fixture DID Doc.
#[allow(dead_code)]
pub fn did_resolver() -> Arc<ExampleDidResolver> {
    let docs = utilities::did_docs()
        .into_iter()
        .map(|doc| serde_json::from_str::<DidDoc>(doc).unwrap())
        .collect();
    Arc::new(ExampleDidResolver::new(docs))
}

#[allow(dead_code)]
pub fn secrets(fixtures: &[&str]) -> Vec<Secret> {
    fixtures
        .iter()
        .flat_map(|json| serde_json::from_str::<Vec<Secret>>(json).unwrap())
        .collect()
}

/// Agent holding the secrets of the given fixtures.
#[allow(dead_code)]
pub fn agent(fixtures: &[&str]) -> DidComm {
    init_logging();
    DidComm::new(did_resolver(), Arc::new(ExampleSecretsResolver::new(secrets(fixtures))))
}

#[allow(dead_code)]
pub fn alice() -> DidComm {
    agent(&[utilities::ALICE_SECRETS])
}

#[allow(dead_code)]
pub fn bob() -> DidComm {
    agent(&[utilities::BOB_SECRETS])
}

#[allow(dead_code)]
pub fn charlie() -> DidComm {
    agent(&[utilities::CHARLIE_SECRETS])
}

/// Lunch proposal from Alice.
#[allow(dead_code)]
pub fn lunch_message(to: &[&str]) -> Message {
    Message::new(LUNCH_PROPOSAL, json!({"messagespecificattribute": "and its value"}))
        .id("1234567890")
        .from("did:example:alice")
        .to(to)
        .thid("1234567890")
        .created_time(1516269022)
        .expires_time(1516385931)
}

/// No forwarding, for recipients behind mediators.
#[allow(dead_code)]
pub fn direct() -> PackEncryptedParams {
    PackEncryptedParams {
        forward: false,
        ..PackEncryptedParams::default()
    }
}
