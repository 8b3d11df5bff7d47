//! DIDComm messaging v2 pack and unpack.
//!
//! [`DidComm`] packs a [`Message`] as plaintext, signed (JWS) or encrypted
//! (JWE, anoncrypt or authcrypt, optionally signed and sender protected)
//! and wraps it in forward messages when the recipient is reachable only
//! through mediators. Unpacking reverses all of it and reports what was
//! found in [`UnpackMetadata`].
//!
//! DIDs and secrets come from the application through [`DidResolver`] and
//! [`SecretsResolver`].
//!
//! ```
//! use std::sync::Arc;
//! use didcomm_v2::{
//!     DidComm, DidDoc, ExampleDidResolver, ExampleSecretsResolver, Message,
//!     PackEncryptedParams, Secret, UnpackParams,
//! };
//!
//! # fn main() -> didcomm_v2::Result<()> {
//! let alice_doc: DidDoc = serde_json::from_str(utilities::ALICE_DID_DOC)?;
//! let bob_doc: DidDoc = serde_json::from_str(utilities::BOB_DID_DOC)?;
//! let dids = Arc::new(ExampleDidResolver::new(vec![alice_doc, bob_doc]));
//!
//! let alice_secrets: Vec<Secret> = serde_json::from_str(utilities::ALICE_SECRETS)?;
//! let alice = DidComm::new(dids.clone(), Arc::new(ExampleSecretsResolver::new(alice_secrets)));
//!
//! let message = Message::new("https://example.com/protocols/lets_do_lunch/1.0/proposal", serde_json::json!({}))
//!     .from("did:example:alice")
//!     .to(&["did:example:bob"]);
//! let packed = alice.pack_encrypted(
//!     &message,
//!     "did:example:bob",
//!     Some("did:example:alice"),
//!     None,
//!     &PackEncryptedParams::default(),
//! )?;
//!
//! let bob_secrets: Vec<Secret> = serde_json::from_str(utilities::BOB_SECRETS)?;
//! let bob = DidComm::new(dids, Arc::new(ExampleSecretsResolver::new(bob_secrets)));
//! let unpacked = bob.unpack(&packed.packed_message, &UnpackParams::default())?;
//! assert_eq!(unpacked.message, message);
//! assert!(unpacked.metadata.authenticated);
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;

pub mod crypto;
mod didcomm;
pub mod dids;
mod error;
pub mod jose;
pub mod keys;
mod messages;
mod pack;
pub mod protocols;
mod result;
pub mod secrets;
pub mod selectors;
mod unpack;
mod util;

pub use didcomm::DidComm;
pub use dids::{DidDoc, DidResolver, ExampleDidResolver, Service, VerificationMethod};
pub use error::*;
pub use jose::{AnonCryptAlg, AuthCryptAlg, SignAlg};
pub use messages::*;
pub use pack::*;
pub use protocols::routing::{wrap_in_forward, ServiceMetadata, FORWARD_MSG_TYPE};
pub use result::Result;
pub use secrets::{ExampleSecretsResolver, Secret, SecretsResolver};
pub use unpack::*;
