mod encrypted;
mod plaintext;
mod signed;

pub use encrypted::{PackEncryptedParams, PackEncryptedResult};
pub use plaintext::{PackPlaintextParams, PackPlaintextResult};
pub use signed::{PackSignedParams, PackSignedResult};

use crate::{messages::Message, selectors::SenderKeySelector, Result};

/// Signs `from_prior` claims of `msg` if any.
/// Returns the JWT and the issuer kid used.
fn pack_from_prior(
    msg: &Message,
    issuer_kid: Option<&str>,
    selector: &SenderKeySelector,
) -> Result<(Option<String>, Option<String>)> {
    match &msg.from_prior {
        Some(from_prior) => {
            let (jwt, kid) = from_prior.pack(issuer_kid, selector)?;
            Ok((Some(jwt), Some(kid)))
        }
        None => Ok((None, None)),
    }
}
