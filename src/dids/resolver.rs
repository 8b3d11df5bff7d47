use super::DidDoc;
use crate::{Error, Result};

/// DID resolution is not part of this crate. Implement this trait on top of
/// whatever DID method resolvers the application uses.
/// `Ok(None)` means the DID is unknown.
pub trait DidResolver: Send + Sync {
    fn resolve(&self, did: &str) -> Result<Option<DidDoc>>;
}

/// Resolver over a fixed in-memory set of DID Documents.
#[derive(Debug, Clone, Default)]
pub struct ExampleDidResolver {
    known_dids: Vec<DidDoc>,
}

impl ExampleDidResolver {
    pub fn new(known_dids: Vec<DidDoc>) -> Self {
        ExampleDidResolver { known_dids }
    }
}

impl DidResolver for ExampleDidResolver {
    fn resolve(&self, did: &str) -> Result<Option<DidDoc>> {
        Ok(self.known_dids.iter().find(|doc| doc.did == did).cloned())
    }
}

/// Resolves `did` or fails with [`Error::DidNotResolved`].
pub(crate) fn resolve_required(resolver: &dyn DidResolver, did: &str) -> Result<DidDoc> {
    trace!("resolving DID {}", did);
    resolver
        .resolve(did)?
        .ok_or_else(|| Error::DidNotResolved(did.to_string()))
}
