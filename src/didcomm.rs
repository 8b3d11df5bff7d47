use std::sync::Arc;

use crate::{dids::DidResolver, secrets::SecretsResolver};

/// Entry point for packing and unpacking DIDComm messages.
///
/// Holds the default resolvers. Every operation's params may override them
/// for a single call. Cloning is cheap and instances can be shared across
/// threads.
#[derive(Clone)]
pub struct DidComm {
    pub(crate) did_resolver: Arc<dyn DidResolver>,
    pub(crate) secrets_resolver: Arc<dyn SecretsResolver>,
}

impl DidComm {
    pub fn new(did_resolver: Arc<dyn DidResolver>, secrets_resolver: Arc<dyn SecretsResolver>) -> Self {
        DidComm {
            did_resolver,
            secrets_resolver,
        }
    }

    /// Resolvers for one call: overrides when given, own defaults otherwise.
    pub(crate) fn resolvers<'a>(
        &'a self,
        did_resolver: &'a Option<Arc<dyn DidResolver>>,
        secrets_resolver: &'a Option<Arc<dyn SecretsResolver>>,
    ) -> (&'a dyn DidResolver, &'a dyn SecretsResolver) {
        (
            did_resolver.as_deref().unwrap_or(&*self.did_resolver),
            secrets_resolver.as_deref().unwrap_or(&*self.secrets_resolver),
        )
    }
}
