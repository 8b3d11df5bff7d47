//! DID Document model and the resolver seam.
mod did_doc;
mod resolver;

pub use did_doc::*;
pub use resolver::{DidResolver, ExampleDidResolver};
pub(crate) use resolver::resolve_required;
