mod attachment;
mod from_prior;
mod message;
mod types;

pub use attachment::*;
pub use from_prior::FromPrior;
pub use message::*;
pub use types::*;
