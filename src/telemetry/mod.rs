mod error;
mod synchronizer;
mod topics;
mod update;

pub use synchronizer::Synchronizer;
pub use topics::Topics;
