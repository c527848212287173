mod state;
mod store;

pub use state::ScopeState;
pub use store::ScopeStore;
