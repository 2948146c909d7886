//! Board capability surface consumed by the searchers.

pub mod state;

pub use state::GameState;
