//! Core types: players, moves, RNG.
//!
//! These are the fundamental building blocks shared by boards and searchers.
//! They carry no game rules of their own.

pub mod moves;
pub mod player;
pub mod rng;

pub use moves::{Move, MoveList};
pub use player::PlayerId;
pub use rng::GameRng;
