//! Concrete board implementations.
//!
//! The engine is board-agnostic; this module carries the reference
//! implementation used by tests and benchmarks.

pub mod knight;

pub use knight::KnightBoard;
