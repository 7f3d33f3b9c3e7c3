//! FerrumRing - consistent hashing for backend server selection
//!
//! FerrumRing maps lookup keys onto a dynamically changing set of backend
//! servers so that adding or removing a server only remaps a bounded
//! fraction of keys (unlike modulo hashing, which reshuffles almost
//! everything). It is designed with strong cohesion and loose coupling:
//! - The ring stores opaque server indices and never dereferences them
//! - The hash function is supplied by the caller as a plain capability
//! - No I/O, no background tasks: all work runs in the calling thread

pub mod hasher;
pub mod ring;

/// Re-export commonly used types
pub use hasher::HashFn;
pub use ring::{Ring, RingError, RingStats, NODES_PER_SERVER};
