//! Consistent hash ring module
//!
//! Maps lookup keys to backend server indices using consistent hashing:
//! each server owns several virtual nodes on a 32-bit ring, and a key is
//! routed to the server owning its clockwise successor. Membership changes
//! therefore only remap the keys adjacent to the affected virtual nodes.
//!
//! The ring is independent of connection handling (loose coupling): it
//! stores opaque server indices supplied by the caller's registry and never
//! dereferences them.

mod ring;
mod types;

pub use ring::{Ring, NODES_PER_SERVER};
pub use types::{RingError, RingStats};
