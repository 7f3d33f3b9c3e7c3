//! Ring value types
//!
//! Defines the virtual node placement points and the error and statistics
//! types exposed by the ring.

use std::fmt;

/// One placement point on the hash ring for one server
///
/// A server registered with weight K owns K virtual nodes, labelled
/// `"<name>:1"` through `"<name>:K"`; the hash of each label is the node's
/// position on the ring.
#[derive(Debug, Clone)]
pub(crate) struct VirtualNode {
    /// Registered name of the owning server
    pub name: String,

    /// Position on the ring: hash of `"<name>:<replica>"`
    pub position: u32,

    /// Opaque index handed back to the caller; never interpreted
    pub server_index: usize,
}

/// Ring lookup errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// Lookup attempted with no servers registered
    EmptyRing,
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::EmptyRing => write!(f, "no servers registered"),
        }
    }
}

impl std::error::Error for RingError {}

/// Snapshot of ring occupancy
#[derive(Debug, Clone, serde::Serialize)]
pub struct RingStats {
    pub servers: usize,
    pub virtual_nodes: usize,
    pub replicas_per_server: usize,
}
