//! Consistent hash ring implementation

use super::types::{RingError, RingStats, VirtualNode};
use crate::hasher::HashFn;
use std::sync::RwLock;
use tracing::debug;

/// Default number of virtual nodes placed per server
///
/// A single position per server would make the arc lengths between servers
/// highly uneven; several independent positions smooth the key space across
/// servers and bound the fraction of keys remapped by a membership change.
pub const NODES_PER_SERVER: usize = 4;

/// Consistent hash ring over a set of named backend servers
///
/// The ring keeps its virtual nodes sorted ascending by position. Lookups
/// take a shared lock and binary-search for the key's successor; membership
/// changes take an exclusive lock and rebuild the ordering. No lock is held
/// across public calls, so every lookup observes either the full effect of
/// a membership change or none of it.
pub struct Ring {
    /// Hash capability used for both node placement and key lookup
    hash_fn: HashFn,

    /// Virtual nodes placed per server by `add_server`
    replicas: usize,

    /// Virtual nodes, sorted ascending by position
    nodes: RwLock<Vec<VirtualNode>>,
}

impl Ring {
    /// Create an empty ring with the default replication factor
    pub fn new(hash_fn: HashFn) -> Self {
        Self::with_replicas(hash_fn, NODES_PER_SERVER)
    }

    /// Create an empty ring with an explicit replication factor
    pub fn with_replicas(hash_fn: HashFn, replicas: usize) -> Self {
        assert!(replicas > 0, "Replication factor must be > 0");
        Ring {
            hash_fn,
            replicas,
            nodes: RwLock::new(Vec::new()),
        }
    }

    /// Register a server under an opaque index
    ///
    /// Places `replicas` virtual nodes for the server. Registering a name
    /// that is already present replaces its nodes, so a server can be
    /// re-registered under a new index without doubling its weight.
    pub fn add_server(&self, name: &str, server_index: usize) {
        self.add_server_weighted(name, server_index, self.replicas);
    }

    /// Register a server with an explicit virtual node count
    ///
    /// Higher weights attract proportionally more keys. A weight of zero
    /// is equivalent to removal.
    pub fn add_server_weighted(&self, name: &str, server_index: usize, weight: usize) {
        let mut nodes = self.nodes.write().expect("ring lock poisoned");

        // Replace any existing registration under this name
        let before = nodes.len();
        nodes.retain(|node| node.name != name);
        let replaced = before != nodes.len();

        for replica in 1..=weight {
            let label = format!("{}:{}", name, replica);
            nodes.push(VirtualNode {
                name: name.to_string(),
                position: (self.hash_fn)(label.as_bytes()),
                server_index,
            });
        }

        // Full re-sort: membership changes are rare relative to lookups.
        // The sort is stable, so equal positions keep their insertion order
        // within this pass.
        nodes.sort_by_key(|node| node.position);

        if replaced {
            debug!("Re-registered server '{}' with {} virtual nodes", name, weight);
        } else {
            debug!("Registered server '{}' with {} virtual nodes", name, weight);
        }
    }

    /// Unregister a server
    ///
    /// Removes every virtual node registered under `name`. Idempotent:
    /// removing an absent name is a silent no-op. Filtering preserves the
    /// sorted order, so no re-sort is needed.
    pub fn remove_server(&self, name: &str) {
        let mut nodes = self.nodes.write().expect("ring lock poisoned");

        let before = nodes.len();
        nodes.retain(|node| node.name != name);
        let removed = before - nodes.len();

        if removed > 0 {
            debug!("Removed server '{}' ({} virtual nodes)", name, removed);
        }
    }

    /// Route a key to the index of the server owning it
    ///
    /// Finds the key's clockwise successor: the first virtual node whose
    /// position is >= the key's hash, wrapping around to the minimum
    /// position when the hash exceeds every node on the ring.
    pub fn route_key(&self, key: impl AsRef<[u8]>) -> Result<usize, RingError> {
        let nodes = self.nodes.read().expect("ring lock poisoned");

        if nodes.is_empty() {
            return Err(RingError::EmptyRing);
        }

        let val = (self.hash_fn)(key.as_ref());
        let mut i = nodes.partition_point(|node| node.position < val);
        if i == nodes.len() {
            // Wrap: the successor of the maximum position is the minimum
            i = 0;
        }

        Ok(nodes[i].server_index)
    }

    /// Number of virtual nodes on the ring
    pub fn node_count(&self) -> usize {
        self.nodes.read().expect("ring lock poisoned").len()
    }

    /// Number of distinct registered servers
    pub fn server_count(&self) -> usize {
        self.server_names().len()
    }

    /// Check if no servers are registered
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Names of all registered servers, sorted (for debugging/admin)
    pub fn server_names(&self) -> Vec<String> {
        let nodes = self.nodes.read().expect("ring lock poisoned");

        let mut names: Vec<String> = nodes.iter().map(|node| node.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Get statistics about the ring
    pub fn stats(&self) -> RingStats {
        let nodes = self.nodes.read().expect("ring lock poisoned");

        let mut names: Vec<&str> = nodes.iter().map(|node| node.name.as_str()).collect();
        names.sort();
        names.dedup();

        RingStats {
            servers: names.len(),
            virtual_nodes: nodes.len(),
            replicas_per_server: self.replicas,
        }
    }
}
