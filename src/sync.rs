//! Thread-safe wrapper around [`DomainSuffixTrie`].
//!
//! One whole-tree `RwLock` is the entire concurrency contract: lookups take
//! the lock shared and run in parallel, inserts and payload updates take it
//! exclusive and serialize against everything else. Lock hold time is one
//! tree traversal, so no operation blocks for long. Per-node locking was
//! deliberately not attempted; the coarse lock cannot observe a half-linked
//! node during traversal.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::trie::{DomainSuffixTrie, NodeId};

/// A [`DomainSuffixTrie`] safe for concurrent use.
///
/// No reference into the tree ever escapes the lock: lookups return
/// [`NodeId`] handles and cloned payloads. Ids stay valid across concurrent
/// inserts because the tree is append-only; a reader holding an id observes
/// either the old or the new payload, never a torn node.
pub struct SyncDomainSuffixTrie<T> {
    inner: RwLock<DomainSuffixTrie<T>>,
}

impl<T> SyncDomainSuffixTrie<T> {
    /// Create an empty synchronized trie.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DomainSuffixTrie::new()),
        }
    }

    /// Register a suffix with a payload. Takes the write lock.
    pub fn insert(&self, suffix: &str, value: T) -> Result<NodeId> {
        self.inner.write().insert(suffix, value)
    }

    /// Longest-match lookup returning the matched node's id.
    /// See [`DomainSuffixTrie::find_node`] for the matching rules.
    pub fn find_node(&self, domain: &str) -> NodeId {
        self.inner.read().find_node(domain)
    }

    /// Longest-match lookup returning a clone of the matched payload.
    pub fn find_value(&self, domain: &str) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().find_value(domain).cloned()
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.inner.read().root()
    }

    /// Label of the given node; empty for the root.
    pub fn label_of(&self, id: NodeId) -> String {
        self.inner.read().label(id).to_string()
    }

    /// Full suffix path of the given node; empty for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        self.inner.read().path(id)
    }

    /// Parent of the given node; `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.inner.read().parent(id)
    }

    /// Child of the given node with the given label, if any.
    pub fn child_of(&self, id: NodeId, label: &str) -> Option<NodeId> {
        self.inner.read().child(id, label)
    }

    /// Copy of the given node's children map.
    pub fn children_of(&self, id: NodeId) -> HashMap<String, NodeId> {
        self.inner.read().children(id)
    }

    /// Clone of the payload attached to the given node, if any.
    pub fn value_of(&self, id: NodeId) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().value(id).cloned()
    }

    /// Attach a payload to the given node, returning the previous one.
    /// Takes the write lock.
    pub fn set_value(&self, id: NodeId, value: T) -> Option<T> {
        self.inner.write().set_value(id, value)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.inner.read().node_count()
    }

    /// Run a closure against the trie under a single read-lock acquisition.
    ///
    /// Useful for multi-step reads that must see one consistent snapshot,
    /// and for borrowing payloads of types that are not `Clone`.
    pub fn read<R>(&self, f: impl FnOnce(&DomainSuffixTrie<T>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<T> Default for SyncDomainSuffixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
