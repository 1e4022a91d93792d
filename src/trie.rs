//! Arena-backed domain suffix trie.
//!
//! Suffixes are stored as reversed label paths: inserting `api.google.com`
//! walks `com`, then `google`, then `api` from the root, creating nodes as
//! needed. Lookup walks a query domain the same way and stops on the first
//! label with no matching child, so the deepest node reached is always the
//! longest registered suffix of the query.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Result, TrieError};

/// Handle to a node in a [`DomainSuffixTrie`].
///
/// The tree is append-only (nodes are never removed or relabeled), so an id
/// stays valid for the lifetime of the trie that issued it. Using an id with
/// a different trie instance is a logic error and may panic on out-of-range
/// access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct NodeData<T> {
    /// One dot-separated segment, e.g. `"com"` or `"google"`. Empty only on
    /// the root, where it is never treated as a real segment.
    label: String,
    /// `None` only on the root; fixed at creation.
    parent: Option<NodeId>,
    /// Label -> child. Matching is exact-lookup driven, never iteration.
    children: HashMap<String, NodeId>,
    /// `None` until a caller explicitly attaches a payload. Intermediate
    /// nodes created on the way to a deeper suffix stay `None`.
    value: Option<T>,
}

/// Domain suffix trie with longest-match lookup.
///
/// Not synchronized; intended for single-threaded use or behind
/// [`SyncDomainSuffixTrie`](crate::sync::SyncDomainSuffixTrie).
pub struct DomainSuffixTrie<T> {
    nodes: Vec<NodeData<T>>,
}

impl<T> DomainSuffixTrie<T> {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                label: String::new(),
                parent: None,
                children: HashMap::new(),
                value: None,
            }],
        }
    }

    /// The root node. Returned by [`find_node`](Self::find_node) when no
    /// label of the query matches; its value is always absent.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Register a domain suffix and attach a payload to it.
    ///
    /// Labels are walked most-significant first (`com` before `google`),
    /// creating missing nodes along the way. Re-inserting an existing suffix
    /// overwrites its payload; that is intentional, not an error.
    ///
    /// No format validation is performed beyond rejecting the empty string:
    /// any string containing `.` is accepted, valid domain syntax or not.
    /// Fails before any mutation, so a rejected insert leaves the trie
    /// untouched.
    ///
    /// Returns the id of the node the suffix terminates on.
    pub fn insert(&mut self, suffix: &str, value: T) -> Result<NodeId> {
        if suffix.is_empty() {
            return Err(TrieError::EmptySuffix);
        }

        let mut current = self.root();
        for label in suffix.split('.').rev() {
            current = match self.nodes[current.0].children.get(label).copied() {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(NodeData {
                        label: label.to_string(),
                        parent: Some(current),
                        children: HashMap::new(),
                        value: None,
                    });
                    self.nodes[current.0].children.insert(label.to_string(), child);
                    trace!("created trie node for label {:?}", label);
                    child
                }
            };
        }

        if self.nodes[current.0].value.is_some() {
            debug!("overwriting payload for suffix {:?}", suffix);
        }
        self.nodes[current.0].value = Some(value);
        Ok(current)
    }

    /// Find the node of the longest registered suffix matching `domain`.
    ///
    /// Walks the query labels most-significant first and stops on the first
    /// label with no matching child, returning the last node reached. That
    /// node may be the root (nothing matched) or an intermediate node that
    /// never had a payload set; structural existence, not payload presence,
    /// determines match depth. Never fails.
    pub fn find_node(&self, domain: &str) -> NodeId {
        let mut current = self.root();
        for label in domain.split('.').rev() {
            match self.nodes[current.0].children.get(label) {
                Some(&child) => current = child,
                None => return current,
            }
        }
        current
    }

    /// Find the payload of the longest registered suffix matching `domain`.
    ///
    /// `None` means the walk ended on the root or on a node without an
    /// explicitly attached payload; the two outcomes are indistinguishable
    /// here, use [`find_node`](Self::find_node) to tell them apart.
    pub fn find_value(&self, domain: &str) -> Option<&T> {
        self.nodes[self.find_node(domain).0].value.as_ref()
    }

    /// The single label this node represents; empty for the root.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Reconstruct the full suffix this node represents by joining labels
    /// from the node up to the root, e.g. `"api.google.com"` for the node
    /// chain com -> google -> api. Empty for the root.
    pub fn path(&self, id: NodeId) -> String {
        let mut labels = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let data = &self.nodes[node.0];
            if data.label.is_empty() {
                break;
            }
            labels.push(data.label.as_str());
            current = data.parent;
        }
        labels.join(".")
    }

    /// Parent of this node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Child of this node with the given label, if any.
    pub fn child(&self, id: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[id.0].children.get(label).copied()
    }

    /// All children of this node, as a copy; the trie's structural map can
    /// only be mutated through [`insert`](Self::insert).
    pub fn children(&self, id: NodeId) -> HashMap<String, NodeId> {
        self.nodes[id.0].children.clone()
    }

    /// Payload attached to this node, if one was ever set.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes[id.0].value.as_ref()
    }

    /// Attach a payload to this node, returning the previous one.
    pub fn set_value(&mut self, id: NodeId, value: T) -> Option<T> {
        self.nodes[id.0].value.replace(value)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Default for DomainSuffixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_find() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", "google").unwrap();

        assert_eq!(trie.find_value("www.google.com"), Some(&"google"));
        assert_eq!(trie.find_value("google.com"), Some(&"google"));
        assert_eq!(trie.find_value("example.com"), None);
    }

    #[test]
    fn test_longest_match_wins() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", "A").unwrap();
        trie.insert("map.google.com", "B").unwrap();

        assert_eq!(trie.find_value("x.map.google.com"), Some(&"B"));
        assert_eq!(trie.find_value("map.google.com"), Some(&"B"));
        assert_eq!(trie.find_value("x.google.com"), Some(&"A"));
    }

    #[test]
    fn test_no_match_falls_back_to_root() {
        let trie: DomainSuffixTrie<&str> = DomainSuffixTrie::new();

        let node = trie.find_node("anything.com");
        assert_eq!(node, trie.root());
        assert_eq!(trie.value(node), None);
        assert_eq!(trie.find_value("anything.com"), None);
    }

    #[test]
    fn test_empty_domain_falls_back_to_root() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", 1).unwrap();

        assert_eq!(trie.find_node(""), trie.root());
        assert_eq!(trie.find_value(""), None);
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", "old").unwrap();
        trie.insert("google.com", "new").unwrap();

        assert_eq!(trie.find_value("google.com"), Some(&"new"));
    }

    #[test]
    fn test_path_round_trip() {
        let mut trie = DomainSuffixTrie::new();
        for suffix in ["com", "google.com", "api.google.com", "a.b.c.d.e"] {
            trie.insert(suffix, ()).unwrap();
            assert_eq!(trie.path(trie.find_node(suffix)), suffix);
        }
    }

    #[test]
    fn test_intermediate_node_without_payload_still_matches() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("api.google.com", "X").unwrap();

        // "google" exists structurally (created on the way to "api") but
        // never had a payload set; the match lands there, not on the root.
        let node = trie.find_node("foo.google.com");
        assert_ne!(node, trie.root());
        assert_eq!(trie.path(node), "google.com");
        assert_eq!(trie.value(node), None);
        assert_eq!(trie.find_value("foo.google.com"), None);
    }

    #[test]
    fn test_empty_suffix_rejected_without_mutation() {
        let mut trie = DomainSuffixTrie::new();
        let err = trie.insert("", "v").unwrap_err();

        assert_eq!(err, TrieError::EmptySuffix);
        assert_eq!(trie.node_count(), 1);
        assert!(trie.children(trie.root()).is_empty());
    }

    #[test]
    fn test_arbitrary_strings_accepted() {
        // No domain syntax validation beyond the empty check.
        let mut trie = DomainSuffixTrie::new();
        trie.insert("not a domain at all", 1).unwrap();
        trie.insert("weird..double.dot", 2).unwrap();

        assert_eq!(trie.find_value("not a domain at all"), Some(&1));
        assert_eq!(trie.find_value("weird..double.dot"), Some(&2));
    }

    #[test]
    fn test_case_sensitive_labels() {
        // Matching is exact; callers wanting case folding do it themselves.
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", 1).unwrap();

        assert_eq!(trie.find_value("www.GOOGLE.com"), None);
    }

    #[test]
    fn test_no_false_suffix_positives() {
        // "notgoogle.com" is not a label-wise suffix match of "google.com".
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", 1).unwrap();

        assert_eq!(trie.find_value("notgoogle.com"), None);
        assert_eq!(trie.find_value("google.org"), None);
    }

    #[test]
    fn test_child_and_parent_navigation() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", "google").unwrap();
        trie.insert("www.google.com", "google web").unwrap();

        let google = trie.find_node("google.com");
        let www = trie.child(google, "www").expect("www child");
        assert_eq!(trie.value(www), Some(&"google web"));
        assert_eq!(trie.label(www), "www");
        assert_eq!(trie.parent(www), Some(google));

        let com = trie.parent(google).expect("com parent");
        assert_eq!(trie.label(com), "com");
        assert_eq!(trie.parent(com), Some(trie.root()));
        assert_eq!(trie.parent(trie.root()), None);
    }

    #[test]
    fn test_children_returns_copy() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", 1).unwrap();

        let com = trie.find_node("com");
        let mut copy = trie.children(com);
        copy.clear();

        // Clearing the copy must not touch the tree.
        assert!(trie.child(com, "google").is_some());
    }

    #[test]
    fn test_set_value_returns_previous() {
        let mut trie = DomainSuffixTrie::new();
        let node = trie.insert("google.com", "old").unwrap();

        assert_eq!(trie.set_value(node, "new"), Some("old"));
        assert_eq!(trie.find_value("google.com"), Some(&"new"));

        // Intermediate nodes start without a payload.
        let com = trie.find_node("com");
        assert_eq!(trie.set_value(com, "tld"), None);
        assert_eq!(trie.find_value("x.com"), Some(&"tld"));
    }

    #[test]
    fn test_insert_returns_terminal_node() {
        let mut trie = DomainSuffixTrie::new();
        let node = trie.insert("api.google.com", "X").unwrap();

        assert_eq!(trie.path(node), "api.google.com");
        assert_eq!(node, trie.find_node("api.google.com"));
    }

    #[test]
    fn test_nodes_shared_between_overlapping_suffixes() {
        let mut trie = DomainSuffixTrie::new();
        trie.insert("google.com", 1).unwrap();
        trie.insert("map.google.com", 2).unwrap();
        trie.insert("baidu.com", 3).unwrap();

        // root + com + google + map + baidu
        assert_eq!(trie.node_count(), 5);
    }
}
