//! Domain Suffix Trie - longest-match domain suffix lookup for Rust
//!
//! This library answers, for any query domain, "which registered suffix is
//! the longest matching suffix of this domain, and what payload was attached
//! to it?" It provides:
//! - Longest-match suffix lookup over dot-separated labels
//! - Arbitrary payloads attached to registered suffixes
//! - A thread-safe wrapper for concurrent readers and a single writer
//!
//! # Example
//!
//! ```rust
//! use domain_suffix_trie::DomainSuffixTrie;
//!
//! let mut trie = DomainSuffixTrie::new();
//! trie.insert("google.com", "google main").unwrap();
//! trie.insert("map.google.com", "google maps").unwrap();
//! trie.insert("baidu.com", "baidu").unwrap();
//!
//! // Longest match wins
//! assert_eq!(trie.find_value("test.google.com"), Some(&"google main"));
//! assert_eq!(trie.find_value("test.map.google.com"), Some(&"google maps"));
//!
//! // The matched node knows the suffix it represents
//! let node = trie.find_node("test.baidu.com");
//! assert_eq!(trie.path(node), "baidu.com");
//! assert_eq!(trie.label(node), "baidu");
//! ```
//!
//! # Concurrent use
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use domain_suffix_trie::SyncDomainSuffixTrie;
//!
//! let trie = Arc::new(SyncDomainSuffixTrie::new());
//! trie.insert("google.com", "google".to_string()).unwrap();
//!
//! let reader = Arc::clone(&trie);
//! thread::spawn(move || {
//!     assert_eq!(reader.find_value("www.google.com"), Some("google".to_string()));
//! })
//! .join()
//! .unwrap();
//! ```
//!
//! # Matching Rules
//!
//! Labels are matched exactly, most-significant first (`com` before
//! `google`), with no backtracking. A lookup stops on the first label with
//! no matching child and returns the last node reached, which may be an
//! intermediate node that never had a payload set, or the root when nothing
//! matched at all. No domain syntax validation, case folding, or wildcard
//! matching is performed.

pub mod error;
pub mod sync;
pub mod trie;

// Re-export commonly used items
pub use error::{Result, TrieError};
pub use sync::SyncDomainSuffixTrie;
pub use trie::{DomainSuffixTrie, NodeId};
