use thiserror::Error;

/// Domain suffix trie error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("Domain suffix is empty")]
    EmptySuffix,
}

pub type Result<T> = std::result::Result<T, TrieError>;
