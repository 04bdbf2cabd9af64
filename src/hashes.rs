use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// Content hashes of every image saved during the current run.
///
/// The set is moved into each fetch and handed back afterwards, so the
/// caller always owns it between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenHashes {
    hashes: HashSet<String>,
}

impl SeenHashes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    pub fn insert(&mut self, hash: String) -> bool {
        self.hashes.insert(hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// SHA-256 of the full body as lowercase hex.
pub fn content_hash(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::{content_hash, SeenHashes};

    #[test]
    fn test_content_hash() {
        let hash = content_hash(b"abc");

        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
    }

    #[test]
    fn test_seen_hashes() {
        let mut seen = SeenHashes::new();

        assert!(seen.is_empty());

        assert!(seen.insert(content_hash(b"first")));
        assert!(!seen.insert(content_hash(b"first")));
        assert!(seen.insert(content_hash(b"second")));

        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&content_hash(b"first")));
        assert!(!seen.contains(&content_hash(b"third")));
    }
}
