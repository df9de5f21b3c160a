//! Content Hash Value Object
//!
//! SHA-256 of a text, used for source change detection and operation ids.

use std::fmt;

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Compute the hash of `content`
    pub fn from_content(content: &str) -> Self {
        let hash = Sha256::digest(content.as_bytes());
        Self(format!("{:x}", hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable() {
        assert_eq!(
            ContentHash::from_content("hello world"),
            ContentHash::from_content("hello world")
        );
        assert_ne!(
            ContentHash::from_content("hello world"),
            ContentHash::from_content("different content")
        );
    }

    #[test]
    fn hash_is_hex_sha256() {
        let hash = ContentHash::from_content("");
        assert_eq!(
            hash.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
