//! Hash primitives behind the two key spaces.
//!
//! - fast space: xxh64 with seed 0, 64-bit keys
//! - digest space: SHA-256, 256-bit keys

use sha2::{Digest, Sha256};
use xxhash_rust::xxh64::xxh64;

/// Seed of the fast key space. Changing it changes every stored key.
pub const FAST64_SEED: u64 = 0;

/// Hash bytes into the 64-bit fast key space.
pub fn hash64(data: &[u8]) -> u64 {
    xxh64(data, FAST64_SEED)
}

/// Hash bytes into the 256-bit digest key space.
pub fn digest256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Fixed-width (16 characters) lowercase hex of a fast key.
pub fn hex64(key: u64) -> String {
    format!("{:016x}", key)
}

/// Fixed-width (64 characters) lowercase hex of a digest key.
pub fn hex256(key: &[u8; 32]) -> String {
    hex::encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash64_empty_input() {
        // Reference value of XXH64("", 0)
        assert_eq!(hash64(b""), 0xef46db3751d8e999);
    }

    #[test]
    fn test_hash64_known_values() {
        assert_eq!(hash64(b"example.com"), 0x2883ba7dc9aa3289);
        assert_eq!(hash64(b"www.example.com"), 0x774337343878322e);
    }

    #[test]
    fn test_digest256_known_value() {
        assert_eq!(
            hex256(&digest256(b"example.com")),
            "a379a6f6eeafb9a55e378c118034e2751e682fab9f2d30ab13d2125586ce1947"
        );
    }

    #[test]
    fn test_hex_widths() {
        assert_eq!(hex64(0), "0000000000000000");
        assert_eq!(hex64(0xab), "00000000000000ab");
        assert_eq!(hex256(&[0u8; 32]).len(), 64);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash64(b"sub.example.com"), hash64(b"sub.example.com"));
        assert_eq!(digest256(b"sub.example.com"), digest256(b"sub.example.com"));
        assert_ne!(hash64(b"a.example.com"), hash64(b"b.example.com"));
    }
}
