//! Key derivation.
//!
//! This module contains the fingerprinting side:
//! - Hash primitives for the fast (xxh64) and digest (SHA-256) key spaces
//! - Apex/Host/Full/FullNoPage key generation

pub mod fingerprint;
pub mod hasher;

// Re-export main functionality
pub use fingerprint::{fingerprint, fp_bytes256, fp_hex256, fp_hex64, fp_uint64, key_text};
pub use hasher::{digest256, hash64, hex256, hex64, FAST64_SEED};
