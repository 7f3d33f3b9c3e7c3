//! Hash functions for ring placement
//!
//! The ring treats its hash function as an opaque capability: any
//! `fn(&[u8]) -> u32` that is deterministic and reasonably uniform works.
//! This module provides the built-in choices.

use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Hash function capability: maps a byte sequence to a 32-bit ring position
pub type HashFn = fn(&[u8]) -> u32;

/// SipHash-1-3 truncated to 32 bits
///
/// Fast with good distribution; the suggested default for new rings.
pub fn sip13(key: &[u8]) -> u32 {
    let mut hasher = SipHasher13::new();
    hasher.write(key);
    hasher.finish() as u32
}

/// xxHash32 with seed 0
pub fn xxh32(key: &[u8]) -> u32 {
    xxhash_rust::xxh32::xxh32(key, 0)
}

/// CRC32 (IEEE), the classic memcached/ketama placement hash
pub fn crc32(key: &[u8]) -> u32 {
    crc32fast::hash(key)
}
