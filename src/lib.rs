//! This crate provides a set of IPv4 addresses stored in a fixed-depth binary trie. Every lookup is
//! an exact match on a single address; there is no longest-prefix matching.
//!
//! # Description of the Tree
//!
//! An address is interpreted as its 32-bit big-endian integer (`a.b.c.d` becomes
//! `(a << 24) | (b << 16) | (c << 8) | d`). Each node has a zero child, a one child, and a terminal
//! flag. Starting at the root, we consume the bits of the key from the most significant (bit 31)
//! down to the least significant (bit 0). If the bit is not set, we take the zero branch, and
//! otherwise, we take the one branch. After 32 steps we reach the node that stands for the address,
//! and its terminal flag tells whether the address is part of the set.
//!
//! Since the depth is fixed by the key width, the tree never needs rebalancing, and every operation
//! visits at most 33 nodes independent of the number of stored addresses.
//!
//! # Operations on the tree
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | `O(32)`    |
//! | `contains`                 | `O(32)`    |
//! | `remove`                   | `O(32)`    |
//! | `first`, `last`            | `O(32)`    |
//! | `retain`, `node_count`     | `O(n)`     |
//! | `clear` (dropping nodes)   | `O(n)`     |
//! | `len` and `is_empty`       | `O(1)`     |
//!
//! [`Ipv4Trie::remove`] prunes every node that only existed to reach the removed address. Removing
//! an address therefore always exactly reverts the operation of [`Ipv4Trie::insert`], and the tree
//! structure is indistinguishable from a tree into which that address was never inserted.
//!
//! # Traversals
//!
//! Iterating over the trie visits the zero branch before the one branch, which yields the addresses
//! in ascending numeric order.
//!
//! # Textual addresses
//!
//! The [`addr`] module converts between the dotted-decimal notation and the integer key. Parsing is
//! strict and returns an [`AddrParseError`] instead of a sentinel value, so `255.255.255.255` is an
//! ordinary address.

#![deny(missing_docs)]

mod fmt;
mod iter;
mod node;
mod remove;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod fuzzing;

pub mod addr;
pub mod trie;

pub use addr::{AddrParseError, DottedQuad};
pub use iter::{IntoIter, Iter};
pub use trie::Ipv4Trie;

/// Number of bits in a key, and the depth of every terminal node.
pub const KEY_BITS: u8 = 32;

/// Check if the bit consumed at `depth` is set, where depth 0 consumes the most significant bit.
#[inline(always)]
pub(crate) fn bit_at(key: u32, depth: u8) -> bool {
    debug_assert!(depth < KEY_BITS);
    (key >> (KEY_BITS - 1 - depth)) & 1 == 1
}
