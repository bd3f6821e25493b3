//! Code to remove entries from the trie.

use super::*;
use crate::node::Node;

impl Node {
    /// Recursively search and remove `key` from the subtree below `self`, where `self` sits at
    /// `depth` (the number of bits consumed so far). Children that become empty are dropped on the
    /// way back up.
    pub(crate) fn remove(&mut self, key: u32, depth: u8) -> Removal {
        if depth == KEY_BITS {
            if !self.terminal {
                return Removal::Missing;
            }
            self.terminal = false;
            return Removal::Removed.or_prune(self);
        }

        let slot = self.child_slot(bit_at(key, depth));
        let Some(child) = slot.as_mut() else {
            return Removal::Missing;
        };
        match child.remove(key, depth + 1) {
            Removal::Missing => Removal::Missing,
            Removal::Removed => Removal::Removed,
            Removal::Prune => {
                *slot = None;
                Removal::Removed.or_prune(self)
            }
        }
    }

    /// Recursively drop all terminal nodes whose key does not satisfy `f`. `path` holds the bits
    /// consumed so far. Returns `true` if `self` became prunable, and adds the number of removed
    /// keys to `removed`.
    pub(crate) fn retain<F>(&mut self, path: u32, depth: u8, f: &mut F, removed: &mut usize) -> bool
    where
        F: FnMut(u32) -> bool,
    {
        if depth == KEY_BITS {
            if self.terminal && !f(path) {
                self.terminal = false;
                *removed += 1;
            }
            return self.is_prunable();
        }

        let shift = KEY_BITS - 1 - depth;
        for (one, path) in [(false, path), (true, path | (1 << shift))] {
            let slot = self.child_slot(one);
            if let Some(child) = slot.as_mut() {
                if child.retain(path, depth + 1, f, removed) {
                    *slot = None;
                }
            }
        }
        self.is_prunable()
    }
}

/// The outcome of removing a key from a subtree, reported to the parent of that subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The key was not part of the subtree. Nothing has changed.
    Missing,
    /// The key was removed, and the node must be kept.
    Removed,
    /// The key was removed, and the node is now empty. The parent must drop it.
    Prune,
}

impl Removal {
    fn or_prune(self, node: &Node) -> Self {
        if node.is_prunable() {
            Removal::Prune
        } else {
            self
        }
    }
}
