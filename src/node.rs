//! The node type of the trie.

use crate::{bit_at, KEY_BITS};

#[derive(Clone, Default, Debug)]
pub(crate) struct Node {
    pub(crate) zero: Option<Box<Node>>,
    pub(crate) one: Option<Box<Node>>,
    pub(crate) terminal: bool,
}

impl Node {
    /// Get the child of a node, either the one or the zero branch.
    #[inline(always)]
    pub(crate) fn child(&self, one: bool) -> Option<&Node> {
        if one {
            self.one.as_deref()
        } else {
            self.zero.as_deref()
        }
    }

    /// Get the slot that owns the child on the given branch.
    #[inline(always)]
    pub(crate) fn child_slot(&mut self, one: bool) -> &mut Option<Box<Node>> {
        if one {
            &mut self.one
        } else {
            &mut self.zero
        }
    }

    /// A node that is neither terminal nor has any children must be removed from its parent.
    #[inline(always)]
    pub(crate) fn is_prunable(&self) -> bool {
        !self.terminal && self.zero.is_none() && self.one.is_none()
    }

    /// Walk down to the node that represents `key`, if all nodes on the way exist.
    pub(crate) fn get(&self, key: u32) -> Option<&Node> {
        let mut cur = self;
        for depth in 0..KEY_BITS {
            cur = cur.child(bit_at(key, depth))?;
        }
        Some(cur)
    }

    /// Walk down to the node that represents `key`, creating all missing nodes on the way.
    pub(crate) fn get_or_create(&mut self, key: u32) -> &mut Node {
        let mut cur = self;
        for depth in 0..KEY_BITS {
            cur = &mut **cur
                .child_slot(bit_at(key, depth))
                .get_or_insert_with(Default::default);
        }
        cur
    }

    /// Follow the zero branch (or the one branch if `one` is set) whenever it exists, and return
    /// the key of the first terminal node reached.
    pub(crate) fn extreme(&self, one: bool) -> Option<u32> {
        let mut cur = self;
        let mut key = 0;
        for depth in 0..KEY_BITS {
            let bit = if cur.child(one).is_some() { one } else { !one };
            cur = cur.child(bit)?;
            if bit {
                key |= 1 << (KEY_BITS - 1 - depth);
            }
        }
        cur.terminal.then_some(key)
    }

    /// Count this node and all of its descendants.
    pub(crate) fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.zero.as_deref());
            stack.extend(node.one.as_deref());
        }
        count
    }
}
