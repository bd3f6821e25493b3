//! Module that contains the implementation for the iterators

use crate::{node::Node, Ipv4Trie, KEY_BITS};

/// An iterator over all addresses of an [`Ipv4Trie`] in ascending order.
///
/// Each stack entry holds a node, the key bits consumed to reach it, and its depth. The one child
/// is pushed before the zero child, so the zero subtree is fully visited first. Terminal nodes only
/// exist at full depth and have no children, so emitting a node when it is popped yields the
/// addresses in ascending order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    nodes: Vec<(&'a Node, u32, u8)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some((cur, path, depth)) = self.nodes.pop() {
            if depth < KEY_BITS {
                let shift = KEY_BITS - 1 - depth;
                if let Some(one) = cur.one.as_deref() {
                    self.nodes.push((one, path | (1 << shift), depth + 1));
                }
                if let Some(zero) = cur.zero.as_deref() {
                    self.nodes.push((zero, path, depth + 1));
                }
            }
            if cur.terminal {
                return Some(path);
            }
        }
        None
    }
}

/// A consuming iterator over all addresses of an [`Ipv4Trie`] in ascending order.
#[derive(Clone, Debug)]
pub struct IntoIter {
    nodes: Vec<(Node, u32, u8)>,
}

impl Iterator for IntoIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some((cur, path, depth)) = self.nodes.pop() {
            let Node {
                zero,
                one,
                terminal,
            } = cur;
            if depth < KEY_BITS {
                let shift = KEY_BITS - 1 - depth;
                if let Some(one) = one {
                    self.nodes.push((*one, path | (1 << shift), depth + 1));
                }
                if let Some(zero) = zero {
                    self.nodes.push((*zero, path, depth + 1));
                }
            }
            if terminal {
                return Some(path);
            }
        }
        None
    }
}

impl IntoIterator for Ipv4Trie {
    type Item = u32;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: vec![(self.root, 0, 0)],
        }
    }
}

impl<'a> IntoIterator for &'a Ipv4Trie {
    type Item = u32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: vec![(&self.root, 0, 0)],
        }
    }
}
