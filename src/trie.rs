//! Implementation of the IPv4 trie.

use crate::{iter::Iter, node::Node, remove::Removal};

/// Set of IPv4 addresses, organized in a binary trie of fixed depth 32.
///
/// Addresses are represented by their 32-bit integer key (see [`crate::addr`] to convert from and
/// to the dotted-decimal notation). [`std::net::Ipv4Addr`] converts into the same key using
/// `u32::from`.
#[derive(Clone, Default)]
pub struct Ipv4Trie {
    pub(crate) root: Node,
    len: usize,
}

impl Ipv4Trie {
    /// Create a new, empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of addresses stored in `self`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie contains no addresses.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an address to the trie, creating all nodes on its path that do not exist yet.
    ///
    /// Returns whether the address was newly inserted. That is:
    /// - If the trie did not previously contain this address, `true` is returned.
    /// - If the trie already contained this address, `false` is returned.
    ///
    /// ```
    /// # use ipv4_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Ipv4Trie::new();
    /// assert!(trie.insert(addr::parse("192.168.1.1")?));
    /// assert!(!trie.insert(addr::parse("192.168.1.1")?));
    /// assert_eq!(trie.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, key: u32) -> bool {
        let node = self.root.get_or_create(key);
        let new = !node.terminal;
        node.terminal = true;
        if new {
            self.len += 1;
        }
        new
    }

    /// Check whether an address is present in the trie.
    ///
    /// ```
    /// # use ipv4_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Ipv4Trie::new();
    /// trie.insert(addr::parse("192.168.1.1")?);
    /// assert!(trie.contains(addr::parse("192.168.1.1")?));
    /// assert!(!trie.contains(addr::parse("192.168.1.2")?));
    /// # Ok(())
    /// # }
    /// ```
    pub fn contains(&self, key: u32) -> bool {
        self.root.get(key).map(|n| n.terminal).unwrap_or(false)
    }

    /// Removes an address from the trie. Returns whether the address was present.
    ///
    /// All nodes that only existed to reach `key` are dropped, so the tree looks as if `key` was
    /// never inserted. Removing an address that is not present does nothing.
    ///
    /// ```
    /// # use ipv4_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Ipv4Trie::new();
    /// let key = addr::parse("10.0.0.1")?;
    /// trie.insert(key);
    /// assert!(trie.remove(key));
    /// assert!(!trie.contains(key));
    /// assert!(!trie.remove(key));
    /// assert_eq!(trie.node_count(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(&mut self, key: u32) -> bool {
        // the root stays, even if it reports to be prunable.
        match self.root.remove(key, 0) {
            Removal::Missing => false,
            Removal::Removed | Removal::Prune => {
                self.len -= 1;
                true
            }
        }
    }

    /// Remove all addresses and drop all nodes except the root.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    /// Keep only the addresses that satisfy the given condition `f`. Addresses are visited in
    /// ascending order, and all nodes that become empty are dropped.
    ///
    /// ```
    /// # use ipv4_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: Ipv4Trie = ["10.0.0.1", "10.0.0.2", "192.168.0.1"]
    ///     .into_iter()
    ///     .map(addr::parse)
    ///     .collect::<Result<_, _>>()?;
    /// trie.retain(|key| key >> 24 == 10);
    /// assert_eq!(
    ///     trie.iter().map(addr::format).collect::<Vec<_>>(),
    ///     vec!["10.0.0.1", "10.0.0.2"]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(u32) -> bool,
    {
        let mut removed = 0;
        self.root.retain(0, 0, &mut f, &mut removed);
        self.len -= removed;
    }

    /// Get the smallest address in the trie.
    pub fn first(&self) -> Option<u32> {
        self.root.extreme(false)
    }

    /// Get the largest address in the trie.
    pub fn last(&self) -> Option<u32> {
        self.root.extreme(true)
    }

    /// Iterate over all addresses in ascending order.
    ///
    /// ```
    /// # use ipv4_trie::*;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = Ipv4Trie::new();
    /// trie.insert(addr::parse("140.0.0.1")?);
    /// trie.insert(addr::parse("5.80.35.6")?);
    /// trie.insert(addr::parse("10.8.2.5")?);
    /// assert_eq!(
    ///     trie.iter().map(addr::format).collect::<Vec<_>>(),
    ///     vec!["5.80.35.6", "10.8.2.5", "140.0.0.1"]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Number of nodes currently allocated in the trie, including the root. An empty trie has
    /// exactly one node.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl PartialEq for Ipv4Trie {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Ipv4Trie {}

impl FromIterator<u32> for Ipv4Trie {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl Extend<u32> for Ipv4Trie {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
