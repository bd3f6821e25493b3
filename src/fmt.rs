//! Formatting implementation for the Ipv4Trie

use std::fmt::{Debug, Formatter, Result};

use super::*;

impl Debug for Ipv4Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_set()
            .entries(self.iter().map(DebugAddr))
            .finish()
    }
}

struct DebugAddr(u32);

impl Debug for DebugAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        std::fmt::Display::fmt(&DottedQuad(self.0), f)
    }
}
