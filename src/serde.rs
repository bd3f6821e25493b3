//! Serialization and Deserialization implementation

use std::net::Ipv4Addr;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::*;

impl Serialize for Ipv4Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(Ipv4Addr::from))
    }
}

impl<'de> Deserialize<'de> for Ipv4Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let addrs: Vec<Ipv4Addr> = Vec::deserialize(deserializer)?;
        Ok(addrs.into_iter().map(u32::from).collect())
    }
}
