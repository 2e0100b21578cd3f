//! Subscription identifiers
//!
//! An `Ssid` is the contract followed by the query hashes of a parsed
//! channel. Element 0 is always present and is never part of the channel
//! path.
//!
//! `combined_hash` folds every element with XOR. The fold is order
//! insensitive, so distinct identifiers can share a hash: treat it as a
//! bucket key and compare full identifiers when an exact match matters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::broker::channel::Channel;
use crate::utils::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<u32>")]
pub struct Ssid(Vec<u32>);

impl Ssid {
    /// Build the identifier for `channel` under `contract`.
    pub fn new(contract: u32, channel: &Channel) -> Self {
        let query = channel.query();
        let mut parts = Vec::with_capacity(query.len() + 1);
        parts.push(contract);
        parts.extend_from_slice(query);
        Self(parts)
    }

    pub fn contract(&self) -> u32 {
        self.0[0]
    }

    /// Channel part of the identifier, without the contract.
    pub fn query(&self) -> &[u32] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Combine the identifier into a single hash, seeded with the contract.
    pub fn combined_hash(&self) -> u32 {
        self.query().iter().fold(self.contract(), |h, part| h ^ part)
    }
}

impl TryFrom<Vec<u32>> for Ssid {
    type Error = Error;

    fn try_from(parts: Vec<u32>) -> Result<Self, Self::Error> {
        if parts.is_empty() {
            return Err(Error::EmptySsid);
        }
        Ok(Self(parts))
    }
}

impl From<Ssid> for Vec<u32> {
    fn from(ssid: Ssid) -> Self {
        ssid.0
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
