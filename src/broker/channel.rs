//! Parsed channel
//!
//! The channel parser lives outside this crate. What arrives here is the
//! textual channel together with the hashes of its query tokens, ordered
//! from the most general segment to the most specific one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    channel: String,
    query: Vec<u32>,
}

impl Channel {
    /// Wrap an already validated channel and its token hashes.
    pub fn new(channel: impl Into<String>, query: Vec<u32>) -> Self {
        Self {
            channel: channel.into(),
            query,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn query(&self) -> &[u32] {
        &self.query
    }
}
