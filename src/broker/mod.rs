//! Subscription identity and bookkeeping.
//!
//! - `ssid`: subscription ids and their combined hash
//! - `subscriber`: the delivery capability and unique subscriber sets
//! - `subscription`: the (id, channel, subscriber) transfer value
//! - `counters`: the shared, reference-counted registry of active interest

pub mod channel;
pub mod counters;
pub mod ssid;
pub mod subscriber;
pub mod subscription;

pub use channel::Channel;
pub use counters::SubscriptionCounters;
pub use ssid::Ssid;
pub use subscriber::{Subscriber, Subscribers, same_subscriber};
pub use subscription::Subscription;

#[cfg(test)]
mod tests;
