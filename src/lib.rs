//! # Subledger
//!
//! `subledger` is the subscription identity and reference counting core of
//! a publish/subscribe broker node. It derives compact subscription ids from
//! parsed channels, keeps unique subscriber sets, and counts active
//! subscriptions so the node and its cluster layer know where local interest
//! exists.
//!
//! ## Core Modules
//!
//! - `broker`: subscription ids, subscriber sets and the shared counters registry.
//! - `client`: concrete subscribers (local connections and cluster peer links).
//! - `cluster`: serializable snapshots of active interest for replication.
//! - `config`: loading and merging node configuration.
//! - `utils`: shared error type and logging setup.

pub mod broker;
pub mod client;
pub mod cluster;
pub mod config;
pub mod utils;
