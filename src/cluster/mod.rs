//! The `cluster` module is the boundary towards cluster replication.
//!
//! It turns the node's subscription counters into serializable snapshots
//! of active interest. Snapshots carry subscription ids and channels only;
//! delivery targets never leave the node.

pub mod snapshot;

pub use snapshot::{ClusterSubscription, Snapshot, run_snapshot_loop};
