//! The `client` module provides the concrete delivery targets of a node.
//!
//! - `Client`: a local connection, identified by a UUID
//! - `PeerLink`: forwards deliveries to another cluster node
//!
//! Both push a `Delivery` into an unbounded channel drained by the
//! transport layer, and both implement `broker::Subscriber`.

pub mod pubsub_client;

pub use pubsub_client::{Client, Delivery, PeerLink};
