use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::broker::ssid::Ssid;
use crate::broker::subscriber::Subscriber;
use crate::utils::{Error, Result};

/// A message handed to a subscriber.
///
/// - `ssid`: the subscription id the message matched
/// - `channel`: channel the message was published on, byte for byte
/// - `timestamp`: milliseconds since UNIX epoch, set when the delivery is queued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub ssid: Vec<u32>,
    pub channel: Vec<u8>,
    pub payload: Vec<u8>,
    pub timestamp: i64,
}

impl Delivery {
    fn new(ssid: &Ssid, channel: &[u8], payload: &[u8]) -> Self {
        Self {
            ssid: ssid.as_slice().to_vec(),
            channel: channel.to_vec(),
            payload: payload.to_vec(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Represents a locally connected client.
#[derive(Debug)]
pub struct Client {
    /// Unique identifier for the client connection.
    pub id: String,

    /// Channel drained by the connection's send loop.
    pub sender: UnboundedSender<Delivery>,
}

impl Client {
    pub fn new(sender: UnboundedSender<Delivery>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
        }
    }
}

impl Subscriber for Client {
    fn send(&self, ssid: &Ssid, channel: &[u8], payload: &[u8]) -> Result<()> {
        self.sender
            .send(Delivery::new(ssid, channel, payload))
            .map_err(|_| Error::SubscriberClosed(self.id.clone()))
    }
}

/// Forwards deliveries to a remote cluster node.
#[derive(Debug)]
pub struct PeerLink {
    pub peer: String,
    pub sender: UnboundedSender<Delivery>,
}

impl PeerLink {
    pub fn new(peer: impl Into<String>, sender: UnboundedSender<Delivery>) -> Self {
        Self {
            peer: peer.into(),
            sender,
        }
    }
}

impl Subscriber for PeerLink {
    fn send(&self, ssid: &Ssid, channel: &[u8], payload: &[u8]) -> Result<()> {
        self.sender
            .send(Delivery::new(ssid, channel, payload))
            .map_err(|_| Error::SubscriberClosed(self.peer.clone()))
    }
}
