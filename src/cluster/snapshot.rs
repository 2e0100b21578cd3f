//! Replication snapshots
//!
//! `Snapshot::capture` copies the registry under its lock and returns an
//! independent value. `run_snapshot_loop` is designed to be run as a
//! background task that hands a fresh snapshot to the gossip layer on every
//! tick.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::broker::counters::SubscriptionCounters;
use crate::broker::ssid::Ssid;
use crate::utils::Result;

/// An active subscription as replicated to other nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSubscription {
    pub ssid: Ssid,
    pub channel: Vec<u8>,
}

impl ClusterSubscription {
    pub fn new(ssid: Ssid, channel: Vec<u8>) -> Self {
        Self { ssid, channel }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Milliseconds since UNIX epoch at capture time.
    pub taken_at: i64,
    pub subscriptions: Vec<ClusterSubscription>,
}

impl Snapshot {
    pub fn capture(counters: &SubscriptionCounters) -> Self {
        Self {
            taken_at: chrono::Utc::now().timestamp_millis(),
            subscriptions: counters.all(),
        }
    }

    /// Order subscriptions by id then channel.
    pub fn sorted(mut self) -> Self {
        self.subscriptions.sort_by(|a, b| {
            a.ssid
                .as_slice()
                .cmp(b.ssid.as_slice())
                .then_with(|| a.channel.cmp(&b.channel))
        });
        self
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Shortest period between two snapshots.
const MIN_SNAPSHOT_INTERVAL: Duration = Duration::from_millis(1);

/// Emit a snapshot of `counters` every `every` until the receiver is dropped.
///
/// A zero `every` is raised to one millisecond.
pub async fn run_snapshot_loop(
    counters: Arc<SubscriptionCounters>,
    every: Duration,
    tx: mpsc::Sender<Snapshot>,
) {
    let mut ticker = tokio::time::interval(every.max(MIN_SNAPSHOT_INTERVAL));

    loop {
        ticker.tick().await;

        let snapshot = Snapshot::capture(&counters);
        debug!(subscriptions = snapshot.len(), "captured subscription snapshot");

        if tx.send(snapshot).await.is_err() {
            info!("Snapshot receiver closed, stopping snapshot loop");
            break;
        }
    }
}
