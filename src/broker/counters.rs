//! Subscription counters
//!
//! `SubscriptionCounters` tracks how many subscription events are active per
//! subscription id so the broker and the replication layer can tell whether
//! any local interest exists without walking the routing trie.
//!
//! Concurrency and usage notes:
//! - One registry is created at node start-up and shared as
//!   `Arc<SubscriptionCounters>`. Every operation takes the same exclusive
//!   lock for its whole duration; nothing inside the critical section does
//!   I/O.
//! - Entries are keyed by `Ssid::combined_hash`. Two different ids with the
//!   same hash share one counter. The first id seen is kept on the entry, so
//!   a merge is detected, logged and counted, but it is not undone.
//! - The registry counts events, not subscribers: incrementing twice for
//!   the same subscriber needs two decrements.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::broker::ssid::Ssid;
use crate::cluster::ClusterSubscription;

#[derive(Debug)]
struct Counter {
    ssid: Ssid,
    channel: String,
    count: usize,
}

#[derive(Debug, Default)]
pub struct SubscriptionCounters {
    counters: Mutex<HashMap<u32, Counter>>,
    collisions: AtomicU64,
}

impl SubscriptionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more subscription for `ssid`.
    ///
    /// Returns `true` when this is the first active subscription for the
    /// bucket.
    pub fn increment(&self, ssid: &Ssid, channel: &str) -> bool {
        let key = ssid.combined_hash();
        let mut counters = self.counters.lock();

        let counter = counters.entry(key).or_insert_with(|| Counter {
            ssid: ssid.clone(),
            channel: channel.to_string(),
            count: 0,
        });

        if counter.ssid != *ssid {
            self.collisions.fetch_add(1, Ordering::Relaxed);
            warn!(
                hash = key,
                existing = %counter.ssid,
                incoming = %ssid,
                "subscription ids share a counter bucket"
            );
        }

        counter.count += 1;
        if counter.count == 1 {
            debug!(ssid = %ssid, channel, "first subscription");
            return true;
        }
        false
    }

    /// Release one subscription for `ssid`.
    ///
    /// The entry is removed once its count drops to zero; decrementing an
    /// unknown id does nothing. Returns `true` when the entry was removed.
    pub fn decrement(&self, ssid: &Ssid) -> bool {
        let mut counters = self.counters.lock();

        let key = ssid.combined_hash();
        match counters.entry(key) {
            Entry::Occupied(mut entry) => {
                let counter = entry.get_mut();
                if counter.ssid != *ssid {
                    self.collisions.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        hash = key,
                        existing = %counter.ssid,
                        incoming = %ssid,
                        "releasing a counter bucket owned by another subscription id"
                    );
                }
                counter.count = counter.count.saturating_sub(1);
                if counter.count == 0 {
                    let removed = entry.remove();
                    debug!(ssid = %removed.ssid, channel = %removed.channel, "last subscription gone");
                    return true;
                }
                false
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Copy every active subscription out of the registry.
    ///
    /// The order is unspecified.
    pub fn all(&self) -> Vec<ClusterSubscription> {
        let counters = self.counters.lock();
        counters
            .values()
            .map(|c| ClusterSubscription::new(c.ssid.clone(), c.channel.as_bytes().to_vec()))
            .collect()
    }

    /// Current count of the bucket `ssid` falls into, `0` when absent.
    pub fn count(&self, ssid: &Ssid) -> usize {
        self.counters
            .lock()
            .get(&ssid.combined_hash())
            .map_or(0, |c| c.count)
    }

    /// Number of active buckets.
    pub fn len(&self) -> usize {
        self.counters.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of increments and decrements that landed on a bucket owned by
    /// a different id.
    pub fn collisions(&self) -> u64 {
        self.collisions.load(Ordering::Relaxed)
    }
}
