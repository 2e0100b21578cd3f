use super::{Channel, Ssid, Subscriber, Subscribers, Subscription, SubscriptionCounters};
use crate::client::Client;
use crate::cluster::ClusterSubscription;
use proptest::prelude::*;
use std::sync::Arc;
use tokio::sync::mpsc;

fn ssid(contract: u32, query: &[u32]) -> Ssid {
    Ssid::new(contract, &Channel::new("test/", query.to_vec()))
}

fn subscriber() -> Arc<dyn Subscriber> {
    let (tx, _) = mpsc::unbounded_channel();
    Arc::new(Client::new(tx))
}

#[test]
fn test_ssid_new() {
    let s = ssid(1, &[42, 7]);
    assert_eq!(s.as_slice(), &[1, 42, 7]);
    assert_eq!(s.contract(), 1);
    assert_eq!(s.query(), &[42, 7]);
}

#[test]
fn test_ssid_without_query() {
    let s = ssid(9, &[]);
    assert_eq!(s.as_slice(), &[9]);
    assert!(s.query().is_empty());
    assert_eq!(s.combined_hash(), 9);
}

#[test]
fn test_ssid_combined_hash() {
    let s = ssid(1, &[42]);
    assert_eq!(s.combined_hash(), 1 ^ 42);

    let s = ssid(0b1100, &[0b1010, 0b0110]);
    assert_eq!(s.combined_hash(), 0);
}

#[test]
fn test_ssid_equality_is_structural() {
    assert_eq!(ssid(1, &[2, 3]), ssid(1, &[2, 3]));
    assert_ne!(ssid(1, &[2, 3]), ssid(1, &[3, 2]));
    assert_ne!(ssid(1, &[2, 3]), ssid(2, &[2, 3]));
    // same hash, different ids
    assert_eq!(ssid(1, &[2, 3]).combined_hash(), ssid(1, &[3, 2]).combined_hash());
}

#[test]
fn test_ssid_serde_rejects_empty() {
    let s: Ssid = serde_json::from_str("[1,42]").unwrap();
    assert_eq!(s, ssid(1, &[42]));
    assert_eq!(serde_json::to_string(&s).unwrap(), "[1,42]");

    assert!(serde_json::from_str::<Ssid>("[]").is_err());
    assert!(matches!(
        Ssid::try_from(Vec::new()),
        Err(crate::utils::Error::EmptySsid)
    ));
}

#[test]
fn test_ssid_display() {
    assert_eq!(ssid(1, &[42]).to_string(), "[1, 42]");
}

#[test]
fn test_subscribers_add_unique() {
    let a = subscriber();
    let b = subscriber();
    let mut set = Subscribers::new();

    assert!(set.add_unique(a.clone()));
    assert!(!set.add_unique(a.clone()));
    assert!(set.add_unique(b.clone()));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
    assert!(set.contains(&b));
}

#[test]
fn test_subscribers_compare_by_identity() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let a: Arc<dyn Subscriber> = Arc::new(Client::new(tx.clone()));
    let b: Arc<dyn Subscriber> = Arc::new(Client::new(tx));
    let mut set = Subscribers::new();

    set.add_unique(a);
    // same sender, different handle
    assert!(!set.contains(&b));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_subscription_accessors() {
    let sub = subscriber();
    let subscription = Subscription::new(ssid(1, &[42]), "a/b/", sub.clone());

    assert_eq!(subscription.ssid(), &ssid(1, &[42]));
    assert_eq!(subscription.channel(), "a/b/");
    assert!(super::same_subscriber(subscription.subscriber(), &sub));
}

#[test]
fn test_counters_increment_then_all() {
    let counters = SubscriptionCounters::new();
    assert!(counters.increment(&ssid(1, &[42]), "a/b"));

    let all = counters.all();
    assert_eq!(
        all,
        vec![ClusterSubscription::new(ssid(1, &[42]), b"a/b".to_vec())]
    );
}

#[test]
fn test_counters_increment_then_decrement_removes() {
    let counters = SubscriptionCounters::new();
    let s = ssid(1, &[42]);

    counters.increment(&s, "a/b");
    assert!(counters.decrement(&s));

    assert!(counters.is_empty());
    assert_eq!(counters.count(&s), 0);
    assert!(counters.all().is_empty());
}

#[test]
fn test_counters_reference_counting() {
    let counters = SubscriptionCounters::new();
    let s = ssid(1, &[42]);

    assert!(counters.increment(&s, "a/b"));
    assert!(!counters.increment(&s, "a/b"));
    assert!(!counters.decrement(&s));

    assert_eq!(counters.count(&s), 1);
    assert_eq!(counters.all().len(), 1);

    assert!(counters.decrement(&s));
    assert!(counters.all().is_empty());
}

#[test]
fn test_counters_decrement_unknown_is_noop() {
    let counters = SubscriptionCounters::new();
    assert!(!counters.decrement(&ssid(1, &[42])));
    assert!(counters.all().is_empty());

    counters.increment(&ssid(1, &[7]), "x");
    assert!(!counters.decrement(&ssid(1, &[42])));
    assert_eq!(counters.count(&ssid(1, &[7])), 1);
}

#[test]
fn test_counters_snapshot_is_independent() {
    let counters = SubscriptionCounters::new();
    let s = ssid(1, &[42]);
    counters.increment(&s, "a/b");

    let snapshot = counters.all();
    counters.decrement(&s);
    counters.increment(&ssid(2, &[5]), "c");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].ssid, s);
    assert_eq!(snapshot[0].channel, b"a/b".to_vec());
}

#[test]
fn test_counters_collision_shares_bucket() {
    let counters = SubscriptionCounters::new();
    let first = ssid(1, &[2, 3]);
    let second = ssid(1, &[3, 2]);

    assert!(counters.increment(&first, "two/three"));
    assert!(!counters.increment(&second, "three/two"));
    assert_eq!(counters.collisions(), 1);

    // the bucket keeps the id and channel it was created with
    let all = counters.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].ssid, first);
    assert_eq!(all[0].channel, b"two/three".to_vec());

    counters.decrement(&second);
    assert_eq!(counters.count(&first), 1);
    counters.decrement(&second);
    assert!(counters.is_empty());
    assert_eq!(counters.collisions(), 3);
}

#[test]
fn test_counters_foreign_decrement_is_counted() {
    let counters = SubscriptionCounters::new();
    let owner = ssid(1, &[2, 3]);
    let other = ssid(1, &[3, 2]);

    counters.increment(&owner, "two/three");
    assert_eq!(counters.collisions(), 0);

    // releases the owner's only subscription
    assert!(counters.decrement(&other));
    assert_eq!(counters.collisions(), 1);
    assert_eq!(counters.count(&owner), 0);

    // matching id on an absent bucket is not a collision
    assert!(!counters.decrement(&owner));
    assert_eq!(counters.collisions(), 1);
}

#[test]
fn test_counters_concurrent_balanced_operations() {
    let counters = Arc::new(SubscriptionCounters::new());
    let s = ssid(1, &[42, 43]);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let counters = counters.clone();
            let s = s.clone();
            scope.spawn(move || {
                for _ in 0..1000 {
                    counters.increment(&s, "a/b");
                    counters.all();
                    counters.decrement(&s);
                }
            });
        }
    });

    assert!(counters.is_empty());
    assert_eq!(counters.count(&s), 0);
}

#[test]
fn test_counters_concurrent_increments_are_not_lost() {
    let counters = Arc::new(SubscriptionCounters::new());
    let s = ssid(3, &[1]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let counters = counters.clone();
            let s = s.clone();
            scope.spawn(move || {
                for _ in 0..500 {
                    counters.increment(&s, "c");
                }
            });
        }
    });

    assert_eq!(counters.count(&s), 2000);
    assert_eq!(counters.len(), 1);
}

proptest! {
    #[test]
    fn prop_combined_hash_is_stable(contract in any::<u32>(), query in prop::collection::vec(any::<u32>(), 0..8)) {
        let s = ssid(contract, &query);
        prop_assert_eq!(s.combined_hash(), s.combined_hash());
        prop_assert_eq!(s.combined_hash(), s.clone().combined_hash());
    }

    #[test]
    fn prop_combined_hash_ignores_order(contract in any::<u32>(), query in prop::collection::vec(any::<u32>(), 0..8)) {
        let mut reversed = query.clone();
        reversed.reverse();
        prop_assert_eq!(ssid(contract, &query).combined_hash(), ssid(contract, &reversed).combined_hash());
    }

    #[test]
    fn prop_subscribers_hold_distinct_handles(picks in prop::collection::vec(0usize..5, 0..40)) {
        let pool: Vec<_> = (0..5).map(|_| subscriber()).collect();
        let mut set = Subscribers::new();
        for &i in &picks {
            set.add_unique(pool[i].clone());
        }

        let mut distinct = picks.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(set.len(), distinct.len());
    }

    #[test]
    fn prop_counters_reference_counting(n in 1usize..50) {
        let counters = SubscriptionCounters::new();
        let s = ssid(1, &[42]);

        for _ in 0..n {
            counters.increment(&s, "a/b");
        }
        for _ in 1..n {
            prop_assert!(!counters.decrement(&s));
        }
        prop_assert_eq!(counters.count(&s), 1);
        prop_assert_eq!(counters.all().len(), 1);

        prop_assert!(counters.decrement(&s));
        prop_assert!(counters.is_empty());
    }
}
