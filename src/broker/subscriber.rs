//! Subscriber capability and subscriber sets
//!
//! A `Subscriber` is anything the broker can hand a message to. Subscribers
//! are compared by identity only: two handles are the same subscriber when
//! they point at the same allocation.
//!
//! Concurrency note: `Subscribers` has no internal locking. Whoever owns the
//! set (for example a routing trie node) must serialize mutations.

use std::fmt;
use std::sync::Arc;

use crate::broker::ssid::Ssid;
use crate::utils::Result;

pub trait Subscriber: Send + Sync {
    /// Deliver `payload` published on `channel` under `ssid`.
    fn send(&self, ssid: &Ssid, channel: &[u8], payload: &[u8]) -> Result<()>;
}

/// Identity comparison of two subscriber handles.
///
/// Only the data pointers are compared; the vtable half of the fat pointer
/// can differ between codegen units for the same object.
pub fn same_subscriber(a: &Arc<dyn Subscriber>, b: &Arc<dyn Subscriber>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// A set of subscribers which can contain only unique handles.
#[derive(Clone, Default)]
pub struct Subscribers {
    members: Vec<Arc<dyn Subscriber>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber unless it is already a member.
    ///
    /// Returns `true` if the subscriber was added.
    pub fn add_unique(&mut self, value: Arc<dyn Subscriber>) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.members.push(value);
        true
    }

    pub fn contains(&self, value: &Arc<dyn Subscriber>) -> bool {
        self.members.iter().any(|m| same_subscriber(m, value))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Subscriber>> {
        self.members.iter()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.members.len())
            .finish()
    }
}
