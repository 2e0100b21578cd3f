use std::fmt;
use std::sync::Arc;

use crate::broker::ssid::Ssid;
use crate::broker::subscriber::Subscriber;

/// A topic subscription as handed over by the parsing layer.
#[derive(Clone)]
pub struct Subscription {
    ssid: Ssid,
    channel: String,
    subscriber: Arc<dyn Subscriber>,
}

impl Subscription {
    pub fn new(ssid: Ssid, channel: impl Into<String>, subscriber: Arc<dyn Subscriber>) -> Self {
        Self {
            ssid,
            channel: channel.into(),
            subscriber,
        }
    }

    pub fn ssid(&self) -> &Ssid {
        &self.ssid
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn subscriber(&self) -> &Arc<dyn Subscriber> {
        &self.subscriber
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("ssid", &self.ssid)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}
