use tokio::sync::broadcast;

use crate::data::models::{Tier, TierLoaded};

const EVENT_CAPACITY: usize = 32;

/// Broadcasts `tierLoaded` events to whoever is subscribed right now.
///
/// Late subscribers do not see earlier events.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<TierLoaded>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TierLoaded> {
        self.sender.subscribe()
    }

    pub fn publish(&self, tier: Tier, count: usize, error: Option<String>) {
        let event = TierLoaded { tier, count, error };
        // Err only means nobody is listening
        if self.sender.send(event).is_err() {
            log::debug!("No subscribers for {} load event", tier);
        }
    }
}
