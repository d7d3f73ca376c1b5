// Hero banner rotation: the first few trending titles, cycled on a timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::action::Action;
use crate::api::models::CatalogItem;

/// Up to `capacity` items and the index currently on screen.
#[derive(Debug, Clone)]
pub struct HeroRotation {
    items: Vec<CatalogItem>,
    index: usize,
    capacity: usize,
}

impl HeroRotation {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            capacity,
        }
    }

    /// Take the leading items of a fresh trending list and start over at 0.
    pub fn reset(&mut self, trending: &[CatalogItem]) {
        self.items = trending.iter().take(self.capacity).cloned().collect();
        self.index = 0;
    }

    pub fn current(&self) -> Option<&CatalogItem> {
        self.items.get(self.index)
    }

    /// Step to the next item, wrapping around. No-op while empty.
    pub fn advance(&mut self) -> Option<&CatalogItem> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Send `Action::RotateHero` every `period`, first tick one period from now.
pub fn spawn_ticker(tx: UnboundedSender<Action>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(Action::RotateHero).is_err() {
                break;
            }
        }
    })
}
