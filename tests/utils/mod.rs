use bid_board::domain::{Bid, BidObserver};
use bid_board::money::Amount;
use std::sync::{Arc, Mutex};
use time::{macros::datetime, OffsetDateTime};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_bid_time() -> OffsetDateTime {
    datetime!(2016-01-15 8:28 UTC)
}

pub fn dollars(value: f64) -> Amount {
    Amount::new(value)
}

pub fn alice_bid() -> Bid {
    Bid {
        bidder: "Alice".to_string(),
        amount: dollars(100.0),
        at: sample_bid_time(),
    }
}

pub fn bob_bid() -> Bid {
    Bid {
        bidder: "Bob".to_string(),
        amount: dollars(250.5),
        at: sample_bid_time(),
    }
}

/// Observer that records each notification's rendered text.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    notifications: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        RecordingObserver::default()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

impl BidObserver for RecordingObserver {
    fn on_bid_placed(&self, bid: &Bid) {
        self.notifications.lock().unwrap().push(bid.to_string());
    }
}

/// Observer that appends to a shared log with a tag, so tests can check
/// the order in which registered observers are notified.
pub struct TaggedObserver {
    tag: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl TaggedObserver {
    pub fn new(tag: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        TaggedObserver { tag, log }
    }
}

impl BidObserver for TaggedObserver {
    fn on_bid_placed(&self, bid: &Bid) {
        self.log.lock().unwrap().push(format!("{}: {}", self.tag, bid));
    }
}
