// src/domain/observers.rs
use super::bids::Bid;

/// Notification callback invoked once for each accepted bid.
pub trait BidObserver: Send {
    fn on_bid_placed(&self, bid: &Bid);
}
