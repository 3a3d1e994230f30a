// src/domain/repository.rs
use super::bids::Bid;

/// Append-only in-memory store of accepted bids.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BidRepository {
    bids: Vec<Bid>,
}

impl BidRepository {
    pub fn new() -> Self {
        BidRepository { bids: Vec::new() }
    }

    /// Appends unconditionally; bids are validated before they get here.
    pub fn add_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// All accepted bids in acceptance order.
    pub fn all_bids(&self) -> &[Bid] {
        &self.bids
    }
}
