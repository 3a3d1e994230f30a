// src/domain/controller.rs
use time::OffsetDateTime;
use crate::money::Amount;
use super::bids::Bid;
use super::core::Errors;
use super::observers::BidObserver;
use super::repository::BidRepository;
use super::validation::is_valid;

pub struct BidController {
    repository: BidRepository,
    observers: Vec<Box<dyn BidObserver>>,
}

impl Default for BidController {
    fn default() -> Self {
        Self::new()
    }
}

impl BidController {
    pub fn new() -> Self {
        BidController {
            repository: BidRepository::new(),
            observers: Vec::new(),
        }
    }

    /// Observers are notified in registration order; there is no removal.
    pub fn add_observer(&mut self, observer: Box<dyn BidObserver>) {
        self.observers.push(observer);
    }

    pub fn place_bid(
        &mut self,
        bidder: &str,
        amount: Amount,
        at: OffsetDateTime,
    ) -> Result<Bid, Errors> {
        let bid = Bid {
            bidder: bidder.trim().to_string(),
            amount,
            at,
        };

        if !is_valid(&bid) {
            return Err(Errors::InvalidBid);
        }

        self.repository.add_bid(bid.clone());

        for observer in &self.observers {
            observer.on_bid_placed(&bid);
        }

        Ok(bid)
    }

    pub fn all_bids(&self) -> &[Bid] {
        self.repository.all_bids()
    }
}
