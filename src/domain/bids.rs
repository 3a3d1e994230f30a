
// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use crate::money::Amount;
use super::core::BidderName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: BidderName,
    pub amount: Amount,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.bidder, self.amount)
    }
}
