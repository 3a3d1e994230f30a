use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use std::sync::{Arc, Mutex};

use crate::domain::{Bid, BidController, BidderName};
use crate::money::Amount;

pub type AppState = Arc<Mutex<BidController>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Raw form input; the amount stays text until the handler parses it.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceBidRequest {
    pub bidder: String,
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct BidItem {
    pub bidder: BidderName,
    pub amount: Amount,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl From<&Bid> for BidItem {
    fn from(bid: &Bid) -> Self {
        BidItem {
            bidder: bid.bidder.clone(),
            amount: bid.amount,
            at: bid.at,
        }
    }
}
