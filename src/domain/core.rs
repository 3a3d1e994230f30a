// src/domain/core.rs
use thiserror::Error;

pub type BidderName = String;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Invalid Bid!")]
    InvalidBid,
}
