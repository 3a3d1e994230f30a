// src/domain/mod.rs
pub mod bids;
pub mod controller;
pub mod core;
pub mod observers;
pub mod repository;
pub mod validation;

pub use self::bids::*;
pub use self::controller::*;
pub use self::core::*;
pub use self::observers::*;
pub use self::repository::*;
pub use self::validation::*;
