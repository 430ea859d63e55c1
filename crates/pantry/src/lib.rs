//! Shelf-life prediction and preservation advice.

mod expiration;
mod preservation;
mod shelf_life;

pub use expiration::{ExpirationPrediction, ExpirationTracker, TrackingReport, Urgency};
pub use preservation::{PreservationGroup, preservation_strategies};
pub use shelf_life::StorageLocation;
