//! `SnowTrip` - Ski holiday planner
//!
//! This library provides the flight price client, the static resort, train
//! and hotel catalogs, the trip planner combining them, and the web page
//! that serves the search form and itinerary.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flights;
pub mod logging;
pub mod models;
pub mod planner;
pub mod render;
pub mod web;

// Re-export core types for public API
pub use catalog::{HotelCatalog, ResortCatalog, TipAdvisor, TrainCatalog};
pub use config::SnowTripConfig;
pub use error::SnowTripError;
pub use flights::{FallbackReason, FlightLookup, FlightPriceClient, FlightQuery, FlightSource};
pub use models::{
    FlightOffer, HotelQuote, Itinerary, Resort, SkillLevel, TrainItinerary, TripRequest,
};
pub use planner::{PageView, TripPlanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
