//! Data models for the SnowTrip application
//!
//! - Flight: priced flight offers shown on the itinerary
//! - Resort: ski resorts and skill levels
//! - Lodging: train routes and hotel quotes
//! - Trip: the submitted search and the assembled itinerary

pub mod flight;
pub mod lodging;
pub mod resort;
pub mod trip;

pub use flight::FlightOffer;
pub use lodging::{HotelOption, HotelQuote, TrainItinerary};
pub use resort::{Resort, SkillLevel};
pub use trip::{Itinerary, TripRequest};
