//! Trip search request and assembled itinerary

use super::{FlightOffer, HotelQuote, Resort, TrainItinerary};
use crate::SnowTripError;
use crate::flights::FlightLookup;

/// A validated search submitted through the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Origin airport code
    pub origin: String,
    /// Destination airport code
    pub destination: String,
    /// Departure date as submitted (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Skill label as submitted
    pub skill: String,
    /// Trip budget in pounds
    pub budget: i64,
}

impl TripRequest {
    /// Build a request from raw form fields. A budget that is not an
    /// integer is rejected.
    pub fn from_fields(
        origin: &str,
        destination: &str,
        date: &str,
        skill: &str,
        budget: &str,
    ) -> Result<Self, SnowTripError> {
        Ok(Self {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            date: date.trim().to_string(),
            skill: skill.to_string(),
            budget: parse_budget(budget)?,
        })
    }
}

/// Parse the budget field as a whole number of pounds
pub fn parse_budget(raw: &str) -> Result<i64, SnowTripError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| SnowTripError::validation(format!("budget '{raw}' is not an integer: {e}")))
}

/// Everything planned for one submitted search
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub request: TripRequest,
    pub flights: FlightLookup,
    /// First resort in catalog order matching skill and budget
    pub resort: Option<&'static Resort>,
    pub train: Option<&'static TrainItinerary>,
    pub hotels: Vec<HotelQuote>,
    pub tip: String,
}

impl Itinerary {
    /// Flight offers to display, live or fallback
    #[must_use]
    pub fn flight_offers(&self) -> &[FlightOffer] {
        self.flights.offers()
    }
}
