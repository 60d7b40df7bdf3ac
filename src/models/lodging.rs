//! Train and hotel models

use super::flight::format_price;

/// Rail connection from London to a resort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainItinerary {
    pub route: &'static str,
    /// Display price, e.g. "£95"
    pub price: &'static str,
    pub duration: &'static str,
}

/// Static catalog entry for a hotel
#[derive(Debug, Clone, PartialEq)]
pub struct HotelOption {
    pub name: &'static str,
    /// Nightly rate in pounds
    pub price_per_night: u32,
    pub rating: f32,
}

impl HotelOption {
    /// Price a stay of `nights` nights at this hotel
    #[must_use]
    pub fn quote(&self, nights: u32) -> HotelQuote {
        HotelQuote {
            name: self.name,
            total_price: u64::from(self.price_per_night) * u64::from(nights),
            price_per_night: self.price_per_night,
            rating: self.rating,
        }
    }
}

/// A hotel priced for a given stay length
#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuote {
    pub name: &'static str,
    pub total_price: u64,
    pub price_per_night: u32,
    pub rating: f32,
}

impl HotelQuote {
    #[must_use]
    pub fn display_total(&self) -> String {
        format_price(self.total_price)
    }

    #[must_use]
    pub fn display_per_night(&self) -> String {
        format_price(self.price_per_night)
    }
}
