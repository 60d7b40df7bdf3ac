//! Flight offer model and display helpers

use std::fmt;

/// Currency symbol used for every displayed price
pub const CURRENCY_SYMBOL: &str = "£";

/// A priced flight as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightOffer {
    pub airline: String,
    pub flight_number: String,
    /// Display price, e.g. "£145"
    pub price: String,
    /// Display duration, e.g. "2h 30m"
    pub duration: String,
    pub status: String,
}

impl FlightOffer {
    #[must_use]
    pub fn new(
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        price: impl Into<String>,
        duration: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            airline: airline.into(),
            flight_number: flight_number.into(),
            price: price.into(),
            duration: duration.into(),
            status: status.into(),
        }
    }
}

impl fmt::Display for FlightOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({}) - {}",
            self.airline, self.flight_number, self.price, self.duration, self.status
        )
    }
}

/// Format an amount as a display price, e.g. `145` -> "£145"
#[must_use]
pub fn format_price(amount: impl fmt::Display) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Format minutes as "<h>h <m>m" using floor division
#[must_use]
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes.div_euclid(60), minutes.rem_euclid(60))
}
