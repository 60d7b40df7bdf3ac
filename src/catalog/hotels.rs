use tracing::info;

use crate::models::{HotelOption, HotelQuote};

/// Stay length used when none is configured
pub const DEFAULT_NIGHTS: u32 = 5;

/// Hotels offered per resort
const MAX_QUOTES: usize = 2;

static HOTELS: [(&str, [HotelOption; 2]); 5] = [
    (
        "Chamonix",
        [
            HotelOption {
                name: "Hotel Mont Blanc",
                price_per_night: 180,
                rating: 4.6,
            },
            HotelOption {
                name: "Auberge du Bois Prin",
                price_per_night: 240,
                rating: 4.9,
            },
        ],
    ),
    (
        "Courchevel",
        [
            HotelOption {
                name: "Le Lana",
                price_per_night: 450,
                rating: 5.0,
            },
            HotelOption {
                name: "Hotel Les Suites",
                price_per_night: 320,
                rating: 4.7,
            },
        ],
    ),
    (
        "Val Thorens",
        [
            HotelOption {
                name: "Altapura",
                price_per_night: 300,
                rating: 4.8,
            },
            HotelOption {
                name: "Fitz Roy",
                price_per_night: 350,
                rating: 4.9,
            },
        ],
    ),
    (
        "St Anton",
        [
            HotelOption {
                name: "Mooser Hotel",
                price_per_night: 280,
                rating: 4.7,
            },
            HotelOption {
                name: "Raffl's St. Antoner Hof",
                price_per_night: 400,
                rating: 5.0,
            },
        ],
    ),
    (
        "Zermatt",
        [
            HotelOption {
                name: "Mont Cervin Palace",
                price_per_night: 380,
                rating: 4.9,
            },
            HotelOption {
                name: "Riffelalp Resort",
                price_per_night: 450,
                rating: 5.0,
            },
        ],
    ),
];

/// Hotel options keyed by resort name
pub struct HotelCatalog;

impl HotelCatalog {
    /// Hotels listed for `resort`, empty when the resort is unknown
    #[must_use]
    pub fn options_for(resort: &str) -> &'static [HotelOption] {
        HOTELS
            .iter()
            .find(|(name, _)| *name == resort)
            .map(|(_, hotels)| hotels.as_slice())
            .unwrap_or_default()
    }

    /// Quotes for a default-length stay
    #[must_use]
    pub fn quotes(resort: &str) -> Vec<HotelQuote> {
        Self::quotes_for_nights(resort, DEFAULT_NIGHTS)
    }

    /// Quotes for the first two hotels at `resort`, priced for `nights`
    #[must_use]
    pub fn quotes_for_nights(resort: &str, nights: u32) -> Vec<HotelQuote> {
        let options = Self::options_for(resort);
        if options.is_empty() {
            info!("No hotels found for resort '{}'", resort);
        }

        options
            .iter()
            .take(MAX_QUOTES)
            .map(|hotel| hotel.quote(nights))
            .collect()
    }
}
