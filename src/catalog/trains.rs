use tracing::info;

use crate::models::TrainItinerary;

static TRAINS: [(&str, TrainItinerary); 5] = [
    (
        "Chamonix",
        TrainItinerary {
            route: "Eurostar → Paris → Chamonix",
            price: "£95",
            duration: "7h 30m",
        },
    ),
    (
        "Courchevel",
        TrainItinerary {
            route: "Eurostar → Moûtiers (bus to resort)",
            price: "£110",
            duration: "8h 15m",
        },
    ),
    (
        "Val Thorens",
        TrainItinerary {
            route: "Eurostar → Moûtiers (bus to resort)",
            price: "£105",
            duration: "8h 0m",
        },
    ),
    (
        "St Anton",
        TrainItinerary {
            route: "Eurostar → Zurich → St Anton",
            price: "£120",
            duration: "9h 0m",
        },
    ),
    (
        "Zermatt",
        TrainItinerary {
            route: "Eurostar → Geneva → Zermatt",
            price: "£130",
            duration: "9h 30m",
        },
    ),
];

/// Train connections keyed by resort name
pub struct TrainCatalog;

impl TrainCatalog {
    /// Train route to `resort`, if one is known
    #[must_use]
    pub fn route_for(resort: &str) -> Option<&'static TrainItinerary> {
        let train = TRAINS
            .iter()
            .find(|(name, _)| *name == resort)
            .map(|(_, train)| train);

        if train.is_none() {
            info!("No train found for resort '{}'", resort);
        }
        train
    }
}
