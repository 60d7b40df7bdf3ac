//! Trip planning
//!
//! Combines flight prices with the resort, train, hotel and tip catalogs
//! into one itinerary per search.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::catalog::{DEFAULT_NIGHTS, HotelCatalog, ResortCatalog, TipAdvisor, TrainCatalog};
use crate::flights::{FlightQuery, FlightSource};
use crate::models::{Itinerary, TripRequest};

/// What the single page shows
#[derive(Debug, Clone)]
pub enum PageView {
    /// Initial load: the search form only
    Form,
    /// After a submission: the form plus the planned itinerary
    Results(Box<Itinerary>),
}

/// Service assembling itineraries
pub struct TripPlanner {
    flights: Arc<dyn FlightSource>,
    nights: u32,
}

impl TripPlanner {
    /// Planner pricing hotels for the default stay length
    pub fn new(flights: Arc<dyn FlightSource>) -> Self {
        Self::with_nights(flights, DEFAULT_NIGHTS)
    }

    pub fn with_nights(flights: Arc<dyn FlightSource>, nights: u32) -> Self {
        Self { flights, nights }
    }

    /// Plan a trip. Flights are always priced; train, hotels and tip come
    /// from the first resort matching skill and budget, if any.
    #[instrument(skip(self, request), fields(skill = %request.skill, budget = request.budget))]
    pub async fn plan(&self, request: TripRequest) -> Itinerary {
        info!(
            "Planning trip {} -> {} on {}",
            request.origin, request.destination, request.date
        );

        let flights = self.flights.search(&FlightQuery::from(&request)).await;
        debug!(
            "Flight search returned {} offers (live: {})",
            flights.offers().len(),
            flights.is_live()
        );

        let resort = ResortCatalog::best_match(&request.skill, request.budget);

        let (train, hotels, tip) = match resort {
            Some(resort) => {
                info!("Best spot: {}", resort.name);
                (
                    TrainCatalog::route_for(resort.name),
                    HotelCatalog::quotes_for_nights(resort.name, self.nights),
                    TipAdvisor::tip_for(&request.skill, resort.name),
                )
            }
            None => (None, Vec::new(), TipAdvisor::no_match_tip()),
        };

        Itinerary {
            request,
            flights,
            resort,
            train,
            hotels,
            tip,
        }
    }

    /// Page for a submission
    pub async fn results_page(&self, request: TripRequest) -> PageView {
        PageView::Results(Box::new(self.plan(request).await))
    }
}
