//! Static lookup tables
//!
//! Resorts, trains, hotels and tips are embedded in the binary and never
//! change at runtime. Lookups that miss return empty values and log at
//! info level.

pub mod hotels;
pub mod resorts;
pub mod tips;
pub mod trains;

pub use hotels::{DEFAULT_NIGHTS, HotelCatalog};
pub use resorts::ResortCatalog;
pub use tips::TipAdvisor;
pub use trains::TrainCatalog;
