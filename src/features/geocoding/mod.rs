//! Reverse geocoding: coordinate to advisory street name.
//!
//! The street suggestion only prefills the creation form. A failing geocoder
//! never blocks registering a pothole.

pub mod dto;
pub mod handler;
pub mod model;
pub mod routes;
pub mod service;

pub use model::{GeocodingError, ReverseGeocoder, StreetLookup};
pub use service::GeocodingService;
