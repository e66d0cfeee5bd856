pub mod dashboard;
pub mod geocoding;
pub mod potholes;
