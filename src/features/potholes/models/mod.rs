mod pothole;

pub use pothole::{Coordinate, CreatePothole, Pothole, PotholeSeverity, PotholeStatus};
