/// Street label when the geocoder found a place without a road or pedestrian way
pub const UNIDENTIFIED_STREET: &str = "Unidentified street";

/// Street label when the geocoder found nothing at the coordinate
pub const UNMAPPED_LOCATION: &str = "Unmapped location";

/// Longest street label a pothole can store, in characters
pub const MAX_STREET_LENGTH: usize = 255;
