mod pothole_dto;

pub use pothole_dto::*;
