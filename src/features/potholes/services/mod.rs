mod pothole_service;
mod route_link;

pub use pothole_service::PotholeService;
pub use route_link::RouteLinkBuilder;
