pub mod pothole_handler;

use std::sync::Arc;

pub use pothole_handler::*;

use crate::features::potholes::services::{PotholeService, RouteLinkBuilder};

/// State for pothole handlers
#[derive(Clone)]
pub struct PotholeState {
    pub pothole_service: Arc<PotholeService>,
    pub route_builder: Arc<RouteLinkBuilder>,
}
