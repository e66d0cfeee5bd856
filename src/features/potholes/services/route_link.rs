
use crate::core::config::RouteConfig;
use crate::features::potholes::models::{Coordinate, Pothole};

/// Builds the navigation deep link that drives a crew from the depot through
/// every pending pothole.
///
/// The link has the shape `<base>/<depot>/<p1>/.../<pN>/`, each point written
/// as `lat,lon` with shortest round-trip float formatting. Only numbers are
/// embedded, so no escaping is needed.
#[derive(Debug, Clone)]
pub struct RouteLinkBuilder {
    base_url: String,
    depot: Coordinate,
}

impl RouteLinkBuilder {
    pub fn new(config: &RouteConfig) -> Self {
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            depot: config.depot,
        }
    }

    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Route through `pending` in the given order, or `None` when there is
    /// nothing to visit.
    pub fn build(&self, pending: &[Pothole]) -> Option<String> {
        if pending.is_empty() {
            return None;
        }

        let mut url = self.base_url.clone();
        for point in std::iter::once(self.depot).chain(pending.iter().map(Pothole::coordinate)) {
            url.push_str(&format!("{},{}/", point.latitude, point.longitude));
        }
        Some(url)
    }
}
