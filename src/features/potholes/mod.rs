//! Pothole register: storage, daily finalization, history and route links.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/potholes` | List by status (default pending) |
//! | POST | `/api/potholes` | Register a pending pothole |
//! | GET | `/api/potholes/{id}` | Get one pothole |
//! | DELETE | `/api/potholes/{id}` | Delete (no-op when absent) |
//! | POST | `/api/potholes/finalize` | Resolve all pending with today's date |
//! | GET | `/api/potholes/history` | Resolved on a date |
//! | GET | `/api/potholes/route` | Navigation link through pending potholes |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PotholeService, RouteLinkBuilder};
