//! Dispatcher dashboard: the management screen for today's open potholes and
//! the history report of work finished on a given day.
//!
//! The server keeps no per-user state. Every interaction carries the client's
//! session and answers with the updated session plus the re-rendered view.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/dashboard/view` | Render the current screen |
//! | POST | `/api/dashboard/select` | Map click, reverse geocodes the point |
//! | POST | `/api/dashboard/submit` | Save the draft as a pending pothole |
//! | POST | `/api/dashboard/delete` | Delete a row |
//! | POST | `/api/dashboard/finalize` | Resolve all pending potholes today |
//! | POST | `/api/dashboard/history` | Switch to the report for a date |
//! | POST | `/api/dashboard/today` | Back to management |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod session;

pub use routes::routes;
pub use services::DashboardService;
