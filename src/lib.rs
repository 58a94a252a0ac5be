//! Citizen-trust dashboard: builds the dataset, charts and page once at
//! startup and serves them through an axum router.

pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod router;
pub mod schemas;

mod openapi_tests;
mod test_utils;

pub use config::{Settings, initialize_app_state};
pub use dashboard::{DashboardBundle, build_dashboard};
pub use router::create_router;
