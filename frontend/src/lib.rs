//! Data layer behind the supply chain dashboard UI.
//!
//! The UI builds a [`config::Config`] once at startup and hands it to a
//! [`api::dashboard::DashboardClient`]; every dashboard refresh is a single
//! call to [`api::dashboard::DashboardClient::get_dashboard_data`].

pub mod api;
pub mod config;
pub mod error;

pub use api::dashboard::{get_dashboard_data, DashboardClient, DashboardPayload};
pub use config::{Config, Environment};
pub use error::ApiError;
