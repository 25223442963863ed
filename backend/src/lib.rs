pub mod config;
pub mod error;
pub mod health;
pub mod middleware;

pub mod dashboard {
    pub mod controller;
    pub mod engine;
    pub mod repository;

    pub use controller::{configure_routes, get_dashboard_handler};
    pub use engine::build_dashboard;
    pub use repository::{CsvSupplyChainRepository, SupplyChainRow};

    #[cfg(test)]
    mod engine_tests;
}
