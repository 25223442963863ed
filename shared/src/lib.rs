pub mod models {
    pub mod supply_chain;
}

pub mod dto {
    pub mod dashboard;
    pub mod common;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::supply_chain::{SupplyChainRecord, AbcClass};

pub use dto::{
    dashboard::{
        DashboardData, DashboardSummary, InventoryItemDto, ShippingCostDto,
        ProductTypeRevenueDto, LocationStatsDto,
    },
    common::ErrorResponse,
};
