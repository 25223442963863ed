use crate::models::supply_chain::AbcClass;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Headline KPIs across the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_sold: i64,
    pub avg_price: f64,
    pub avg_defect_rate: f64,
    pub total_stock: i64,
}

/// Inventory performance of a single SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemDto {
    #[serde(rename = "Product type")]
    pub product_type: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Stock levels")]
    pub stock_level: i64,
    #[serde(rename = "Number of products sold")]
    pub products_sold: i64,
    #[serde(rename = "DOI")]
    pub days_of_inventory: f64,
    #[serde(rename = "Turnover_Rate")]
    pub turnover_rate: f64,
    #[serde(rename = "ABC_Class")]
    pub abc_class: AbcClass,
    /// `None` when the row's revenue cell was blank
    #[serde(rename = "Revenue generated")]
    pub revenue: Option<f64>,
}

/// Mean shipping cost for one carrier and transportation mode pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingCostDto {
    #[serde(rename = "Shipping carriers")]
    pub shipping_carrier: String,
    #[serde(rename = "Transportation modes")]
    pub transportation_mode: String,
    /// `None` when every cost in the group was blank
    #[serde(rename = "Shipping costs")]
    pub shipping_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeRevenueDto {
    #[serde(rename = "Product type")]
    pub product_type: String,
    #[serde(rename = "Revenue generated")]
    pub revenue: f64,
}

/// Aggregates per location, used by the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationStatsDto {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Revenue generated")]
    pub revenue: f64,
    #[serde(rename = "Number of products sold")]
    pub products_sold: i64,
    /// Mean stock level across the location's rows
    #[serde(rename = "Stock levels")]
    pub stock_level: f64,
}

/// Complete document served by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub inventory: Vec<InventoryItemDto>,
    pub shipping: Vec<ShippingCostDto>,
    pub product_types: Vec<ProductTypeRevenueDto>,
    pub location_data: Vec<LocationStatsDto>,
    pub sales_hist: Vec<i64>,
    /// Every input row with all of its columns, plus the derived
    /// `ABC_Class`, `DOI` and `Turnover_Rate` fields.
    pub raw_data: Vec<Map<String, Value>>,
}
