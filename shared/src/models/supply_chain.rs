use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the supply chain dataset.
///
/// Only the columns the dashboard aggregates are typed here; any other
/// column in the source file is ignored by this struct. Blank cells in the
/// decimal columns are `None` and drop out of sums and means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainRecord {
    #[serde(rename = "Product type")]
    pub product_type: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "Number of products sold")]
    pub products_sold: i64,
    #[serde(rename = "Revenue generated")]
    pub revenue: Option<f64>,
    #[serde(rename = "Stock levels")]
    pub stock_level: i64,
    #[serde(rename = "Defect rates")]
    pub defect_rate: Option<f64>,
    #[serde(rename = "Shipping carriers")]
    pub shipping_carrier: String,
    #[serde(rename = "Transportation modes")]
    pub transportation_mode: String,
    #[serde(rename = "Shipping costs")]
    pub shipping_cost: Option<f64>,
    #[serde(rename = "Location")]
    pub location: String,
}

/// Days assumed in one month of sales when computing days of inventory.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days of inventory reported for a SKU that sold nothing.
pub const NO_SALES_DOI: f64 = 999.0;

impl SupplyChainRecord {
    /// Days of inventory: stock divided by average daily sales.
    pub fn days_of_inventory(&self) -> f64 {
        if self.products_sold > 0 {
            self.stock_level as f64 / (self.products_sold as f64 / DAYS_PER_MONTH)
        } else {
            NO_SALES_DOI
        }
    }

    /// Units sold per unit of stock. With no stock on hand this is the raw
    /// sales count.
    pub fn turnover_rate(&self) -> f64 {
        if self.stock_level > 0 {
            self.products_sold as f64 / self.stock_level as f64
        } else {
            self.products_sold as f64
        }
    }
}

/// Pareto bucket of a SKU by cumulative share of units sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    pub const A_THRESHOLD: f64 = 0.80;
    pub const B_THRESHOLD: f64 = 0.95;

    pub fn from_cumulative_share(share: f64) -> Self {
        // NaN (nothing sold at all) falls through to C
        if share <= Self::A_THRESHOLD {
            AbcClass::A
        } else if share <= Self::B_THRESHOLD {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(sold: i64, stock: i64) -> SupplyChainRecord {
        SupplyChainRecord {
            product_type: "haircare".to_string(),
            sku: "SKU0".to_string(),
            price: Some(10.0),
            products_sold: sold,
            revenue: Some(100.0),
            stock_level: stock,
            defect_rate: Some(0.5),
            shipping_carrier: "Carrier A".to_string(),
            transportation_mode: "Road".to_string(),
            shipping_cost: Some(2.5),
            location: "Mumbai".to_string(),
        }
    }

    #[rstest]
    #[case(0.10, AbcClass::A)]
    #[case(0.80, AbcClass::A)]
    #[case(0.81, AbcClass::B)]
    #[case(0.95, AbcClass::B)]
    #[case(0.96, AbcClass::C)]
    #[case(f64::NAN, AbcClass::C)]
    fn test_abc_thresholds(#[case] share: f64, #[case] expected: AbcClass) {
        assert_eq!(AbcClass::from_cumulative_share(share), expected);
    }

    #[test]
    fn test_days_of_inventory() {
        // 60 sold a month is 2 a day, so 10 units last 5 days
        assert_eq!(record(60, 10).days_of_inventory(), 5.0);
        assert_eq!(record(0, 10).days_of_inventory(), NO_SALES_DOI);
    }

    #[test]
    fn test_turnover_rate() {
        assert_eq!(record(50, 10).turnover_rate(), 5.0);
        assert_eq!(record(7, 0).turnover_rate(), 7.0);
    }

    #[test]
    fn test_abc_class_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&AbcClass::B).unwrap(), "\"B\"");
        assert_eq!(AbcClass::C.to_string(), "C");
    }
}
