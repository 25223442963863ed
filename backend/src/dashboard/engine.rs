use crate::dashboard::repository::SupplyChainRow;
use serde_json::{json, Value};
use shared::{
    AbcClass, DashboardData, DashboardSummary, InventoryItemDto, LocationStatsDto,
    ProductTypeRevenueDto, ShippingCostDto, SupplyChainRecord,
};
use std::collections::BTreeMap;

/// Computes the full dashboard document from the loaded dataset.
pub fn build_dashboard(rows: &[SupplyChainRow]) -> DashboardData {
    let records: Vec<&SupplyChainRecord> = rows.iter().map(|row| &row.record).collect();
    let classes = classify_abc(&records);

    let inventory = records
        .iter()
        .zip(&classes)
        .map(|(record, class)| InventoryItemDto {
            product_type: record.product_type.clone(),
            sku: record.sku.clone(),
            stock_level: record.stock_level,
            products_sold: record.products_sold,
            days_of_inventory: record.days_of_inventory(),
            turnover_rate: record.turnover_rate(),
            abc_class: *class,
            revenue: record.revenue,
        })
        .collect();

    let raw_data = rows
        .iter()
        .zip(&classes)
        .map(|(row, class)| {
            let mut raw = row.raw.clone();
            raw.insert("ABC_Class".to_string(), Value::String(class.to_string()));
            raw.insert("DOI".to_string(), json!(row.record.days_of_inventory()));
            raw.insert("Turnover_Rate".to_string(), json!(row.record.turnover_rate()));
            raw
        })
        .collect();

    DashboardData {
        summary: summarize(&records),
        inventory,
        shipping: shipping_costs(&records),
        product_types: revenue_by_product_type(&records),
        location_data: location_stats(&records),
        sales_hist: records.iter().map(|r| r.products_sold).collect(),
        raw_data,
    }
}

pub fn summarize(records: &[&SupplyChainRecord]) -> DashboardSummary {
    DashboardSummary {
        total_revenue: records.iter().filter_map(|r| r.revenue).sum(),
        total_sold: records.iter().map(|r| r.products_sold).sum(),
        avg_price: round2(mean(records.iter().filter_map(|r| r.price)).unwrap_or(0.0)),
        avg_defect_rate: round2(mean(records.iter().filter_map(|r| r.defect_rate)).unwrap_or(0.0)),
        total_stock: records.iter().map(|r| r.stock_level).sum(),
    }
}

/// ABC class of each record, index-aligned with the input.
///
/// Records are ranked by units sold (ties keep input order) and bucketed
/// by the cumulative share of total units sold reached at their rank.
pub fn classify_abc(records: &[&SupplyChainRecord]) -> Vec<AbcClass> {
    let total: i64 = records.iter().map(|r| r.products_sold).sum();
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| records[b].products_sold.cmp(&records[a].products_sold));

    let mut classes = vec![AbcClass::C; records.len()];
    if total == 0 {
        return classes;
    }

    let mut cumulative = 0i64;
    for index in order {
        cumulative += records[index].products_sold;
        classes[index] = AbcClass::from_cumulative_share(cumulative as f64 / total as f64);
    }
    classes
}

pub fn shipping_costs(records: &[&SupplyChainRecord]) -> Vec<ShippingCostDto> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        let costs = groups
            .entry((record.shipping_carrier.as_str(), record.transportation_mode.as_str()))
            .or_default();
        costs.extend(record.shipping_cost);
    }

    groups
        .into_iter()
        .map(|((carrier, mode), costs)| ShippingCostDto {
            shipping_carrier: carrier.to_string(),
            transportation_mode: mode.to_string(),
            shipping_cost: mean(costs.into_iter()),
        })
        .collect()
}

pub fn revenue_by_product_type(records: &[&SupplyChainRecord]) -> Vec<ProductTypeRevenueDto> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *groups.entry(record.product_type.as_str()).or_insert(0.0) += record.revenue.unwrap_or(0.0);
    }

    groups
        .into_iter()
        .map(|(product_type, revenue)| ProductTypeRevenueDto {
            product_type: product_type.to_string(),
            revenue,
        })
        .collect()
}

pub fn location_stats(records: &[&SupplyChainRecord]) -> Vec<LocationStatsDto> {
    #[derive(Default)]
    struct Totals {
        revenue: f64,
        sold: i64,
        stock: i64,
        rows: usize,
    }

    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for record in records {
        let totals = groups.entry(record.location.as_str()).or_default();
        totals.revenue += record.revenue.unwrap_or(0.0);
        totals.sold += record.products_sold;
        totals.stock += record.stock_level;
        totals.rows += 1;
    }

    groups
        .into_iter()
        .map(|(location, totals)| LocationStatsDto {
            location: location.to_string(),
            revenue: totals.revenue,
            products_sold: totals.sold,
            stock_level: totals.stock as f64 / totals.rows as f64,
        })
        .collect()
}

/// `None` when there is nothing to average.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Two decimal places with ties going to the even digit, so 10.125 is 10.12.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
