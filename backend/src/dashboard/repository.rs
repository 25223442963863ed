use serde_json::{Map, Number, Value};
use shared::{Result, SharedError, SupplyChainRecord};
use std::path::{Path, PathBuf};

/// A dataset row in both typed and raw form.
///
/// `raw` keeps every column of the file so the dashboard can hand the full
/// row to the UI for client-side filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyChainRow {
    pub record: SupplyChainRecord,
    pub raw: Map<String, Value>,
}

/// Reads the supply chain dataset from a CSV export on disk.
#[derive(Debug, Clone)]
pub struct CsvSupplyChainRepository {
    path: PathBuf,
}

impl CsvSupplyChainRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every row of the file. The file is re-read on each call so a
    /// refreshed export shows up without restarting the server.
    pub fn load(&self) -> Result<Vec<SupplyChainRow>> {
        if !self.path.exists() {
            return Err(SharedError::NotFound(format!(
                "Data file not found: {}",
                self.path.display()
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(csv_error)?;
        let headers = reader.headers().map_err(csv_error)?.clone();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            let typed: SupplyChainRecord = record.deserialize(Some(&headers)).map_err(csv_error)?;
            let raw = headers
                .iter()
                .zip(record.iter())
                .map(|(column, cell)| (column.to_string(), parse_cell(cell)))
                .collect();
            rows.push(SupplyChainRow { record: typed, raw });
        }

        log::debug!("Loaded {} supply chain rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

fn csv_error(err: csv::Error) -> SharedError {
    match err.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            SharedError::NotFound(err.to_string())
        }
        csv::ErrorKind::Io(_) => SharedError::Io(err.to_string()),
        _ => SharedError::InvalidData(err.to_string()),
    }
}

/// Types a raw CSV cell: integers, then floats, then text. Empty cells are null.
fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn write_csv(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("supply_chain_{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    const HEADER: &str = "Product type,SKU,Price,Availability,Number of products sold,Revenue generated,Stock levels,Defect rates,Shipping carriers,Transportation modes,Shipping costs,Location";

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("42"), json!(42));
        assert_eq!(parse_cell("4.5"), json!(4.5));
        assert_eq!(parse_cell("Carrier B"), json!("Carrier B"));
        assert_eq!(parse_cell(""), Value::Null);
        assert_eq!(parse_cell("NaN"), json!("NaN"));
    }

    #[test]
    fn test_load_rows() {
        let path = write_csv(&format!(
            "{}\nhaircare,SKU0,69.81,55,802,8661.99,58,0.23,Carrier B,Road,2.96,Mumbai\n",
            HEADER
        ));
        let rows = CsvSupplyChainRepository::new(&path).load().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.record.sku, "SKU0");
        assert_eq!(row.record.products_sold, 802);
        assert_eq!(row.record.stock_level, 58);
        assert_eq!(row.record.location, "Mumbai");
        // columns the dashboard does not aggregate are still kept
        assert_eq!(row.raw["Availability"], json!(55));
        assert_eq!(row.raw["Shipping carriers"], json!("Carrier B"));
    }

    #[test]
    fn test_missing_file() {
        let repo = CsvSupplyChainRepository::new("/definitely/not/here.csv");
        assert_eq!(repo.path(), Path::new("/definitely/not/here.csv"));
        assert!(matches!(repo.load(), Err(SharedError::NotFound(_))));
    }

    #[test]
    fn test_blank_decimal_cells() {
        let path = write_csv(&format!(
            "{}
haircare,SKU0,,55,802,,58,0.23,Carrier B,Road, ,Mumbai
",
            HEADER
        ));
        let rows = CsvSupplyChainRepository::new(&path).load().unwrap();
        std::fs::remove_file(&path).ok();

        let row = &rows[0];
        assert_eq!(row.record.price, None);
        assert_eq!(row.record.revenue, None);
        assert_eq!(row.record.shipping_cost, None);
        assert_eq!(row.record.defect_rate, Some(0.23));
        assert_eq!(row.raw["Price"], Value::Null);
    }

    #[test]
    fn test_blank_units_sold_is_rejected() {
        let path = write_csv(&format!(
            "{}
haircare,SKU0,69.81,55,,8661.99,58,0.23,Carrier B,Road,2.96,Mumbai
",
            HEADER
        ));
        let result = CsvSupplyChainRepository::new(&path).load();
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(SharedError::InvalidData(_))));
    }

    #[test]
    fn test_malformed_row() {
        let path = write_csv(&format!(
            "{}\nhaircare,SKU0,cheap,55,802,8661.99,58,0.23,Carrier B,Road,2.96,Mumbai\n",
            HEADER
        ));
        let result = CsvSupplyChainRepository::new(&path).load();
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(SharedError::InvalidData(_))));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let path = write_csv(&format!("{}\n", HEADER));
        let rows = CsvSupplyChainRepository::new(&path).load().unwrap();
        std::fs::remove_file(&path).ok();

        assert!(rows.is_empty());
    }
}
