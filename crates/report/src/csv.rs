//! CSV export of normalized orders.
//!
//! Emits `date,contract,side,units,price` with prices formatted to two
//! decimals, matching the layout downstream spreadsheets expect.

use recon_core::{Error, Order, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write orders as CSV to any writer.
pub fn write_orders_csv<W: Write>(writer: W, orders: &[Order]) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "contract", "side", "units", "price"])
        .map_err(|e| Error::export(e.to_string()))?;

    for order in orders {
        csv_writer
            .write_record([
                order.date.as_str(),
                order.contract.as_str(),
                order.side.as_str(),
                &order.units.to_string(),
                &format!("{:.2}", order.price),
            ])
            .map_err(|e| Error::export(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write orders as CSV to a file.
pub fn export_orders_csv(path: impl AsRef<Path>, orders: &[Order]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_orders_csv(file, orders)?;
    info!(path = %path.display(), orders = orders.len(), "wrote CSV export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_core::Side;

    #[test]
    fn test_csv_layout() {
        let orders = vec![
            Order::new("2025-05-01", "F_A", Side::Long, 5, 12.5),
            Order::new("2025-05-02", "F_B", Side::Short, 2, 9.0),
        ];

        let mut buffer = Vec::new();
        write_orders_csv(&mut buffer, &orders).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let expected = "\
date,contract,side,units,price
2025-05-01,F_A,LONG,5,12.50
2025-05-02,F_B,SHORT,2,9.00
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_orders_header_only() {
        let mut buffer = Vec::new();
        write_orders_csv(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "date,contract,side,units,price\n");
    }
}
