//! CSV export of the product list.
//!
//! The export is a projection of the visible columns, in column order, of
//! the products passed in (normally the filtered and sorted list). Cells use
//! the same [`CellFormatter`] as the table.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::catalog::format::CellFormatter;
use crate::models::{Product, ProductColumnConfig};

/// Quotes a CSV field when it contains a comma, a quote or a line break.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders `products` as CSV.
///
/// The header row holds the labels of the visible columns; lines are joined
/// with `\n`.
///
/// # Example
///
/// ```rust
/// use catalog_ops::catalog::{export_csv, CellFormatter};
/// use catalog_ops::models::{Product, ProductColumnConfig};
///
/// let columns = vec![
///     ProductColumnConfig::new("name", "Name", true, true),
///     ProductColumnConfig::new("price", "Price", true, true),
/// ];
/// let products = vec![Product { name: "Mug, large".into(), price: 1234.5, ..Default::default() }];
///
/// let csv = export_csv(&products, &columns, &CellFormatter::default());
/// assert_eq!(csv, "Name,Price\n\"Mug, large\",\"$1,234.50\"");
/// ```
#[must_use]
pub fn export_csv<'a, I>(
    products: I,
    columns: &[ProductColumnConfig],
    formatter: &CellFormatter,
) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let visible: Vec<&ProductColumnConfig> = columns.iter().filter(|c| c.visible).collect();

    let mut lines = vec![csv_line(visible.iter().map(|c| c.label.as_str()))];
    lines.extend(products.into_iter().map(|product| {
        csv_line(
            visible
                .iter()
                .map(|column| formatter.text(product, &column.field)),
        )
    }));

    tracing::debug!(rows = lines.len() - 1, columns = visible.len(), "exported products to csv");
    lines.join("\n")
}

/// Renders only the selected products, keeping the order of `products`.
#[must_use]
pub fn export_selection<'a, I>(
    products: I,
    selected_ids: &HashSet<String>,
    columns: &[ProductColumnConfig],
    formatter: &CellFormatter,
) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    export_csv(
        products
            .into_iter()
            .filter(|p| selected_ids.contains(&p.id)),
        columns,
        formatter,
    )
}

/// File name for an export created at `now`: `products-export-YYYY-MM-DD.csv`.
#[must_use]
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("products-export-{}.csv", now.format("%Y-%m-%d"))
}
