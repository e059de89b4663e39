//! Per-column cell formatting shared by the table view and CSV export.

use chrono::{DateTime, Datelike, Utc};

use crate::config::CurrencyCode;
use crate::models::{FieldValue, Product};

/// Columns rendered as money in the product's currency.
const CURRENCY_FIELDS: &[&str] = &["price", "comparePrice", "costPrice"];

/// Formats `amount` the way an en-US currency formatter does.
///
/// Known currencies use their symbol (`$1,234.50`, `€9.99`, `¥1,200`); other
/// codes are prefixed (`CHF 12.00`). JPY has no minor units.
///
/// # Example
///
/// ```rust
/// use catalog_ops::catalog::format_currency;
///
/// assert_eq!(format_currency(35.5, "USD"), "$35.50");
/// assert_eq!(format_currency(-1234.5, "EUR"), "-€1,234.50");
/// assert_eq!(format_currency(1200.0, "JPY"), "¥1,200");
/// assert_eq!(format_currency(12.0, "CHF"), "CHF 12.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let (prefix, decimals) = match code.as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        "CAD" => ("CA$".to_string(), 2),
        "AUD" => ("A$".to_string(), 2),
        _ => (format!("{code} "), 2),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = fixed.split_once('.').map_or((fixed.as_str(), None), |(w, f)| (w, Some(f)));

    let mut out = format!("{sign}{prefix}{}", group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a timestamp as an en-US short date (`M/D/YYYY`).
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// One rendered cell of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct CellValue {
    /// The column the cell belongs to.
    pub column_id: String,
    /// The raw field value.
    pub value: FieldValue,
    /// Display text.
    pub text: String,
}

/// Turns product fields into display text.
///
/// Prices use the product's currency, falling back to the configured
/// default. With a warehouse set, the stock column shows that warehouse's
/// quantity instead of the total.
#[derive(Debug, Clone, Default)]
pub struct CellFormatter {
    default_currency: CurrencyCode,
    warehouse_id: Option<String>,
}

impl CellFormatter {
    /// Creates a formatter with a default currency.
    #[must_use]
    pub const fn new(default_currency: CurrencyCode) -> Self {
        Self {
            default_currency,
            warehouse_id: None,
        }
    }

    /// Shows stock for one warehouse.
    #[must_use]
    pub fn with_warehouse(mut self, warehouse_id: Option<&str>) -> Self {
        self.warehouse_id = warehouse_id.map(ToString::to_string);
        self
    }

    /// The warehouse stock is shown for, if any.
    #[must_use]
    pub fn warehouse_id(&self) -> Option<&str> {
        self.warehouse_id.as_deref()
    }

    /// The raw value shown in `field`'s column.
    #[must_use]
    pub fn value(&self, product: &Product, field: &str) -> FieldValue {
        match (field, self.warehouse_id.as_deref()) {
            #[allow(clippy::cast_precision_loss)]
            ("stockQuantity", Some(id)) => FieldValue::Number(product.stock_in(Some(id)) as f64),
            _ => product.field(field),
        }
    }

    /// Display text of `field` for `product`.
    #[must_use]
    pub fn text(&self, product: &Product, field: &str) -> String {
        self.render(product, field, &self.value(product, field))
    }

    /// A table cell for `field`.
    #[must_use]
    pub fn cell(&self, product: &Product, column_id: &str, field: &str) -> CellValue {
        let value = self.value(product, field);
        CellValue {
            column_id: column_id.to_string(),
            text: self.render(product, field, &value),
            value,
        }
    }

    fn render(&self, product: &Product, field: &str, value: &FieldValue) -> String {
        match value {
            FieldValue::Missing => String::new(),
            FieldValue::Number(amount) if CURRENCY_FIELDS.contains(&field) => {
                let currency = product
                    .currency
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| self.default_currency.as_ref());
                format_currency(*amount, currency)
            }
            FieldValue::Date(date) => format_date(date),
            FieldValue::Bool(flag) => String::from(if *flag { "Yes" } else { "No" }),
            other => other.to_text(),
        }
    }
}
