//! Sort engine with type-aware comparison.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::models::{FieldValue, Product, ProductSortState, SortDirection};

/// Fields compared as numbers; missing values count as `0`.
pub const NUMERIC_FIELDS: &[&str] = &["price", "comparePrice", "costPrice", "stockQuantity", "weight"];

/// Fields compared as timestamps; missing values count as the epoch.
pub const DATE_FIELDS: &[&str] = &["createdAt", "updatedAt", "publishedAt"];

/// Compares two products on `field` in ascending order.
///
/// Numeric and date fields compare by value. Every other field compares its
/// text with root-locale collation, ignoring case.
#[must_use]
pub fn compare_field(a: &Product, b: &Product, field: &str) -> Ordering {
    if NUMERIC_FIELDS.contains(&field) {
        sort_number(&a.field(field)).total_cmp(&sort_number(&b.field(field)))
    } else if DATE_FIELDS.contains(&field) {
        epoch_millis(&a.field(field)).cmp(&epoch_millis(&b.field(field)))
    } else {
        compare_text(&a.field(field).to_text(), &b.field(field).to_text())
    }
}

/// `-0.0 + 0.0` is `0.0`, so negative zero ties with zero.
fn sort_number(value: &FieldValue) -> f64 {
    value.to_number() + 0.0
}

fn epoch_millis(value: &FieldValue) -> i64 {
    match value {
        FieldValue::Date(date) => date.timestamp_millis(),
        _ => 0,
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options)
            .map_err(|e| tracing::warn!("collator unavailable, sorting by code point: {e}"))
            .ok()
    };
}

/// Compares two texts the way a reader expects: accents after their base
/// letter, case ignored.
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    })
}

/// Returns the products ordered by `sort`, leaving the input untouched.
///
/// Descending order swaps the operands of the ascending comparison. The sort
/// is stable, so products with equal keys keep their input order in either
/// direction.
///
/// # Example
///
/// ```rust
/// use catalog_ops::catalog::sort_products;
/// use catalog_ops::models::{Product, ProductSortState, SortDirection};
///
/// let products = vec![
///     Product { id: "a".into(), price: 20.0, ..Default::default() },
///     Product { id: "b".into(), price: 5.0, ..Default::default() },
/// ];
///
/// let sorted = sort_products(&products, &ProductSortState::new("price", SortDirection::Asc));
/// assert_eq!(sorted[0].id, "b");
/// ```
#[must_use]
pub fn sort_products<'a, I>(products: I, sort: &ProductSortState) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&'a Product> = products.into_iter().collect();
    let field = sort.field.as_str();

    match sort.direction {
        SortDirection::Asc => sorted.sort_by(|a, b| compare_field(a, b, field)),
        SortDirection::Desc => sorted.sort_by(|a, b| compare_field(b, a, field)),
    }

    sorted
}
