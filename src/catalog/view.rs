//! View-model of the product table: filter, sort, paginate, project.

use crate::catalog::export::export_csv;
use crate::catalog::filter::ProductFilter;
use crate::catalog::format::{CellFormatter, CellValue};
use crate::catalog::pagination::{paginate, PageInfo};
use crate::catalog::sort::sort_products;
use crate::config::{CatalogConfig, CurrencyCode, PageSize};
use crate::models::{Product, ProductColumnConfig, ProductFilterState, ProductPreferences, ProductSortState};

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// The product the row shows.
    pub product_id: String,
    /// Cells of the visible columns, in column order.
    pub cells: Vec<CellValue>,
}

/// One rendered page of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Rows of the current page.
    pub rows: Vec<RenderedRow>,
    /// Products matching search and filters, across all pages.
    pub total_items: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// The page that was rendered.
    pub page: usize,
}

impl RenderedPage {
    /// Position details for a pager.
    #[must_use]
    pub fn info(&self, page_size: PageSize) -> PageInfo {
        PageInfo::new(self.page, page_size, self.total_items)
    }
}

/// User-controlled state of the product table.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_ops::catalog::ProductListView;
///
/// let mut view = ProductListView::new(&config);
/// view.apply_preferences(store.preferences());
/// view.set_search("mug");
///
/// let page = view.render(catalog.products(), store.columns());
/// println!("{} of {} products", page.rows.len(), page.total_items);
/// ```
#[derive(Debug, Clone)]
pub struct ProductListView {
    search: String,
    filters: ProductFilterState,
    sort: ProductSortState,
    page: usize,
    page_size: PageSize,
    stock_management: bool,
    default_currency: CurrencyCode,
}

impl ProductListView {
    /// Creates a view on page 1 with no search and default filters and sort.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            search: String::new(),
            filters: ProductFilterState::default(),
            sort: ProductSortState::default(),
            page: 1,
            page_size: config.page_size(),
            stock_management: config.stock_management(),
            default_currency: config.default_currency().clone(),
        }
    }

    /// Adopts the saved default filters and sort, returning to page 1.
    pub fn apply_preferences(&mut self, preferences: &ProductPreferences) {
        self.filters = preferences.filters.clone();
        self.sort = preferences.sort_config.clone();
        self.page = 1;
    }

    /// The search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the search text and returns to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// The filter criteria.
    #[must_use]
    pub const fn filters(&self) -> &ProductFilterState {
        &self.filters
    }

    /// Replaces the filter criteria and returns to page 1.
    pub fn set_filters(&mut self, filters: ProductFilterState) {
        self.filters = filters;
        self.page = 1;
    }

    /// Clears every filter and the search text.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.set_filters(ProductFilterState::default());
    }

    /// The active sort.
    #[must_use]
    pub const fn sort(&self) -> &ProductSortState {
        &self.sort
    }

    /// Replaces the active sort.
    pub fn set_sort(&mut self, sort: ProductSortState) {
        self.sort = sort;
    }

    /// The current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Moves to `page`. Pages past the end render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Products per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// The formatter for the current state.
    #[must_use]
    pub fn formatter(&self) -> CellFormatter {
        CellFormatter::new(self.default_currency.clone()).with_warehouse(self.filters.warehouse())
    }

    /// All products matching search and filters, in sort order.
    #[must_use]
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let filter = ProductFilter::new(&self.search, &self.filters, self.stock_management);
        let matched = filter.apply(products);
        let sorted = sort_products(matched, &self.sort);

        tracing::debug!(
            total = products.len(),
            matched = sorted.len(),
            sort = %self.sort.field,
            "filtered product list"
        );
        sorted
    }

    /// Renders the current page, projecting the visible columns.
    #[must_use]
    pub fn render(&self, products: &[Product], columns: &[ProductColumnConfig]) -> RenderedPage {
        let visible = self.visible(products);
        let info = PageInfo::new(self.page, self.page_size, visible.len());
        let formatter = self.formatter();
        let shown: Vec<&ProductColumnConfig> = columns.iter().filter(|c| c.visible).collect();

        let rows = paginate(&visible, self.page, self.page_size)
            .iter()
            .map(|product| RenderedRow {
                product_id: product.id.clone(),
                cells: shown
                    .iter()
                    .map(|column| formatter.cell(product, &column.id, &column.field))
                    .collect(),
            })
            .collect();

        RenderedPage {
            rows,
            total_items: info.total_items,
            total_pages: info.total_pages,
            page: self.page,
        }
    }

    /// Exports every matching product (all pages) as CSV.
    #[must_use]
    pub fn export(&self, products: &[Product], columns: &[ProductColumnConfig]) -> String {
        export_csv(self.visible(products), columns, &self.formatter())
    }
}
