//! This module contains the `CatalogView`, which narrows the in-memory
//! product list to the user's active filter and exposes it in fixed-size
//! pages for incremental rendering.

use shared::model::product::Product;

/// The active narrowing criterion. Filters are mutually exclusive by
/// construction: activating one replaces whatever was active before.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterMode {
    NoFilter,
    Price(f64),
    Brand(String),
}

#[derive(Debug)]
pub struct CatalogView {
    products: Vec<Product>,
    filter: FilterMode,
    page_size: usize,
    loaded_count: usize,
}

impl CatalogView {
    pub fn new(products: Vec<Product>, page_size: usize) -> Self {
        CatalogView {
            products,
            filter: FilterMode::NoFilter,
            page_size,
            loaded_count: page_size,
        }
    }

    /// Keeps products whose parsed price is at most `max_price`,
    /// clearing any active brand filter. Resets to the first page.
    pub fn set_price_filter(&mut self, max_price: f64) {
        self.filter = FilterMode::Price(max_price);
        self.loaded_count = self.page_size;
    }

    /// Keeps products of that brand (case-insensitively), clearing any
    /// active price filter. Resets to the first page.
    pub fn set_brand_filter(&mut self, brand: &str) {
        self.filter = FilterMode::Brand(brand.to_string());
        self.loaded_count = self.page_size;
    }

    /// Back to the full list. Resets to the first page.
    pub fn clear_filters(&mut self) {
        self.filter = FilterMode::NoFilter;
        self.loaded_count = self.page_size;
    }

    pub fn get_filter(&self) -> FilterMode {
        self.filter.clone()
    }

    /// The product list narrowed by the active filter, original order
    /// preserved. Products with an unparseable price are excluded from
    /// price comparisons; products without a brand never match a brand
    /// filter. An empty result is a valid, displayable state.
    pub fn filtered_products(&self) -> Vec<Product> {
        match &self.filter {
            FilterMode::NoFilter => self.products.clone(),
            FilterMode::Price(max_price) => self
                .products
                .iter()
                .filter(|product| {
                    product
                        .price_value()
                        .map_or(false, |price| price <= *max_price)
                })
                .cloned()
                .collect(),
            FilterMode::Brand(brand) => self
                .products
                .iter()
                .filter(|product| {
                    product
                        .get_brand()
                        .map_or(false, |product_brand| {
                            product_brand.to_lowercase() == brand.to_lowercase()
                        })
                })
                .cloned()
                .collect(),
        }
    }

    /// Prefix of the filtered list currently loaded for display.
    pub fn visible_products(&self) -> Vec<Product> {
        self.filtered_products()
            .into_iter()
            .take(self.loaded_count)
            .collect()
    }

    /// Grows the loaded prefix by one page, capped at the filtered
    /// length.
    pub fn load_more(&mut self) {
        let total = self.filtered_products().len();
        self.loaded_count = usize::min(self.loaded_count + self.page_size, total);
    }

    pub fn has_more(&self) -> bool {
        self.loaded_count < self.total_filtered()
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered_products().len()
    }

    pub fn find_product(&self, id: u64) -> Option<Product> {
        self.products
            .iter()
            .find(|product| product.get_id() == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests_catalog_view {

    use super::*;

    fn product(id: u64, brand: Option<&str>, price: &str) -> Product {
        Product::new(
            id,
            format!("Product{}", id),
            brand.map(|brand| brand.to_string()),
            price.to_string(),
            format!("/images/products/{}.webp", id),
        )
    }

    fn some_catalog() -> Vec<Product> {
        vec![
            product(1, Some("A"), "100"),
            product(2, Some("B"), "50"),
            product(3, Some("a"), "30"),
            product(4, None, "25"),
            product(5, Some("B"), "no price yet"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|product| product.get_id()).collect()
    }

    #[test]
    fn test01_without_filters_the_full_list_is_kept_in_order_ok() {
        let view = CatalogView::new(some_catalog(), 30);

        assert_eq!(view.get_filter(), FilterMode::NoFilter);
        assert_eq!(ids(&view.filtered_products()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test02_price_filter_keeps_products_at_or_below_the_ceiling_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_price_filter(60.0);

        assert_eq!(ids(&view.filtered_products()), vec![2, 3, 4]);
    }

    #[test]
    fn test03_price_filter_excludes_unparseable_prices_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_price_filter(10000.0);

        // Product 5 has no numeric price and must not be compared.
        assert_eq!(ids(&view.filtered_products()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test04_brand_filter_matches_case_insensitively_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_brand_filter("a");

        assert_eq!(ids(&view.filtered_products()), vec![1, 3]);
    }

    #[test]
    fn test05_brand_filter_excludes_brandless_products_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_brand_filter("B");

        assert_eq!(ids(&view.filtered_products()), vec![2, 5]);
    }

    #[test]
    fn test06_setting_a_brand_filter_clears_the_price_filter_ok() {
        let mut view = CatalogView::new(
            vec![product(1, Some("A"), "100"), product(2, Some("B"), "50")],
            30,
        );

        view.set_price_filter(60.0);
        assert_eq!(ids(&view.filtered_products()), vec![2]);

        view.set_brand_filter("A");
        assert_eq!(view.get_filter(), FilterMode::Brand("A".to_string()));
        assert_eq!(ids(&view.filtered_products()), vec![1]);
    }

    #[test]
    fn test07_setting_a_price_filter_clears_the_brand_filter_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_brand_filter("A");
        view.set_price_filter(60.0);

        assert_eq!(view.get_filter(), FilterMode::Price(60.0));
        assert_eq!(ids(&view.filtered_products()), vec![2, 3, 4]);
    }

    #[test]
    fn test08_clearing_filters_restores_the_full_list_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_brand_filter("A");
        view.clear_filters();

        assert_eq!(view.get_filter(), FilterMode::NoFilter);
        assert_eq!(view.total_filtered(), 5);
    }

    #[test]
    fn test09_visible_products_grow_one_page_at_a_time_ok() {
        let mut view = CatalogView::new(some_catalog(), 2);

        assert_eq!(ids(&view.visible_products()), vec![1, 2]);
        assert!(view.has_more());

        view.load_more();
        assert_eq!(ids(&view.visible_products()), vec![1, 2, 3, 4]);

        view.load_more();
        assert_eq!(ids(&view.visible_products()), vec![1, 2, 3, 4, 5]);
        assert!(!view.has_more());

        // Capped: another page request cannot load past the end.
        view.load_more();
        assert_eq!(view.visible_products().len(), 5);
    }

    #[test]
    fn test10_changing_a_filter_resets_the_loaded_count_ok() {
        let mut view = CatalogView::new(some_catalog(), 1);

        view.load_more();
        view.load_more();
        assert_eq!(view.visible_products().len(), 3);

        view.set_brand_filter("B");
        assert_eq!(view.visible_products().len(), 1);
        assert!(view.has_more());

        view.load_more();
        view.set_price_filter(60.0);
        assert_eq!(view.visible_products().len(), 1);

        view.load_more();
        view.clear_filters();
        assert_eq!(view.visible_products().len(), 1);
    }

    #[test]
    fn test11_an_empty_filtered_result_is_a_valid_state_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);

        view.set_brand_filter("Missha");

        assert!(view.filtered_products().is_empty());
        assert!(view.visible_products().is_empty());
        assert_eq!(view.total_filtered(), 0);
        assert!(!view.has_more());
    }

    #[test]
    fn test12_find_product_looks_up_the_unfiltered_catalog_ok() {
        let mut view = CatalogView::new(some_catalog(), 30);
        view.set_brand_filter("A");

        // The lookup ignores the active filter.
        assert_eq!(view.find_product(2), Some(product(2, Some("B"), "50")));
        assert_eq!(view.find_product(99), None);
    }
}
