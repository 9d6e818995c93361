use serde::{Deserialize, Serialize};

/// Read-only catalog entry, deserialized from the static product JSON.
///
/// The display flags are optional in the file and default to false.
/// The price is kept as the scraped decimal text; numeric uses go
/// through [`Product::price_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: u64,
    name: String,
    #[serde(default)]
    brand: Option<String>,
    price: String,
    image: String,
    #[serde(default)]
    featured: bool,
    #[serde(rename = "bestSeller", default)]
    best_seller: bool,
    #[serde(rename = "onSale", default)]
    on_sale: bool,
    #[serde(rename = "backInStock", default)]
    back_in_stock: bool,
}

impl Product {
    pub fn new(
        id: u64,
        name: String,
        brand: Option<String>,
        price: String,
        image: String,
    ) -> Self {
        Product {
            id,
            name,
            brand,
            price,
            image,
            featured: false,
            best_seller: false,
            on_sale: false,
            back_in_stock: false,
        }
    }

    pub fn get_id(&self) -> u64 {
        self.id
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_brand(&self) -> Option<String> {
        self.brand.clone()
    }

    pub fn get_price(&self) -> String {
        self.price.clone()
    }

    pub fn get_image(&self) -> String {
        self.image.clone()
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn is_best_seller(&self) -> bool {
        self.best_seller
    }

    pub fn is_on_sale(&self) -> bool {
        self.on_sale
    }

    pub fn is_back_in_stock(&self) -> bool {
        self.back_in_stock
    }

    /// Parses the price text as a decimal number.
    /// Non-numeric prices yield None and are excluded from numeric
    /// comparisons instead of being coerced to zero.
    pub fn price_value(&self) -> Option<f64> {
        self.price.trim().parse::<f64>().ok()
    }
}

#[cfg(test)]
mod tests_product {

    use super::*;

    #[test]
    fn test01_price_value_parses_decimal_text_ok() {
        let product = Product::new(
            1,
            "Eucerin Sun Gel-Creme Oil Control FPS50".to_string(),
            Some("Eucerin".to_string()),
            "129.90".to_string(),
            "/images/products/1.webp".to_string(),
        );

        assert_eq!(product.price_value(), Some(129.90));
    }

    #[test]
    fn test02_price_value_tolerates_surrounding_whitespace_ok() {
        let product = Product::new(
            2,
            "Nivea Creme 60ml".to_string(),
            Some("Nivea".to_string()),
            " 15.5 ".to_string(),
            "/images/products/2.webp".to_string(),
        );

        assert_eq!(product.price_value(), Some(15.5));
    }

    #[test]
    fn test03_price_value_on_non_numeric_text_is_none_ok() {
        let product = Product::new(
            3,
            "Garnier Express Aclara".to_string(),
            Some("Garnier".to_string()),
            "BOB 45.00".to_string(),
            "/images/products/3.webp".to_string(),
        );

        assert_eq!(product.price_value(), None);
    }
}
