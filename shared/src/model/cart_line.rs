use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, PartialEq, Eq)]
pub enum CartLineError {
    NonPositiveQuantity,
}

/// One product entry in the shopping cart.
///
/// Invariant: `quantity` is always >= 1. A change that would bring it to
/// zero or below is rejected by [`CartLine::affect_quantity_with_value`],
/// and the caller is expected to remove the whole line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    id: u64,
    name: String,
    brand: Option<String>,
    price: f64,
    image: String,
    quantity: i32,
}

impl CartLine {
    /// Builds the line added on the first add-to-cart for a product.
    /// An unparseable product price is stored as 0.0 so the line itself
    /// stays representable.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.get_id(),
            name: product.get_name(),
            brand: product.get_brand(),
            price: product.price_value().unwrap_or(0.0),
            image: product.get_image(),
            quantity: 1,
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

    pub fn get_price(&self) -> f64 {
        self.price
    }

    pub fn get_image(&self) -> String {
        self.image.clone()
    }

    pub fn get_quantity(&self) -> i32 {
        self.quantity
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn affect_quantity_with_value(&mut self, value: i32) -> Result<(), CartLineError> {
        if self.quantity + value <= 0 {
            return Err(CartLineError::NonPositiveQuantity);
        }
        self.quantity += value;
        Ok(())
    }
}

#[cfg(test)]
mod tests_cart_line {

    use super::*;

    fn some_product() -> Product {
        Product::new(
            1,
            "Cerave Hydrating Cleanser 236ml".to_string(),
            Some("Cerave".to_string()),
            "89.90".to_string(),
            "/images/products/1.webp".to_string(),
        )
    }

    #[test]
    fn test01_line_from_product_starts_with_quantity_one_ok() {
        let line = CartLine::from_product(&some_product());

        assert_eq!(line.get_id(), 1);
        assert_eq!(line.get_quantity(), 1);
        assert_eq!(line.get_price(), 89.90);
        assert_eq!(line.line_total(), 89.90);
    }

    #[test]
    fn test02_line_from_product_with_unparseable_price_stores_zero_ok() {
        let product = Product::new(
            2,
            "Mystery item".to_string(),
            None,
            "BOB ???".to_string(),
            "/images/products/2.webp".to_string(),
        );
        let line = CartLine::from_product(&product);

        assert_eq!(line.get_price(), 0.0);
        assert_eq!(line.line_total(), 0.0);
    }

    #[test]
    fn test03_affecting_quantity_updates_line_total_ok() -> Result<(), CartLineError> {
        let mut line = CartLine::from_product(&some_product());
        line.affect_quantity_with_value(2)?;

        assert_eq!(line.get_quantity(), 3);
        assert_eq!(line.line_total(), 89.90 * 3.0);
        Ok(())
    }

    #[test]
    fn test04_affecting_quantity_to_zero_or_below_err() {
        let mut line = CartLine::from_product(&some_product());

        assert_eq!(
            line.affect_quantity_with_value(-1),
            Err(CartLineError::NonPositiveQuantity)
        );
        assert_eq!(
            line.affect_quantity_with_value(-5),
            Err(CartLineError::NonPositiveQuantity)
        );
        assert_eq!(line.get_quantity(), 1);
    }
}
