use crate::model::product::Product;

use std::{
    collections::HashSet,
    error::Error,
    fmt,
    fs::File,
    io::BufReader,
};

#[derive(Debug, PartialEq, Eq)]
pub enum CatalogParserError {
    CannotOpenFile(String),
    CannotParseFile(String),
}

impl fmt::Display for CatalogParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n    {:?}\n", self)
    }
}

impl Error for CatalogParserError {}

/// Reads the static catalog file: one JSON array of products.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogParser {
    products: Vec<Product>,
}

impl CatalogParser {
    pub fn new(path: &str) -> Result<Self, CatalogParserError> {
        let file =
            File::open(path).map_err(|err| CatalogParserError::CannotOpenFile(err.to_string()))?;
        let buf = BufReader::new(file);
        let products = serde_json::from_reader(buf)
            .map_err(|err| CatalogParserError::CannotParseFile(err.to_string()))?;
        Ok(CatalogParser { products })
    }

    pub fn get_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Distinct brand names in the catalog, deduplicated
    /// case-insensitively (first spelling wins) and sorted.
    pub fn get_brands(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut brands: Vec<String> = self
            .products
            .iter()
            .filter_map(|product| product.get_brand())
            .filter(|brand| seen.insert(brand.to_lowercase()))
            .collect();
        brands.sort();
        brands
    }
}
