//! Storefront is a terminal rendition of a small cosmetics e-commerce
//! storefront: a catalog loaded from a static JSON file, narrowed by a
//! price or brand filter and paged for incremental display, plus a
//! shopping cart that survives sessions through a JSON storage slot.

pub mod storefront;

use std::{error::Error, fmt};

use shared::parsers::catalog_parser::CatalogParser;
use tracing::{error, info, warn};

use crate::storefront::{
    cart_storage::JsonFileCartStorage,
    cart_store::CartStore,
    catalog_view::CatalogView,
    constants::{DEFAULT_CART_FILEPATH, DEFAULT_CATALOG_FILEPATH, DEFAULT_PAGE_SIZE},
    input_handler,
};

#[derive(Debug)]
pub enum StorefrontError {
    ArgsParsingError(String),
    CatalogFileParsingError(String),
    InputError(String),
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for StorefrontError {}

fn init_logger() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn parse_args() -> Result<(String, String, usize), StorefrontError> {
    let mut args: Vec<String> = std::env::args().collect();
    args.remove(0);

    let mut catalog_path = DEFAULT_CATALOG_FILEPATH.to_string();
    let mut cart_path = DEFAULT_CART_FILEPATH.to_string();
    let mut page_size = DEFAULT_PAGE_SIZE;

    if args.is_empty() {
        info!("[Storefront] No arguments provided, using defaults: \n[CATALOG PATH: {}]  [CART PATH: {}]  [PAGE SIZE: {}]",
            DEFAULT_CATALOG_FILEPATH, DEFAULT_CART_FILEPATH, DEFAULT_PAGE_SIZE);
        return Ok((catalog_path, cart_path, page_size));
    }

    if args.len() % 2 != 0 {
        error!("[Storefront] Invalid arguments");
        warn!("Usage: cargo run -p storefront -- -c <catalog_file_path> -k <cart_file_path> -p <page_size>");
        return Err(StorefrontError::ArgsParsingError(String::from(
            "Invalid argument.",
        )));
    }

    for arg in args.chunks_exact(2) {
        if arg[0] == "-c" {
            info!("[Storefront] Catalog file path given: {}", arg[1].to_owned());
            catalog_path = arg[1].to_owned();
        } else if arg[0] == "-k" {
            info!("[Storefront] Cart file path given: {}", arg[1].to_owned());
            cart_path = arg[1].to_owned();
        } else if arg[0] == "-p" {
            info!("[Storefront] Page size: {}", arg[1].to_owned());
            page_size = arg[1].parse::<usize>().map_err(|err| {
                error!("[Storefront] Invalid page size: {}", err);
                StorefrontError::ArgsParsingError(String::from("Invalid page size"))
            })?;
            if page_size == 0 {
                error!("[Storefront] Invalid page size: {}", page_size);
                return Err(StorefrontError::ArgsParsingError(String::from(
                    "Invalid page size",
                )));
            }
        } else {
            error!("[Storefront] Invalid argument: {}", arg[0].to_owned());
            warn!(
                "Usage: cargo run -p storefront -- -c <catalog_file_path> -k <cart_file_path> -p <page_size>"
            );
            return Err(StorefrontError::ArgsParsingError(String::from(
                "Invalid argument.",
            )));
        }
    }

    Ok((catalog_path, cart_path, page_size))
}

pub fn run() -> Result<(), StorefrontError> {
    init_logger();
    let (catalog_path, cart_path, page_size) = parse_args()?;

    let parser = CatalogParser::new(&catalog_path)
        .map_err(|err| StorefrontError::CatalogFileParsingError(err.to_string()))?;
    let catalog = CatalogView::new(parser.get_products(), page_size);
    let brands = parser.get_brands();

    let mut cart = CartStore::new(JsonFileCartStorage::new(&cart_path));
    cart.hydrate();

    input_handler::run_session(catalog, brands, &mut cart)
        .map_err(|err| StorefrontError::InputError(err.to_string()))
}
