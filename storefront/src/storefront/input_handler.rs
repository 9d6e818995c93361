use shared::model::product::Product;
use std::error::Error;
use std::fmt;
use tracing::{info, warn};

use super::cart_storage::CartStorage;
use super::cart_store::CartStore;
use super::catalog_view::CatalogView;
use super::constants::*;

#[derive(Debug)]
pub enum InputError {
    ReadingLineError(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for InputError {}

/// Reads commands from stdin and drives the catalog view and the cart
/// store until the exit command arrives.
pub fn run_session<S: CartStorage>(
    mut catalog: CatalogView,
    brands: Vec<String>,
    cart: &mut CartStore<S>,
) -> Result<(), InputError> {
    info!(
        "[InputHandler] Session started with {} products. Type {} to exit.",
        catalog.total_filtered(),
        EXIT_MSG
    );
    print_products(&catalog);

    let mut reader = std::io::stdin().lines();
    while let Some(line) = reader.next() {
        let line = line.map_err(|err| InputError::ReadingLineError(err.to_string()))?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            [EXIT_MSG] => {
                info!("[InputHandler] Exit command received");
                break;
            }
            [LIST_MSG] => print_products(&catalog),
            [MORE_MSG] => {
                catalog.load_more();
                print_products(&catalog);
            }
            [PRICE_FILTER_MSG, ceiling] => match ceiling.parse::<f64>() {
                Ok(max_price) => {
                    catalog.set_price_filter(max_price);
                    print_products(&catalog);
                }
                Err(_) => warn!("[InputHandler] Invalid price ceiling: {}", ceiling),
            },
            [BRAND_FILTER_MSG, brand_words @ ..] if !brand_words.is_empty() => {
                catalog.set_brand_filter(&brand_words.join(" "));
                print_products(&catalog);
            }
            [BRANDS_MSG] => {
                for brand in &brands {
                    println!("{}", brand);
                }
            }
            [NO_FILTER_MSG] => {
                catalog.clear_filters();
                print_products(&catalog);
            }
            [ADD_MSG, id] => match id.parse::<u64>() {
                Ok(id) => {
                    if let Some(product) = catalog.find_product(id) {
                        cart.add_to_cart(&product);
                    } else {
                        warn!("[InputHandler] No product with id {} in the catalog.", id);
                    }
                }
                Err(_) => warn!("[InputHandler] Invalid product id: {}", id),
            },
            [REMOVE_MSG, id] => match id.parse::<u64>() {
                Ok(id) => cart.remove_from_cart(id),
                Err(_) => warn!("[InputHandler] Invalid product id: {}", id),
            },
            [QUANTITY_MSG, id, delta] => match (id.parse::<u64>(), delta.parse::<i32>()) {
                (Ok(id), Ok(delta)) => cart.update_quantity(id, delta),
                _ => warn!(
                    "[InputHandler] Invalid quantity update: {} {}",
                    id, delta
                ),
            },
            [SHOW_CART_MSG] => print_cart(cart),
            [EMPTY_CART_MSG] => {
                cart.clear_cart();
                println!("Cart emptied.");
            }
            _ => warn!(
                "[InputHandler] Unknown command. Available commands: {}, {}, {} <max>, {} <brand>, {}, {}, {} <id>, {} <id>, {} <id> <delta>, {}, {}, {}.",
                LIST_MSG,
                MORE_MSG,
                PRICE_FILTER_MSG,
                BRAND_FILTER_MSG,
                BRANDS_MSG,
                NO_FILTER_MSG,
                ADD_MSG,
                REMOVE_MSG,
                QUANTITY_MSG,
                SHOW_CART_MSG,
                EMPTY_CART_MSG,
                EXIT_MSG
            ),
        }
    }
    Ok(())
}

fn print_products(catalog: &CatalogView) {
    let visible = catalog.visible_products();
    if visible.is_empty() {
        println!("No products found for the active filter.");
        return;
    }
    for product in &visible {
        println!("{}", format_product(product));
    }
    if catalog.has_more() {
        println!(
            "Showing {} of {} products. Type {} to load more.",
            visible.len(),
            catalog.total_filtered(),
            MORE_MSG
        );
    } else {
        println!("{} products.", catalog.total_filtered());
    }
}

fn format_product(product: &Product) -> String {
    let marker = if product.is_featured() { " *" } else { "" };
    let brand = product
        .get_brand()
        .unwrap_or_else(|| "Unbranded".to_string());
    match product.price_value() {
        Some(price) => format!(
            "[{}] {} - {} - BOB {:.2}{}",
            product.get_id(),
            brand,
            product.get_name(),
            price,
            marker
        ),
        None => format!(
            "[{}] {} - {} - BOB {}{}",
            product.get_id(),
            brand,
            product.get_name(),
            product.get_price(),
            marker
        ),
    }
}

fn print_cart<S: CartStorage>(cart: &CartStore<S>) {
    let lines = cart.get_lines();
    if lines.is_empty() {
        println!("The cart is empty.");
        return;
    }
    for line in &lines {
        println!(
            "[{}] {} x{} - BOB {:.2}",
            line.get_id(),
            line.get_name(),
            line.get_quantity(),
            line.line_total()
        );
    }
    println!("{} items - total BOB {:.2}", cart.count(), cart.total());
}
