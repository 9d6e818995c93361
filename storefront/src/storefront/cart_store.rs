//! This module contains the `CartStore`, the single source of truth for
//! the items the user has selected during the session.
//!
//! The store holds an ordered sequence of cart lines (insertion order =
//! add order, at most one line per product id) and writes the whole cart
//! through its storage adapter after every mutation. Storage failures are
//! logged and swallowed: in-memory state stays the authority for the rest
//! of the session.

use shared::model::{cart_line::CartLine, product::Product};
use tracing::{debug, info, warn};

use super::cart_storage::CartStorage;

#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    lines: Vec<CartLine>,
    storage: S,
    hydrated: bool,
}

impl<S: CartStorage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        CartStore {
            lines: vec![],
            storage,
            hydrated: false,
        }
    }

    /// Loads the persisted cart into the store. Runs at most once per
    /// store: later calls are no-ops. An absent or malformed slot is
    /// treated as an empty cart.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        match self.storage.load() {
            Ok(lines) => {
                info!("[CartStore] Hydrated {} cart lines from storage.", lines.len());
                self.lines = lines;
            }
            Err(err) => {
                warn!("[CartStore] Could not hydrate cart, starting empty: {}", err);
            }
        }
        self.hydrated = true;
    }

    /// Increments the quantity of the product's line, appending a new
    /// line with quantity 1 on the first add. Always succeeds.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.get_id() == product.get_id())
        {
            let _ = line.affect_quantity_with_value(1);
            info!(
                "[CartStore] Incremented quantity of product {} to {}.",
                product.get_id(),
                line.get_quantity()
            );
        } else {
            self.lines.push(CartLine::from_product(product));
            info!("[CartStore] Added product {} to the cart.", product.get_id());
        }
        self.persist();
    }

    /// Deletes the line with that id; silent no-op when absent.
    pub fn remove_from_cart(&mut self, id: u64) {
        let count_before = self.lines.len();
        self.lines.retain(|line| line.get_id() != id);
        if self.lines.len() == count_before {
            debug!("[CartStore] Product {} is not in the cart, nothing to remove.", id);
            return;
        }
        info!("[CartStore] Removed product {} from the cart.", id);
        self.persist();
    }

    /// Adds `delta` to the line's quantity. A result of zero or below
    /// removes the line entirely. Silent no-op when the id is absent.
    pub fn update_quantity(&mut self, id: u64, delta: i32) {
        let Some(position) = self.lines.iter().position(|line| line.get_id() == id) else {
            debug!("[CartStore] Product {} is not in the cart, nothing to update.", id);
            return;
        };
        if self.lines[position].affect_quantity_with_value(delta).is_err() {
            self.lines.remove(position);
            info!("[CartStore] Quantity of product {} dropped to zero, line removed.", id);
        } else {
            info!(
                "[CartStore] Updated quantity of product {} to {}.",
                id,
                self.lines[position].get_quantity()
            );
        }
        self.persist();
    }

    pub fn is_in_cart(&self, id: u64) -> bool {
        self.lines.iter().any(|line| line.get_id() == id)
    }

    pub fn clear_cart(&mut self) {
        info!("[CartStore] Clearing the cart.");
        self.lines.clear();
        self.persist();
    }

    /// Sum of all line quantities.
    pub fn count(&self) -> i32 {
        self.lines.iter().map(|line| line.get_quantity()).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.line_total()).sum()
    }

    pub fn get_lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.lines) {
            warn!("[CartStore] Could not persist cart: {}", err);
        }
    }
}
