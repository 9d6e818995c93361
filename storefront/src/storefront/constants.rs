pub const DEFAULT_CATALOG_FILEPATH: &str = "./data/products.json";
pub const DEFAULT_CART_FILEPATH: &str = "./data/cart.json";
pub const DEFAULT_PAGE_SIZE: usize = 30;

// ==================== COMMANDS ====================
pub const EXIT_MSG: &str = "q";
pub const LIST_MSG: &str = "list";
pub const MORE_MSG: &str = "more";
pub const PRICE_FILTER_MSG: &str = "price";
pub const BRAND_FILTER_MSG: &str = "brand";
pub const BRANDS_MSG: &str = "brands";
pub const NO_FILTER_MSG: &str = "nofilter";
pub const ADD_MSG: &str = "add";
pub const REMOVE_MSG: &str = "rm";
pub const QUANTITY_MSG: &str = "qty";
pub const SHOW_CART_MSG: &str = "cart";
pub const EMPTY_CART_MSG: &str = "empty";
