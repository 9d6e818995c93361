pub mod cart_line;
pub mod product;
