pub mod cart_storage;
pub mod cart_store;
pub mod catalog_view;
pub mod constants;
pub mod input_handler;
