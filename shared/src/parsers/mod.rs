pub mod catalog_parser;
