//! This crate contains the data model and the catalog parser shared between the storefront crate and its tests.

pub mod model;
pub mod parsers;
