//! Product catalog module.
//!
//! Contains the listing product shown on catalog cards.

mod product;

pub use product::Product;
