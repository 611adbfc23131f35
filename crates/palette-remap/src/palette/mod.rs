//! Palette extraction and positional color mapping
//!
//! [`ColorCatalog`] records the distinct colors of an image in the order they
//! are first seen. [`ColorMapping`] pairs two catalogs index by index.

mod catalog;
mod error;
mod mapping;

pub use catalog::ColorCatalog;
pub use error::ParseColorError;
pub use mapping::ColorMapping;
