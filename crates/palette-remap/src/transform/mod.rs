//! Whole-image color substitution.
//!
//! Every output pixel depends only on the pixel at the same position and on
//! the read-only [`ColorMapping`](crate::ColorMapping), so large images are
//! split into rows and remapped on the rayon thread pool.

mod error;
mod transformer;

pub use error::TransformError;
pub use transformer::{apply, Transformer, PARALLEL_THRESHOLD};
