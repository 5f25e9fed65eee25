//! Core BaseKing implementation: the fixed tables, the five step
//! transforms, and the round driver. Exports `crypt_block` and the tables
//! the cipher context needs to pick a direction.

pub mod constants;
mod transform;

pub use transform::crypt_block;
pub(crate) use transform::{mu, theta};
