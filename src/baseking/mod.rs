mod cipher;
mod core;
mod error;
mod key;
mod util;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::Key;
