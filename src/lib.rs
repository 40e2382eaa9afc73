pub mod combinatorial;
pub mod dynamic;
pub mod error;
pub mod lcs;

pub use error::{Error, Result};
