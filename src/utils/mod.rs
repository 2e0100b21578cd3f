//! The `utils` module holds the pieces shared by every other module of
//! `subledger`: the crate-wide error type and tracing initialisation.

pub mod error;
pub mod logging;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
