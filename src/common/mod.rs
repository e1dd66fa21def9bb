//! Общие типы и утилиты для RustSQL

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use config::*;
pub use constants::*;
pub use error::{Error, Expected, Result};
pub use logging::init_logging;
