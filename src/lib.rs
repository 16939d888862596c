//! BerapaNanti - financial literacy calculators
//!
//! This library provides:
//! - Period-indexed rate tables (inflation, asset returns, minimum wages)
//! - A sequential compounding engine over flat rates or rate tables
//! - Calculators: future price, goal cost, historical value, investment
//!   comparison, living cost versus minimum wage
//! - CSV loaders for external rate data, input validation and id-ID formatting

pub mod error;
pub mod rates;
pub mod compounding;
pub mod calculators;
pub mod validation;
pub mod format;

// Re-export commonly used types
pub use error::{CalcError, InputError, RateLoadError};
pub use rates::{AssetClass, Period, RateBook, RateEntry, RateTable};
pub use compounding::{compound, compound_flat, CompoundingRequest, CompoundingResult};
pub use calculators::{percentage_difference, Calculator};
