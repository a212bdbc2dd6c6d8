//! Shared domain primitives (value objects, enums, errors, warnings).

mod direction;
mod errors;
mod unit_interval;
mod warnings;

pub use direction::BetterDirection;
pub use errors::{EngineError, ValidationError};
pub use unit_interval::UnitInterval;
pub use warnings::EngineWarning;
