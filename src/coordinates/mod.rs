mod error;
mod format;
mod parsing;

pub use error::ParseError;
pub use format::CoordinateFormat;

/// Degrees of right ascension per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;
