use std::num::ParseFloatError;

use thiserror::Error;

use crate::coordinates::ParseError;

/// Why an inbound payload was not applied to its field.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Coordinate(#[from] ParseError),
    #[error("invalid start time: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("invalid rotation: {0}")]
    Rotation(#[source] ParseFloatError),
}
