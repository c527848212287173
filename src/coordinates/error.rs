use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid {coordinate} format, expected {expected}")]
    Format {
        coordinate: &'static str,
        expected: &'static str,
    },
    #[error("invalid {component}: {source}")]
    Numeric {
        component: &'static str,
        #[source]
        source: ParseFloatError,
    },
}
