use serde::Deserialize;

use super::error::ParseError;
use super::parsing::{
    parse_decimal_declination, parse_decimal_right_ascension, parse_declination,
    parse_right_ascension,
};

/// Encoding the mount publishes its pointing in. Exactly one is active per
/// deployment; it decides both the inbound topic names and the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CoordinateFormat {
    /// `HH:MM:SS` on `/ra`, `+DD° MM' SS"` on `/dec`.
    #[default]
    Sexagesimal,
    /// Decimal hours on `/ra_decimal`, decimal degrees on `/dec_decimal`.
    Decimal,
}

impl CoordinateFormat {
    pub fn right_ascension_suffix(self) -> &'static str {
        match self {
            CoordinateFormat::Sexagesimal => "/ra",
            CoordinateFormat::Decimal => "/ra_decimal",
        }
    }

    pub fn declination_suffix(self) -> &'static str {
        match self {
            CoordinateFormat::Sexagesimal => "/dec",
            CoordinateFormat::Decimal => "/dec_decimal",
        }
    }

    pub fn parse_right_ascension(self, text: &str) -> Result<f64, ParseError> {
        match self {
            CoordinateFormat::Sexagesimal => parse_right_ascension(text),
            CoordinateFormat::Decimal => parse_decimal_right_ascension(text),
        }
    }

    pub fn parse_declination(self, text: &str) -> Result<f64, ParseError> {
        match self {
            CoordinateFormat::Sexagesimal => parse_declination(text),
            CoordinateFormat::Decimal => parse_decimal_declination(text),
        }
    }
}
