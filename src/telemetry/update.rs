use chrono::{DateTime, FixedOffset};

use super::error::FieldError;
use super::topics::TelemetryField;
use crate::coordinates::CoordinateFormat;
use crate::scope::ScopeState;

/// A parsed, ready-to-apply change to one field of the scope state.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Target(String),
    Start(DateTime<FixedOffset>),
    RightAscension(f64),
    Declination(f64),
    Rotation(f64),
    Available(bool),
}

impl FieldUpdate {
    pub fn parse(
        field: TelemetryField,
        payload: &str,
        format: CoordinateFormat,
    ) -> Result<Self, FieldError> {
        let update = match field {
            TelemetryField::Target => FieldUpdate::Target(payload.to_string()),
            TelemetryField::Start => {
                FieldUpdate::Start(DateTime::parse_from_rfc3339(payload.trim())?)
            }
            TelemetryField::RightAscension => {
                FieldUpdate::RightAscension(format.parse_right_ascension(payload)?)
            }
            TelemetryField::Declination => {
                FieldUpdate::Declination(format.parse_declination(payload)?)
            }
            TelemetryField::Rotation => FieldUpdate::Rotation(
                payload
                    .trim()
                    .parse::<f64>()
                    .map_err(FieldError::Rotation)?,
            ),
            TelemetryField::Available => FieldUpdate::Available(payload.trim() == "true"),
        };
        Ok(update)
    }

    pub fn apply(&self, state: &mut ScopeState) {
        match self {
            FieldUpdate::Target(target) => state.target = target.clone(),
            FieldUpdate::Start(start) => state.start = Some(*start),
            FieldUpdate::RightAscension(ra) => state.ra = *ra,
            FieldUpdate::Declination(dec) => state.dec = *dec,
            FieldUpdate::Rotation(rotation) => state.rotation = *rotation,
            FieldUpdate::Available(live) => state.live = *live,
        }
    }
}
