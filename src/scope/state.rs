use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

use crate::image::Pointing;

/// Last known telescope telemetry plus the image URL derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ScopeState {
    /// Name of the current observation target.
    pub target: String,
    /// When the current observation began; `null` until first reported.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub start: Option<DateTime<FixedOffset>>,
    /// Right ascension in decimal degrees.
    pub ra: f64,
    /// Declination in decimal degrees.
    pub dec: f64,
    /// Field rotation in degrees.
    pub rotation: f64,
    /// Whether the mount reports itself available.
    pub live: bool,
    pub image_url: String,
}

impl ScopeState {
    pub fn pointing(&self) -> Pointing {
        Pointing {
            ra_deg: self.ra,
            dec_deg: self.dec,
            rotation_deg: self.rotation,
        }
    }
}
