use serde::Deserialize;

use super::request::HIPS2FITS_URL;

/// FITS-WCS projection codes accepted by hips2fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::AsRefStr)]
pub enum Projection {
    #[serde(rename = "AZP")]
    #[strum(serialize = "AZP")]
    ZenithalPerspective,
    #[serde(rename = "SZP")]
    #[strum(serialize = "SZP")]
    SlantZenithalPerspective,
    #[default]
    #[serde(rename = "TAN")]
    #[strum(serialize = "TAN")]
    Gnomonic,
    #[serde(rename = "STG")]
    #[strum(serialize = "STG")]
    Stereographic,
    #[serde(rename = "SIN")]
    #[strum(serialize = "SIN")]
    Orthographic,
    #[serde(rename = "ARC")]
    #[strum(serialize = "ARC")]
    ZenithalEquidistant,
    #[serde(rename = "ZEA")]
    #[strum(serialize = "ZEA")]
    ZenithalEqualArea,
    #[serde(rename = "AIR")]
    #[strum(serialize = "AIR")]
    Airy,
    #[serde(rename = "CYP")]
    #[strum(serialize = "CYP")]
    CylindricalPerspective,
    #[serde(rename = "CEA")]
    #[strum(serialize = "CEA")]
    CylindricalEqualArea,
    #[serde(rename = "CAR")]
    #[strum(serialize = "CAR")]
    PlateCarree,
    #[serde(rename = "MER")]
    #[strum(serialize = "MER")]
    Mercator,
    #[serde(rename = "SFL")]
    #[strum(serialize = "SFL")]
    SansonFlamsteed,
    #[serde(rename = "PAR")]
    #[strum(serialize = "PAR")]
    Parabolic,
    #[serde(rename = "MOL")]
    #[strum(serialize = "MOL")]
    Mollweide,
    #[serde(rename = "AIT")]
    #[strum(serialize = "AIT")]
    HammerAitoff,
    #[serde(rename = "TSC")]
    #[strum(serialize = "TSC")]
    TangentialSphericalCube,
    #[serde(rename = "QSC")]
    #[strum(serialize = "QSC")]
    QuadrilateralizedSphericalCube,
    #[serde(rename = "HPX")]
    #[strum(serialize = "HPX")]
    HealPix,
    #[serde(rename = "XPH")]
    #[strum(serialize = "XPH")]
    HealPixPolar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Fits,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stretch {
    Power,
    #[default]
    Linear,
    Sqrt,
    Log,
    Asinh,
}

/// Static display settings for the derived sky image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default = "default_hips")]
    pub hips: String,
    /// Field of view in degrees.
    #[serde(default = "default_fov")]
    pub fov: f64,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default = "default_size")]
    pub width: u32,
    #[serde(default = "default_size")]
    pub height: u32,
    #[serde(default)]
    pub stretch: Stretch,
    /// Lower percentile cut, in percent.
    #[serde(default = "default_min_cut")]
    pub min_cut: f64,
    /// Upper percentile cut, in percent.
    #[serde(default = "default_max_cut")]
    pub max_cut: f64,
}

fn default_service_url() -> String {
    HIPS2FITS_URL.to_string()
}

fn default_hips() -> String {
    "CDS/P/DSS2/color".to_string()
}

fn default_fov() -> f64 {
    1.0
}

fn default_size() -> u32 {
    1000
}

fn default_min_cut() -> f64 {
    0.5
}

fn default_max_cut() -> f64 {
    99.5
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            projection: Projection::default(),
            hips: default_hips(),
            fov: default_fov(),
            format: ImageFormat::default(),
            width: default_size(),
            height: default_size(),
            stretch: Stretch::default(),
            min_cut: default_min_cut(),
            max_cut: default_max_cut(),
        }
    }
}
