use url::form_urlencoded;

use super::types::ImageConfig;

pub const HIPS2FITS_URL: &str = "https://alaskybis.u-strasbg.fr/hips-image-services/hips2fits";

/// The parts of the scope state that end up in the image request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointing {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub rotation_deg: f64,
}

/// Build the hips2fits request URL for a pointing.
///
/// Parameters are emitted in key order and form-encoded, so equal inputs give
/// byte-identical URLs.
pub fn derive_image_url(pointing: &Pointing, image: &ImageConfig) -> String {
    let mut params: Vec<(&str, String)> = vec![
        ("projection", image.projection.as_ref().to_string()),
        ("hips", image.hips.clone()),
        ("fov", format!("{:.6}", image.fov)),
        ("ra", format!("{:.6}", pointing.ra_deg)),
        ("dec", format!("{:.6}", pointing.dec_deg)),
        ("format", image.format.as_ref().to_string()),
        ("width", image.width.to_string()),
        ("height", image.height.to_string()),
        ("stretch", image.stretch.as_ref().to_string()),
        ("rotation_angle", format!("{:.6}", pointing.rotation_deg)),
        ("min_cut", format!("{:.6}%", image.min_cut)),
        ("max_cut", format!("{:.6}%", image.max_cut)),
    ];
    params.sort_by_key(|(key, _)| *key);

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();

    format!("{}?{}", image.service_url, query)
}
