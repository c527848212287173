use super::error::ParseError;
use super::DEGREES_PER_HOUR;

const DEC_UNIT_GLYPHS: [char; 3] = ['°', '\'', '"'];

/// Parse a sexagesimal right ascension (`HH:MM:SS[.fraction]`) into degrees.
///
/// Components are not range checked; anything `f64` accepts is taken as-is.
pub fn parse_right_ascension(text: &str) -> Result<f64, ParseError> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(ParseError::Format {
            coordinate: "right ascension",
            expected: "HH:MM:SS",
        });
    }

    let hours = parse_component(parts[0], "hours")?;
    let minutes = parse_component(parts[1], "minutes")?;
    let seconds = parse_component(parts[2], "seconds")?;

    let decimal_hours = hours + minutes / 60.0 + seconds / 3600.0;
    Ok(decimal_hours * DEGREES_PER_HOUR)
}

/// Parse a sexagesimal declination (`+DD° MM' SS"`) into degrees.
///
/// The unit glyphs are optional. The sign comes from a leading `-` on the
/// degrees field only, so `-0° 30' 0"` is -0.5.
pub fn parse_declination(text: &str) -> Result<f64, ParseError> {
    let cleaned: String = text.chars().filter(|c| !DEC_UNIT_GLYPHS.contains(c)).collect();

    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ParseError::Format {
            coordinate: "declination",
            expected: "D° M' S\"",
        });
    }

    let sign = if fields[0].starts_with('-') { -1.0 } else { 1.0 };

    let degrees = parse_component(fields[0], "degrees")?;
    let arcminutes = parse_component(fields[1], "arcminutes")?;
    let arcseconds = parse_component(fields[2], "arcseconds")?;

    let magnitude = degrees.abs() + arcminutes / 60.0 + arcseconds / 3600.0;
    Ok(sign * magnitude)
}

/// Parse a right ascension given in decimal hours into degrees.
pub fn parse_decimal_right_ascension(text: &str) -> Result<f64, ParseError> {
    Ok(parse_component(text.trim(), "decimal hours")? * DEGREES_PER_HOUR)
}

/// Parse a declination given in decimal degrees.
pub fn parse_decimal_declination(text: &str) -> Result<f64, ParseError> {
    parse_component(text.trim(), "decimal degrees")
}

fn parse_component(value: &str, component: &'static str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .map_err(|source| ParseError::Numeric { component, source })
}
