use crate::coordinates::CoordinateFormat;

pub const RA_DEGREES_SUFFIX: &str = "/ra_decimal_degrees";
pub const DEC_DEGREES_SUFFIX: &str = "/dec_decimal_degrees";
pub const IMAGE_URL_SUFFIX: &str = "/image_url";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TelemetryField {
    Target,
    Start,
    RightAscension,
    Declination,
    Rotation,
    Available,
}

/// Topic layout under the configured namespace prefix.
#[derive(Debug, Clone)]
pub struct Topics {
    prefix: String,
    format: CoordinateFormat,
}

impl Topics {
    pub fn new(prefix: impl Into<String>, format: CoordinateFormat) -> Self {
        Self {
            prefix: prefix.into(),
            format,
        }
    }

    pub fn format(&self) -> CoordinateFormat {
        self.format
    }

    /// Which field a topic feeds, if any. Topics outside the namespace, our
    /// own republished topics and the inactive coordinate encoding map to
    /// `None`.
    pub fn field(&self, topic: &str) -> Option<TelemetryField> {
        let suffix = topic.strip_prefix(self.prefix.as_str())?;
        match suffix {
            "/name" => Some(TelemetryField::Target),
            "/start" => Some(TelemetryField::Start),
            "/rotation" => Some(TelemetryField::Rotation),
            "/available" => Some(TelemetryField::Available),
            s if s == self.format.right_ascension_suffix() => Some(TelemetryField::RightAscension),
            s if s == self.format.declination_suffix() => Some(TelemetryField::Declination),
            _ => None,
        }
    }

    pub fn ra_degrees(&self) -> String {
        self.topic(RA_DEGREES_SUFFIX)
    }

    pub fn dec_degrees(&self) -> String {
        self.topic(DEC_DEGREES_SUFFIX)
    }

    pub fn image_url(&self) -> String {
        self.topic(IMAGE_URL_SUFFIX)
    }

    fn topic(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_sexagesimal_topics() {
        let topics = Topics::new("scope", CoordinateFormat::Sexagesimal);

        assert_eq!(topics.field("scope/name"), Some(TelemetryField::Target));
        assert_eq!(topics.field("scope/start"), Some(TelemetryField::Start));
        assert_eq!(topics.field("scope/ra"), Some(TelemetryField::RightAscension));
        assert_eq!(topics.field("scope/dec"), Some(TelemetryField::Declination));
        assert_eq!(topics.field("scope/rotation"), Some(TelemetryField::Rotation));
        assert_eq!(topics.field("scope/available"), Some(TelemetryField::Available));
        assert_eq!(topics.field("scope/ra_decimal"), None);
    }

    #[test]
    fn recognizes_decimal_topics() {
        let topics = Topics::new("scope", CoordinateFormat::Decimal);

        assert_eq!(
            topics.field("scope/ra_decimal"),
            Some(TelemetryField::RightAscension)
        );
        assert_eq!(
            topics.field("scope/dec_decimal"),
            Some(TelemetryField::Declination)
        );
        assert_eq!(topics.field("scope/ra"), None);
    }

    #[test]
    fn ignores_republished_and_foreign_topics() {
        let topics = Topics::new("scope", CoordinateFormat::Sexagesimal);

        assert_eq!(topics.field(&topics.ra_degrees()), None);
        assert_eq!(topics.field(&topics.dec_degrees()), None);
        assert_eq!(topics.field(&topics.image_url()), None);
        assert_eq!(topics.field("other/name"), None);
        assert_eq!(topics.field("scopename"), None);
        assert_eq!(topics.field("scope/name/extra"), None);
    }

    #[test]
    fn builds_republish_topics() {
        let topics = Topics::new("obs/scope1", CoordinateFormat::Decimal);

        assert_eq!(topics.ra_degrees(), "obs/scope1/ra_decimal_degrees");
        assert_eq!(topics.dec_degrees(), "obs/scope1/dec_decimal_degrees");
        assert_eq!(topics.image_url(), "obs/scope1/image_url");
    }
}
