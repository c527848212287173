use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid broker URL: {0}")]
    InvalidBroker(#[from] url::ParseError),
    #[error("unsupported broker scheme: {0}")]
    UnsupportedScheme(String),
    #[error("broker URL has no host: {0}")]
    MissingHost(String),
    #[error("MQTT client error: {0}")]
    Client(#[from] rumqttc::ClientError),
    #[error("MQTT connection error: {0}")]
    Connection(#[from] rumqttc::ConnectionError),
    #[error("subscription to {0} rejected by broker")]
    SubscribeRejected(String),
    #[error("no connection to broker within {0:?}")]
    ConnectTimeout(Duration),
}
