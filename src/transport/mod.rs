mod client;
mod error;
mod publisher;

pub use client::{InboundMessage, MqttTransport};
pub use error::TransportError;
pub use publisher::Publisher;
