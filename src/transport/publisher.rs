use async_trait::async_trait;
use rumqttc::{AsyncClient, QoS};

use super::error::TransportError;

/// Outbound side of the broker connection.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a retained message with at-least-once delivery.
    async fn publish_retained(&self, topic: &str, payload: String) -> Result<(), TransportError>;
}

#[derive(Clone)]
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MqttPublisher {
    pub(super) fn new(client: AsyncClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    async fn publish_retained(&self, topic: &str, payload: String) -> Result<(), TransportError> {
        // The event loop may be parked on the inbound channel we drain, so
        // never wait for room in its request queue.
        self.client
            .try_publish(topic, QoS::AtLeastOnce, true, payload)?;
        Ok(())
    }
}
