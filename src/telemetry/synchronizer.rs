use std::sync::Arc;

use tokio::sync::mpsc;

use super::error::FieldError;
use super::topics::Topics;
use super::update::FieldUpdate;
use crate::image::{derive_image_url, ImageConfig};
use crate::scope::{ScopeState, ScopeStore};
use crate::transport::{InboundMessage, Publisher};

/// What happened to one inbound message.
#[derive(Debug)]
pub enum Outcome {
    /// Topic is not a telemetry field we track.
    Ignored,
    /// Payload did not parse; the store was left alone.
    Rejected(FieldError),
    /// Store updated; carries the resulting state.
    Applied(ScopeState),
}

/// Turns broker messages into scope state updates and republishes the
/// derived values.
pub struct Synchronizer<P> {
    store: Arc<ScopeStore>,
    publisher: P,
    topics: Topics,
    image: ImageConfig,
}

impl<P: Publisher> Synchronizer<P> {
    pub fn new(store: Arc<ScopeStore>, publisher: P, topics: Topics, image: ImageConfig) -> Self {
        Self {
            store,
            publisher,
            topics,
            image,
        }
    }

    /// Consume messages in arrival order until the transport goes away.
    pub async fn run(self, mut inbound: mpsc::Receiver<InboundMessage>) {
        while let Some(message) = inbound.recv().await {
            if let Outcome::Rejected(e) = self.handle(&message.topic, &message.payload).await {
                log::error!(
                    "Dropped payload {:?} from {}: {}",
                    message.payload,
                    message.topic,
                    e
                );
            }
        }
        log::info!("Inbound message channel closed, telemetry synchronizer stopping");
    }

    pub async fn handle(&self, topic: &str, payload: &str) -> Outcome {
        let Some(field) = self.topics.field(topic) else {
            return Outcome::Ignored;
        };

        let update = match FieldUpdate::parse(field, payload, self.topics.format()) {
            Ok(update) => update,
            Err(e) => return Outcome::Rejected(e),
        };
        log::debug!("{} updated from {}: {:?}", field, topic, update);

        // Field and image URL change together so no snapshot pairs a URL
        // with coordinates it was not built from.
        let state = self.store.update(|state| {
            update.apply(state);
            state.image_url = derive_image_url(&state.pointing(), &self.image);
        });

        match update {
            FieldUpdate::RightAscension(ra) => {
                self.republish(self.topics.ra_degrees(), format!("{:.6}", ra))
                    .await
            }
            FieldUpdate::Declination(dec) => {
                self.republish(self.topics.dec_degrees(), format!("{:.6}", dec))
                    .await
            }
            _ => {}
        }

        // Republished after every accepted field, coordinates or not.
        self.republish(self.topics.image_url(), state.image_url.clone())
            .await;

        Outcome::Applied(state)
    }

    async fn republish(&self, topic: String, payload: String) {
        if let Err(e) = self.publisher.publish_retained(&topic, payload).await {
            log::error!("Failed to publish {}: {}", topic, e);
        }
    }
}
