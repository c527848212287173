use std::time::Duration;

use rumqttc::{
    AsyncClient, Event, EventLoop, MqttOptions, Outgoing, Packet, Publish, QoS,
    SubscribeReasonCode,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use url::Url;

use super::error::TransportError;
use super::publisher::MqttPublisher;
use crate::config::MqttConfig;

const REQUEST_CAPACITY: usize = 64;
const RECONNECT_DELAY: Duration = Duration::from_secs(1);
const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// A publish received from the broker.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BrokerAddress {
    host: String,
    port: u16,
    tls: bool,
}

pub struct MqttTransport {
    client: AsyncClient,
    event_loop: JoinHandle<()>,
}

impl MqttTransport {
    /// Connect, subscribe to `{prefix}/#` and start forwarding publishes into
    /// `inbound`. Returns once the broker has acknowledged the subscription.
    pub async fn connect(
        config: &MqttConfig,
        inbound: mpsc::Sender<InboundMessage>,
    ) -> Result<Self, TransportError> {
        let address = parse_broker(&config.broker)?;
        let client_id = format!("{}_{}", config.client_id, uuid::Uuid::new_v4());

        let mut options = MqttOptions::new(client_id.clone(), address.host.clone(), address.port);
        options.set_keep_alive(config.keep_alive);
        options.set_clean_session(false);
        if let Some(username) = &config.username {
            options.set_credentials(username, config.password.as_deref().unwrap_or_default());
        }
        if address.tls {
            options.set_transport(rumqttc::Transport::tls_with_default_config());
        }

        let (client, mut event_loop) = AsyncClient::new(options, REQUEST_CAPACITY);
        let subscription = format!("{}/#", config.prefix);
        client.subscribe(&subscription, QoS::AtLeastOnce).await?;

        log::info!(
            "Connecting to MQTT broker {}:{} as {}",
            address.host,
            address.port,
            client_id
        );

        timeout(
            config.connect_timeout,
            await_subscription(&mut event_loop, &subscription, &inbound),
        )
        .await
        .map_err(|_| TransportError::ConnectTimeout(config.connect_timeout))??;

        log::info!("Subscribed to {}", subscription);

        let event_loop = tokio::spawn(drive_event_loop(
            event_loop,
            client.clone(),
            subscription,
            inbound,
        ));

        Ok(Self { client, event_loop })
    }

    pub fn publisher(&self) -> MqttPublisher {
        MqttPublisher::new(self.client.clone())
    }

    /// Send DISCONNECT and wait (bounded) for the event loop to wind down.
    pub async fn disconnect(self) -> Result<(), TransportError> {
        self.client.disconnect().await?;
        if timeout(DISCONNECT_TIMEOUT, self.event_loop).await.is_err() {
            log::warn!(
                "MQTT event loop did not stop within {:?}",
                DISCONNECT_TIMEOUT
            );
        }
        Ok(())
    }
}

async fn await_subscription(
    event_loop: &mut EventLoop,
    subscription: &str,
    inbound: &mpsc::Sender<InboundMessage>,
) -> Result<(), TransportError> {
    loop {
        match event_loop.poll().await? {
            Event::Incoming(Packet::ConnAck(_)) => log::info!("Connected to MQTT broker"),
            Event::Incoming(Packet::SubAck(ack)) => {
                if ack
                    .return_codes
                    .iter()
                    .any(|code| matches!(code, SubscribeReasonCode::Failure))
                {
                    return Err(TransportError::SubscribeRejected(subscription.to_string()));
                }
                return Ok(());
            }
            Event::Incoming(Packet::Publish(publish)) => {
                forward(inbound, publish).await;
            }
            _ => {}
        }
    }
}

async fn drive_event_loop(
    mut event_loop: EventLoop,
    client: AsyncClient,
    subscription: String,
    inbound: mpsc::Sender<InboundMessage>,
) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                if !forward(&inbound, publish).await {
                    log::warn!("Inbound channel closed, stopping MQTT event loop");
                    break;
                }
            }
            Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                log::info!("Reconnected to MQTT broker");
                if !ack.session_present {
                    // rumqttc polls this loop, so only the non-blocking variant is safe here.
                    if let Err(e) = client.try_subscribe(subscription.as_str(), QoS::AtLeastOnce) {
                        log::error!("Failed to resubscribe to {}: {}", subscription, e);
                    }
                }
            }
            Ok(Event::Outgoing(Outgoing::Disconnect)) => {
                log::info!("Disconnected from MQTT broker");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("MQTT connection error: {}", e);
                sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

async fn forward(inbound: &mpsc::Sender<InboundMessage>, publish: Publish) -> bool {
    let message = InboundMessage {
        payload: String::from_utf8_lossy(&publish.payload).into_owned(),
        topic: publish.topic,
    };
    inbound.send(message).await.is_ok()
}

fn parse_broker(broker: &str) -> Result<BrokerAddress, TransportError> {
    let url = Url::parse(broker)?;
    let (tls, default_port) = match url.scheme() {
        "mqtt" | "tcp" => (false, 1883),
        "mqtts" | "ssl" | "tls" => (true, 8883),
        other => return Err(TransportError::UnsupportedScheme(other.to_string())),
    };
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| TransportError::MissingHost(broker.to_string()))?;

    Ok(BrokerAddress {
        host: host.to_string(),
        port: url.port().unwrap_or(default_port),
        tls,
    })
}
