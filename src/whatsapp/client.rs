//! WhatsApp client bridge.
//!
//! Builds the whatsapp-rust client and forwards its pairing and
//! connection events onto the channel the notifier loop consumes.
//! Sessions are not persisted: every run pairs fresh via QR scan.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use wacore::types::events::Event;
use wacore_binary::jid::Jid;
use whatsapp_rust::bot::Bot;
use whatsapp_rust::store::SqliteStore;
use whatsapp_rust_tokio_transport::TokioWebSocketTransportFactory;
use whatsapp_rust_ureq_http_client::UreqHttpClient;

use crate::notifier::{ClientEvent, MessageSender, SendError};

/// Sends text messages through a connected WhatsApp session.
#[derive(Clone)]
pub struct WhatsAppSender {
    client: Arc<whatsapp_rust::Client>,
}

#[async_trait]
impl MessageSender for WhatsAppSender {
    async fn send_text(&self, destination: &str, text: &str) -> Result<(), SendError> {
        let jid: Jid = destination.parse().map_err(|e| SendError {
            destination: destination.to_string(),
            reason: format!("invalid address: {e}"),
        })?;
        let message = waproto::whatsapp::Message {
            conversation: Some(text.to_string()),
            ..Default::default()
        };
        self.client
            .send_message(jid, message)
            .await
            .map_err(|e| SendError {
                destination: destination.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Start the client as a background task. Returns a JoinHandle.
///
/// Pairing QR payloads and the ready signal are forwarded through `tx`;
/// other connection-state events are only logged.
pub fn start(tx: UnboundedSender<ClientEvent<WhatsAppSender>>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        // In-memory session store: pairing is per-run, nothing written to disk.
        let backend = match SqliteStore::new(":memory:").await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!("failed to open session store: {}", e);
                return;
            }
        };

        let bot_result = Bot::builder()
            .with_backend(backend)
            .with_transport_factory(TokioWebSocketTransportFactory::new())
            .with_http_client(UreqHttpClient::new())
            .on_event(move |event, client| {
                let tx = tx.clone();
                async move {
                    match event {
                        Event::PairingQrCode { ref code, .. } => {
                            let _ = tx.send(ClientEvent::PairingQr(code.clone()));
                        }
                        Event::PairSuccess(_) => {
                            tracing::info!("pairing successful");
                        }
                        Event::Connected(_) => {
                            tracing::info!("connected successfully");
                            let _ = tx.send(ClientEvent::Ready(WhatsAppSender { client }));
                        }
                        Event::LoggedOut(_) => {
                            tracing::warn!("logged out");
                        }
                        Event::Disconnected(_) => {
                            tracing::warn!("disconnected");
                        }
                        _ => {}
                    }
                }
            })
            .build()
            .await;

        let mut bot = match bot_result {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("failed to build client: {}", e);
                return;
            }
        };

        match bot.run().await {
            Ok(handle) => {
                if let Err(e) = handle.await {
                    tracing::error!("client task error: {:?}", e);
                }
            }
            Err(e) => {
                tracing::error!("client error: {}", e);
            }
        }
    })
}
