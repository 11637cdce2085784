//! Notifier Loop
//!
//! Reacts to the two client signals — pairing QR and session ready — and
//! runs the sequential send loop. The client handle arrives inside the
//! ready event, so the loop owns no state of its own.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;


/// Message delivered to every recipient.
pub const ALERT_MESSAGE: &str = "Your weather alert message";

/// Suffix turning a bare number into an individual-chat address on
/// WhatsApp Web.
pub const DEST_SUFFIX: &str = "@c.us";

/// Events surfaced by the messaging client.
pub enum ClientEvent<S> {
    /// A pairing payload to render on the terminal. Arrives again if an
    /// earlier code expires before being scanned; every occurrence is
    /// rendered.
    PairingQr(String),
    /// Authentication finished; the carried sender can deliver messages.
    Ready(S),
}

/// Error from a single send attempt.
#[derive(Debug, thiserror::Error)]
#[error("send to {destination} failed: {reason}")]
pub struct SendError {
    pub destination: String,
    pub reason: String,
}

/// Outbound side of the messaging client.
#[async_trait]
pub trait MessageSender {
    /// Deliver `text` to `destination`, resolving once the client
    /// acknowledges the send.
    async fn send_text(&self, destination: &str, text: &str) -> Result<(), SendError>;
}

/// Drive the notifier until dispatch completes.
///
/// `load_recipients` runs when the session becomes ready, not before;
/// its failure aborts the run with no send attempted. `render_qr` runs
/// once per pairing event. Returns after the send loop finishes; a
/// ready signal that never arrives leaves the loop suspended on the
/// channel indefinitely.
pub async fn run<S, C, Q>(
    mut events: UnboundedReceiver<ClientEvent<S>>,
    mut load_recipients: C,
    mut render_qr: Q,
) -> Result<()>
where
    S: MessageSender,
    C: FnMut() -> Result<Vec<String>>,
    Q: FnMut(&str) -> Result<()>,
{
    while let Some(event) = events.recv().await {
        match event {
            ClientEvent::PairingQr(code) => {
                tracing::info!("QR code available, scan it with your phone");
                render_qr(&code)?;
            }
            ClientEvent::Ready(sender) => {
                let numbers = load_recipients()?;
                tracing::info!("session ready, dispatching to {} recipient(s)", numbers.len());
                dispatch_all(&sender, &numbers, ALERT_MESSAGE).await?;
                return Ok(());
            }
        }
    }
    bail!("client event stream ended before the session became ready")
}

/// Send `text` to every recipient, strictly in list order.
///
/// One send in flight at a time: the next recipient's send does not
/// start until the previous one resolved. The first failure propagates
/// immediately and the remaining recipients are not attempted.
pub async fn dispatch_all<S: MessageSender>(
    sender: &S,
    recipients: &[String],
    text: &str,
) -> Result<(), SendError> {
    for number in recipients {
        let destination = format!("{number}{DEST_SUFFIX}");
        sender.send_text(&destination, text).await?;
        tracing::info!("alert sent to {destination}");
    }
    Ok(())
}
