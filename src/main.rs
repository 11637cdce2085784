//! WhatsApp weather alert notifier.
//!
//! Pairs a WhatsApp Web session via a terminal QR scan, sends the alert
//! message to every number in `RECIPIENT_NUMBERS`, and exits.

mod config;
mod notifier;
mod qr;
mod whatsapp;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wa_alert=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let client_task = whatsapp::start(tx);

    notifier::run(rx, config::recipient_numbers, qr::print_to_terminal).await?;

    // Dispatch finished; nothing else keeps the client alive.
    client_task.abort();
    Ok(())
}
