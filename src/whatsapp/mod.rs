//! WhatsApp Integration
//!
//! Runs the WhatsApp Web client that delivers the alert, bridging its
//! pairing and ready events onto the notifier loop.

mod client;

pub use client::start;
