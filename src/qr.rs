//! Terminal QR rendering for WhatsApp Web pairing.

use anyhow::Result;
use qrcode::QrCode;
use qrcode::render::unicode;

/// Render a pairing payload as a compact QR code and print it.
pub fn print_to_terminal(payload: &str) -> Result<()> {
    println!("{}", render(payload)?);
    Ok(())
}

/// Render to half-height unicode blocks. Colors are inverted so the
/// code stays scannable on dark terminal themes.
fn render(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_unicode_blocks() {
        let art = render("pairing-payload").unwrap();
        assert!(!art.is_empty());
        // Version 1 code plus quiet zone, two module rows per line.
        assert!(art.lines().count() >= 10);
    }

    #[test]
    fn distinct_payloads_render_distinct_codes() {
        assert_ne!(render("first").unwrap(), render("second").unwrap());
    }
}
