use anyhow::Context;
use arboard::Clipboard;
use async_trait::async_trait;

use super::ClipboardWriter;

/// System clipboard via `arboard`; each write opens its own handle on a
/// blocking thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
            clipboard
                .set_text(text)
                .context("failed to write clipboard text")?;
            Ok(())
        })
        .await
        .context("clipboard task panicked")?
    }
}
